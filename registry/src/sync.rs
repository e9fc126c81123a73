use parking_lot::Mutex;
use std::sync::Arc;

use crate::*;

/// Thread-safe handle over a [`Registry`]. The registry itself assumes a
/// single caller at a time; this wrapper supplies that exclusion so the
/// registry can be shared across threads.
#[derive(Clone)]
pub struct SharedRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl SharedRegistry {
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    pub fn read<T>(&self, f: impl FnOnce(&Registry) -> T) -> T {
        f(&self.inner.lock())
    }

    pub fn write<T>(&self, f: impl FnOnce(&mut Registry) -> T) -> T {
        f(&mut self.inner.lock())
    }
}
