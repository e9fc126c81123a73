mod builder;
mod types;

mod contract;
mod sale;
mod token;

pub use types::{EventLog, EventRecord};

pub(crate) use contract::*;
pub(crate) use sale::*;
pub(crate) use token::*;

pub(crate) const STANDARD: &str = "registry";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";
