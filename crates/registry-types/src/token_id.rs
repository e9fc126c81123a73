use serde::{Deserialize, Serialize};
use std::fmt;

/// A token identifier. Unique for the lifetime of the registry: identifiers
/// of burned tokens are retired, never reassigned.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct TokenId(pub u64);

impl TokenId {
    pub fn value(self) -> u64 {
        self.0
    }

    pub fn checked_next(self) -> Option<TokenId> {
        self.0.checked_add(1).map(TokenId)
    }
}

impl From<u64> for TokenId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
