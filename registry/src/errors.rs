use registry_types::{AccountId, TokenId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize)]
pub enum RegistryError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Already exists: {0}")]
    AlreadyExists(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
    #[error("Rejected by receiver: {0}")]
    RejectedByReceiver(String),
    #[error("Reentrant call: {0}")]
    ReentrantCall(String),
    #[error("Insufficient deposit: {0}")]
    InsufficientDeposit(String),
}

impl RegistryError {
    pub fn token_not_found(token_id: TokenId) -> Self {
        Self::NotFound(format!("Token {} not found", token_id))
    }
    pub fn tier_not_found(tier_id: usize) -> Self {
        Self::NotFound(format!("Sale tier {} not found", tier_id))
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
    pub fn null_destination(context: &str) -> Self {
        Self::InvalidArgument(format!("Cannot {} to the null account", context))
    }
    pub fn index_out_of_range(index: u64, len: u64) -> Self {
        Self::InvalidArgument(format!("Index {} out of range (length {})", index, len))
    }
    pub fn wrong_owner(token_id: TokenId, stated: &AccountId, actual: &AccountId) -> Self {
        Self::InvariantViolation(format!(
            "Token {} is owned by {}, not {}",
            token_id, actual, stated
        ))
    }
}
