//! Shared leaf types for the token registry.
//! Dependency-light, usable by the registry crate and by host code alike.

mod account;
mod token_id;

pub use account::{AccountId, ParseAccountIdError};
pub use token_id::TokenId;
