//! In-process token ownership registry.
//!
//! Tracks unique tokens, their owners, delegate and operator approvals,
//! paged enumeration, tiered primary sales, and referral commissions.
//! Safe transfers consult an acceptance entry point on contract
//! destinations and unwind when the destination rejects.
//!
//! The registry is single-threaded by construction; wrap it in
//! [`SharedRegistry`] to share it across threads.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub mod constants;

mod admin;
mod errors;
mod events;
mod fees;
mod guards;
mod interfaces;
mod receiver;
mod sale;
mod sync;
mod token;
mod validation;


pub use constants::*;
pub use errors::RegistryError;
pub use events::{EventLog, EventRecord};
pub use interfaces::InterfaceTag;
pub use receiver::TokenReceiver;
pub use registry_types::{AccountId, ParseAccountIdError, TokenId};
pub use sale::{SaleTier, SaleTierUpdate};
pub use sync::SharedRegistry;
pub use token::TokenView;

/// Collection-level metadata. `base_uri`, when set, prefixes every token
/// URI; see [`Registry::token_uri`] for the exact composition rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryMetadata {
    pub name: String,
    pub symbol: String,
    pub base_uri: Option<String>,
}

pub struct Registry {
    version: String,
    owner_id: AccountId,
    metadata: RegistryMetadata,
    index: token::index::OwnershipIndex,
    approvals: token::approval::ApprovalStore,
    token_uris: HashMap<TokenId, String>,
    // Ids of burned tokens; never reissued.
    retired_ids: HashSet<TokenId>,
    next_token_id: TokenId,
    sale: sale::SaleState,
    referrals: fees::ReferralLedger,
    interfaces: &'static [InterfaceTag],
    receivers: receiver::ReceiverTable,
    guard: guards::ReentrancyGuard,
    events: events::EventLog,
}

impl Registry {
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn metadata(&self) -> &RegistryMetadata {
        &self.metadata
    }

    /// Every event emitted since construction, in order.
    pub fn events(&self) -> &EventLog {
        &self.events
    }
}
