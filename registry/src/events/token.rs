use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use registry_types::{AccountId, TokenId};

use super::EventLog;
use super::builder::EventBuilder;

pub(crate) fn emit_mint(log: &mut EventLog, owner_id: &AccountId, token_id: TokenId) {
    EventBuilder::new("mint")
        .field("old_owner_id", AccountId::null())
        .field("new_owner_id", owner_id)
        .field("token_id", token_id)
        .emit(log);
}

pub(crate) fn emit_transfer(
    log: &mut EventLog,
    old_owner_id: &AccountId,
    new_owner_id: &AccountId,
    token_id: TokenId,
    authorized_id: Option<&AccountId>,
    payload: Option<&[u8]>,
) {
    EventBuilder::new("transfer")
        .field("old_owner_id", old_owner_id)
        .field("new_owner_id", new_owner_id)
        .field("token_id", token_id)
        .field_opt("authorized_id", authorized_id)
        .field_opt("payload", payload.map(|p| BASE64.encode(p)))
        .emit(log);
}

pub(crate) fn emit_burn(
    log: &mut EventLog,
    owner_id: &AccountId,
    token_id: TokenId,
    authorized_id: Option<&AccountId>,
) {
    EventBuilder::new("burn")
        .field("old_owner_id", owner_id)
        .field("new_owner_id", AccountId::null())
        .field("token_id", token_id)
        .field_opt("authorized_id", authorized_id)
        .emit(log);
}

/// Emitted on every approve call, clears included (`delegate_id` absent).
pub(crate) fn emit_approval(
    log: &mut EventLog,
    owner_id: &AccountId,
    delegate_id: Option<&AccountId>,
    token_id: TokenId,
) {
    EventBuilder::new("approval")
        .field("owner_id", owner_id)
        .field_opt("delegate_id", delegate_id)
        .field("token_id", token_id)
        .emit(log);
}

pub(crate) fn emit_operator_approval(
    log: &mut EventLog,
    owner_id: &AccountId,
    operator_id: &AccountId,
    enabled: bool,
) {
    EventBuilder::new("operator_approval")
        .field("owner_id", owner_id)
        .field("operator_id", operator_id)
        .field("enabled", enabled)
        .emit(log);
}
