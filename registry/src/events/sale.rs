use registry_types::{AccountId, TokenId};

use super::EventLog;
use super::builder::EventBuilder;

pub(crate) fn emit_purchase(
    log: &mut EventLog,
    buyer_id: &AccountId,
    tier_id: usize,
    quantity: u32,
    deposit: u128,
    token_ids: &[TokenId],
) {
    EventBuilder::new("purchase")
        .field("buyer_id", buyer_id)
        .field("tier_id", tier_id)
        .field("quantity", quantity)
        .field("deposit", deposit.to_string())
        .field("token_ids", token_ids)
        .emit(log);
}

pub(crate) fn emit_commission_recorded(
    log: &mut EventLog,
    referrer_id: &AccountId,
    payer_id: &AccountId,
    quantity: u32,
    amount: u128,
) {
    EventBuilder::new("commission_recorded")
        .field("referrer_id", referrer_id)
        .field("payer_id", payer_id)
        .field("quantity", quantity)
        .field("amount", amount.to_string())
        .emit(log);
}
