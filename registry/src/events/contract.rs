use registry_types::AccountId;

use super::EventLog;
use super::builder::EventBuilder;

pub(crate) fn emit_owner_transferred(
    log: &mut EventLog,
    old_owner: &AccountId,
    new_owner: &AccountId,
) {
    EventBuilder::new("owner_transferred")
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit(log);
}

pub(crate) fn emit_base_uri_changed(
    log: &mut EventLog,
    owner_id: &AccountId,
    base_uri: Option<&str>,
) {
    EventBuilder::new("base_uri_changed")
        .field("owner_id", owner_id)
        .field_opt("base_uri", base_uri)
        .emit(log);
}

pub(crate) fn emit_sale_state_changed(log: &mut EventLog, owner_id: &AccountId, active: bool) {
    EventBuilder::new("sale_state_changed")
        .field("owner_id", owner_id)
        .field("active", active)
        .emit(log);
}

pub(crate) fn emit_tier_updated(
    log: &mut EventLog,
    owner_id: &AccountId,
    tier_id: usize,
    price: u128,
    supply_cap: u32,
    active: bool,
) {
    EventBuilder::new("tier_updated")
        .field("owner_id", owner_id)
        .field("tier_id", tier_id)
        .field("price", price.to_string())
        .field("supply_cap", supply_cap)
        .field("active", active)
        .emit(log);
}

pub(crate) fn emit_commission_rate_changed(
    log: &mut EventLog,
    owner_id: &AccountId,
    old_bps: u16,
    new_bps: u16,
) {
    EventBuilder::new("commission_rate_changed")
        .field("owner_id", owner_id)
        .field("old_bps", old_bps)
        .field("new_bps", new_bps)
        .emit(log);
}

pub(crate) fn emit_referrer_set(log: &mut EventLog, user: &AccountId, referrer: &AccountId) {
    EventBuilder::new("referrer_set")
        .field("user", user)
        .field("referrer", referrer)
        .emit(log);
}
