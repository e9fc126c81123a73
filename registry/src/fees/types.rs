use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::*;

/// Referral-commission bookkeeping: who referred whom, the commission rate,
/// and the reward recorded for each referrer.
///
/// The reward is computed from the raw amount the payer attached, and each
/// new purchase overwrites the referrer's entry; only the most recent
/// commission is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ReferralLedger {
    pub commission_bps: u16,
    referrer_of: HashMap<AccountId, AccountId>,
    last_commission: HashMap<AccountId, u128>,
}

impl Default for ReferralLedger {
    fn default() -> Self {
        Self {
            commission_bps: DEFAULT_COMMISSION_BPS,
            referrer_of: HashMap::new(),
            last_commission: HashMap::new(),
        }
    }
}

impl ReferralLedger {
    pub(crate) fn referrer_of(&self, user: &AccountId) -> Option<&AccountId> {
        self.referrer_of.get(user)
    }

    pub(crate) fn set_referrer(
        &mut self,
        user: &AccountId,
        referrer: &AccountId,
    ) -> Result<(), RegistryError> {
        if self.referrer_of.contains_key(user) {
            return Err(RegistryError::AlreadyExists(format!(
                "{} already has a referrer",
                user
            )));
        }
        self.referrer_of.insert(user.clone(), referrer.clone());
        Ok(())
    }

    pub(crate) fn record_commission(&mut self, referrer: &AccountId, amount: u128) {
        self.last_commission.insert(referrer.clone(), amount);
    }

    pub(crate) fn commission_of(&self, referrer: &AccountId) -> u128 {
        self.last_commission.get(referrer).copied().unwrap_or(0)
    }
}
