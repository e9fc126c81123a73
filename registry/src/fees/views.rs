use crate::*;

impl Registry {
    pub fn referrer_of(&self, user: &AccountId) -> Option<AccountId> {
        self.referrals.referrer_of(user).cloned()
    }

    /// Latest recorded commission for `referrer`; zero when none recorded.
    pub fn commission_of(&self, referrer: &AccountId) -> u128 {
        self.referrals.commission_of(referrer)
    }

    pub fn commission_rate_bps(&self) -> u16 {
        self.referrals.commission_bps
    }
}
