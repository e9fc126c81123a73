use crate::*;

impl Registry {
    /// Records who referred `user`. First write wins; self-referral is
    /// rejected.
    pub fn set_referrer(
        &mut self,
        user: &AccountId,
        referrer: &AccountId,
    ) -> Result<(), RegistryError> {
        self.guarded(|reg| {
            guards::check_not_null(user, "attribute a referral")?;
            guards::check_not_null(referrer, "attribute a referral")?;
            if user == referrer {
                return Err(RegistryError::InvalidArgument(
                    "Cannot refer yourself".into(),
                ));
            }
            reg.referrals.set_referrer(user, referrer)?;
            events::emit_referrer_set(&mut reg.events, user, referrer);
            Ok(())
        })
    }

    /// Post-purchase hook. The reward tracks the raw deposit the payer
    /// attached, not the tier price table, and replaces any previously
    /// recorded commission for the referrer.
    pub(crate) fn record_referral_purchase(
        &mut self,
        payer: &AccountId,
        quantity: u32,
        paid: u128,
    ) {
        let Some(referrer) = self.referrals.referrer_of(payer).cloned() else {
            return;
        };
        let commission =
            paid.saturating_mul(self.referrals.commission_bps as u128) / BASIS_POINTS as u128;
        self.referrals.record_commission(&referrer, commission);
        events::emit_commission_recorded(&mut self.events, &referrer, payer, quantity, commission);
    }
}
