use crate::*;

impl Registry {
    /// Buys `quantity` tokens from a tier: validates the sale flag, tier
    /// state, remaining supply, and payment, then mints sequence-assigned
    /// ids to the buyer and hands the purchase to the referral ledger.
    pub fn purchase(
        &mut self,
        buyer: &AccountId,
        tier_id: usize,
        quantity: u32,
        deposit: u128,
    ) -> Result<Vec<TokenId>, RegistryError> {
        self.guarded(|reg| {
            guards::check_not_null(buyer, "sell")?;
            if quantity == 0 || quantity > MAX_BATCH_MINT {
                return Err(RegistryError::InvalidArgument(format!(
                    "Quantity must be 1-{}",
                    MAX_BATCH_MINT
                )));
            }
            if !reg.sale.active {
                return Err(RegistryError::InvalidArgument(
                    "Sale is not active".into(),
                ));
            }

            let tier = reg.sale.tier(tier_id)?;
            if !tier.active {
                return Err(RegistryError::InvalidArgument(format!(
                    "Sale tier {} is not active",
                    tier_id
                )));
            }
            let remaining = tier.remaining();
            if remaining < quantity {
                return Err(RegistryError::InvalidArgument(format!(
                    "Sale tier {} has only {} of {} tokens remaining",
                    tier_id, remaining, tier.supply_cap
                )));
            }
            let total_price = tier.price.checked_mul(quantity as u128).ok_or_else(|| {
                RegistryError::InvalidArgument("Total price overflows".into())
            })?;
            if deposit < total_price {
                return Err(RegistryError::InsufficientDeposit(format!(
                    "Deposit {} is below total price {}",
                    deposit, total_price
                )));
            }
            // The whole batch must fit in the id sequence before any token
            // is minted; a mid-batch failure would leave a partial mint.
            if reg.next_token_id.0.checked_add(quantity as u64).is_none() {
                return Err(RegistryError::InvariantViolation(
                    "Token id counter overflow".into(),
                ));
            }

            let mut token_ids = Vec::with_capacity(quantity as usize);
            for _ in 0..quantity {
                let token_id = reg.next_token_id;
                reg.mint_internal(buyer, token_id, None)?;
                token_ids.push(token_id);
            }
            reg.sale.tier_mut(tier_id)?.minted += quantity;

            events::emit_purchase(&mut reg.events, buyer, tier_id, quantity, deposit, &token_ids);
            reg.record_referral_purchase(buyer, quantity, deposit);

            Ok(token_ids)
        })
    }
}
