use crate::*;

impl Registry {
    pub fn new(owner_id: AccountId, metadata: Option<RegistryMetadata>) -> Self {
        assert!(
            !owner_id.is_null(),
            "Registry owner cannot be the null account"
        );
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            metadata: metadata.unwrap_or_default(),
            index: token::index::OwnershipIndex::default(),
            approvals: token::approval::ApprovalStore::default(),
            token_uris: std::collections::HashMap::new(),
            retired_ids: std::collections::HashSet::new(),
            next_token_id: TokenId::default(),
            sale: sale::SaleState::default(),
            referrals: fees::ReferralLedger::default(),
            interfaces: interfaces::DECLARED_INTERFACES,
            receivers: receiver::ReceiverTable::default(),
            guard: guards::ReentrancyGuard::default(),
            events: events::EventLog::default(),
        }
    }

    pub fn registry_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn transfer_ownership(
        &mut self,
        caller: &AccountId,
        new_owner: AccountId,
    ) -> Result<(), RegistryError> {
        self.guarded(|reg| {
            reg.check_registry_owner(caller)?;
            guards::check_not_null(&new_owner, "transfer ownership")?;
            if new_owner == reg.owner_id {
                return Err(RegistryError::InvalidArgument(
                    "New owner must differ from current owner".into(),
                ));
            }
            let old_owner = std::mem::replace(&mut reg.owner_id, new_owner);
            events::emit_owner_transferred(&mut reg.events, &old_owner, &reg.owner_id);
            Ok(())
        })
    }

    pub fn set_base_uri(
        &mut self,
        caller: &AccountId,
        base_uri: Option<String>,
    ) -> Result<(), RegistryError> {
        self.guarded(|reg| {
            reg.check_registry_owner(caller)?;
            if let Some(base_uri) = &base_uri {
                validation::validate_uri(base_uri)?;
            }
            reg.metadata.base_uri = base_uri;
            events::emit_base_uri_changed(
                &mut reg.events,
                &reg.owner_id,
                reg.metadata.base_uri.as_deref(),
            );
            Ok(())
        })
    }

    pub fn set_sale_active(
        &mut self,
        caller: &AccountId,
        active: bool,
    ) -> Result<(), RegistryError> {
        self.guarded(|reg| {
            reg.check_registry_owner(caller)?;
            reg.sale.active = active;
            events::emit_sale_state_changed(&mut reg.events, &reg.owner_id, active);
            Ok(())
        })
    }

    /// Appends a tier; returns its id.
    pub fn add_sale_tier(
        &mut self,
        caller: &AccountId,
        price: u128,
        supply_cap: u32,
        active: bool,
    ) -> Result<usize, RegistryError> {
        self.guarded(|reg| {
            reg.check_registry_owner(caller)?;
            if reg.sale.tiers.len() >= MAX_SALE_TIERS {
                return Err(RegistryError::InvalidArgument(format!(
                    "Too many sale tiers (max {})",
                    MAX_SALE_TIERS
                )));
            }
            let tier_id = reg.sale.tiers.len();
            reg.sale.tiers.push(SaleTier {
                price,
                supply_cap,
                minted: 0,
                active,
            });
            events::emit_tier_updated(
                &mut reg.events,
                &reg.owner_id,
                tier_id,
                price,
                supply_cap,
                active,
            );
            Ok(tier_id)
        })
    }

    pub fn update_sale_tier(
        &mut self,
        caller: &AccountId,
        tier_id: usize,
        patch: SaleTierUpdate,
    ) -> Result<(), RegistryError> {
        self.guarded(|reg| {
            reg.check_registry_owner(caller)?;
            let minted = reg.sale.tier(tier_id)?.minted;
            if let Some(supply_cap) = patch.supply_cap {
                if supply_cap < minted {
                    return Err(RegistryError::InvalidArgument(format!(
                        "Supply cap {} below already-minted count {}",
                        supply_cap, minted
                    )));
                }
            }
            let tier = reg.sale.tier_mut(tier_id)?;
            if let Some(price) = patch.price {
                tier.price = price;
            }
            if let Some(supply_cap) = patch.supply_cap {
                tier.supply_cap = supply_cap;
            }
            if let Some(active) = patch.active {
                tier.active = active;
            }
            let (price, supply_cap, active) = (tier.price, tier.supply_cap, tier.active);
            events::emit_tier_updated(
                &mut reg.events,
                &reg.owner_id,
                tier_id,
                price,
                supply_cap,
                active,
            );
            Ok(())
        })
    }

    pub fn set_commission_rate(
        &mut self,
        caller: &AccountId,
        bps: u16,
    ) -> Result<(), RegistryError> {
        self.guarded(|reg| {
            reg.check_registry_owner(caller)?;
            validation::validate_commission_bps(bps)?;
            let old_bps = reg.referrals.commission_bps;
            reg.referrals.commission_bps = bps;
            events::emit_commission_rate_changed(&mut reg.events, &reg.owner_id, old_bps, bps);
            Ok(())
        })
    }
}
