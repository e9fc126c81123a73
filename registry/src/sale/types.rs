use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleTier {
    pub price: u128,
    pub supply_cap: u32,
    pub minted: u32,
    pub active: bool,
}

impl SaleTier {
    pub fn remaining(&self) -> u32 {
        self.supply_cap.saturating_sub(self.minted)
    }
}

/// Patch applied to an existing tier; absent fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaleTierUpdate {
    #[serde(default)]
    pub price: Option<u128>,
    #[serde(default)]
    pub supply_cap: Option<u32>,
    #[serde(default)]
    pub active: Option<bool>,
}

/// Sale policy state: a global active flag plus numbered tiers. Owned
/// fields, never ambient.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct SaleState {
    pub active: bool,
    pub tiers: Vec<SaleTier>,
}

impl SaleState {
    pub(crate) fn tier(&self, tier_id: usize) -> Result<&SaleTier, RegistryError> {
        self.tiers
            .get(tier_id)
            .ok_or_else(|| RegistryError::tier_not_found(tier_id))
    }

    pub(crate) fn tier_mut(&mut self, tier_id: usize) -> Result<&mut SaleTier, RegistryError> {
        self.tiers
            .get_mut(tier_id)
            .ok_or_else(|| RegistryError::tier_not_found(tier_id))
    }
}
