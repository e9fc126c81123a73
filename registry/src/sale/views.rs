use crate::*;

impl Registry {
    pub fn sale_active(&self) -> bool {
        self.sale.active
    }

    pub fn sale_tiers(&self) -> &[SaleTier] {
        &self.sale.tiers
    }

    pub fn sale_tier(&self, tier_id: usize) -> Result<SaleTier, RegistryError> {
        self.sale.tier(tier_id).cloned()
    }
}
