use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;

use crate::*;

/// Bidirectional ownership index: insertion-ordered id→owner map plus a
/// holdings set per owner. Every mutation updates both sides within the same
/// call; no caller can observe a half-updated state.
///
/// Removals are swap-removes, so enumeration order is stable between
/// mutations but not across them. No ordering is promised to callers.
#[derive(Debug, Default)]
pub(crate) struct OwnershipIndex {
    by_id: IndexMap<TokenId, AccountId>,
    per_owner: HashMap<AccountId, IndexSet<TokenId>>,
}

impl OwnershipIndex {
    pub(crate) fn exists(&self, token_id: TokenId) -> bool {
        self.by_id.contains_key(&token_id)
    }

    pub(crate) fn owner_of(&self, token_id: TokenId) -> Result<&AccountId, RegistryError> {
        self.by_id
            .get(&token_id)
            .ok_or_else(|| RegistryError::token_not_found(token_id))
    }

    pub(crate) fn balance_of(&self, owner: &AccountId) -> u64 {
        self.per_owner
            .get(owner)
            .map(|tokens| tokens.len() as u64)
            .unwrap_or(0)
    }

    pub(crate) fn total_supply(&self) -> u64 {
        self.by_id.len() as u64
    }

    pub(crate) fn token_at(&self, index: u64) -> Result<TokenId, RegistryError> {
        self.by_id
            .get_index(index as usize)
            .map(|(token_id, _)| *token_id)
            .ok_or_else(|| RegistryError::index_out_of_range(index, self.total_supply()))
    }

    pub(crate) fn token_of_owner_at(
        &self,
        owner: &AccountId,
        index: u64,
    ) -> Result<TokenId, RegistryError> {
        self.per_owner
            .get(owner)
            .and_then(|tokens| tokens.get_index(index as usize))
            .copied()
            .ok_or_else(|| RegistryError::index_out_of_range(index, self.balance_of(owner)))
    }

    pub(crate) fn insert(&mut self, token_id: TokenId, owner: AccountId) -> Result<(), RegistryError> {
        if self.by_id.contains_key(&token_id) {
            return Err(RegistryError::AlreadyExists(format!(
                "Token {} already exists",
                token_id
            )));
        }
        self.per_owner
            .entry(owner.clone())
            .or_default()
            .insert(token_id);
        self.by_id.insert(token_id, owner);
        Ok(())
    }

    pub(crate) fn reassign(
        &mut self,
        token_id: TokenId,
        new_owner: AccountId,
    ) -> Result<(), RegistryError> {
        let old_owner = self.owner_of(token_id)?.clone();
        self.remove_from_owner(&old_owner, token_id);
        self.per_owner
            .entry(new_owner.clone())
            .or_default()
            .insert(token_id);
        self.by_id.insert(token_id, new_owner);
        Ok(())
    }

    /// Removes the token from both sides; returns the previous owner.
    pub(crate) fn remove(&mut self, token_id: TokenId) -> Result<AccountId, RegistryError> {
        let owner = self
            .by_id
            .swap_remove(&token_id)
            .ok_or_else(|| RegistryError::token_not_found(token_id))?;
        self.remove_from_owner(&owner, token_id);
        Ok(owner)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (TokenId, &AccountId)> {
        self.by_id.iter().map(|(token_id, owner)| (*token_id, owner))
    }

    pub(crate) fn tokens_of_owner(&self, owner: &AccountId) -> impl Iterator<Item = TokenId> + '_ {
        self.per_owner
            .get(owner)
            .into_iter()
            .flat_map(|tokens| tokens.iter().copied())
    }

    fn remove_from_owner(&mut self, owner: &AccountId, token_id: TokenId) {
        if let Some(tokens) = self.per_owner.get_mut(owner) {
            tokens.swap_remove(&token_id);
            if tokens.is_empty() {
                self.per_owner.remove(owner);
            }
        }
    }
}
