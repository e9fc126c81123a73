use crate::*;
use crate::token::views::TokenView;

impl Registry {
    pub fn total_supply(&self) -> u64 {
        self.index.total_supply()
    }

    pub fn token_by_index(&self, index: u64) -> Result<TokenId, RegistryError> {
        self.index.token_at(index)
    }

    pub fn token_of_owner_by_index(
        &self,
        owner: &AccountId,
        index: u64,
    ) -> Result<TokenId, RegistryError> {
        self.index.token_of_owner_at(owner, index)
    }

    pub fn tokens(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<TokenView> {
        let start = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT) as usize;

        self.index
            .iter()
            .skip(start)
            .take(limit)
            .map(|(token_id, owner)| self.token_view(token_id, owner))
            .collect()
    }

    pub fn tokens_for_owner(
        &self,
        owner: &AccountId,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<TokenView> {
        let start = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT) as usize;

        self.index
            .tokens_of_owner(owner)
            .skip(start)
            .take(limit)
            .map(|token_id| self.token_view(token_id, owner))
            .collect()
    }
}
