use serde::Serialize;

use crate::*;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenView {
    pub token_id: TokenId,
    pub owner_id: AccountId,
    pub uri: Option<String>,
    pub approved_delegate: Option<AccountId>,
}

impl Registry {
    pub fn exists(&self, token_id: TokenId) -> bool {
        self.index.exists(token_id)
    }

    pub fn owner_of(&self, token_id: TokenId) -> Result<AccountId, RegistryError> {
        self.index.owner_of(token_id).cloned()
    }

    pub fn balance_of(&self, owner: &AccountId) -> u64 {
        self.index.balance_of(owner)
    }

    pub fn get_approved(&self, token_id: TokenId) -> Result<Option<AccountId>, RegistryError> {
        self.index.owner_of(token_id)?;
        Ok(self.approvals.approved_for(token_id).cloned())
    }

    pub fn is_approved_for_all(&self, owner: &AccountId, operator: &AccountId) -> bool {
        self.approvals.is_operator_approved(owner, operator)
    }

    /// Resolves the token's metadata locator against the shared prefix:
    /// without a prefix the per-token value is returned verbatim; with one,
    /// the prefix is joined to the per-token value, falling back to the
    /// decimal token id.
    pub fn token_uri(&self, token_id: TokenId) -> Result<String, RegistryError> {
        self.index.owner_of(token_id)?;
        let per_token = self.token_uris.get(&token_id);
        Ok(match (&self.metadata.base_uri, per_token) {
            (None, Some(uri)) => uri.clone(),
            (None, None) => String::new(),
            (Some(base), Some(uri)) => format!("{}{}", base, uri),
            (Some(base), None) => format!("{}{}", base, token_id),
        })
    }

    pub fn token(&self, token_id: TokenId) -> Option<TokenView> {
        let owner = self.index.owner_of(token_id).ok()?;
        Some(self.token_view(token_id, owner))
    }

    pub(crate) fn token_view(&self, token_id: TokenId, owner: &AccountId) -> TokenView {
        TokenView {
            token_id,
            owner_id: owner.clone(),
            uri: self.token_uris.get(&token_id).cloned(),
            approved_delegate: self.approvals.approved_for(token_id).cloned(),
        }
    }
}
