use indexmap::IndexSet;
use std::collections::HashMap;

use crate::*;

/// Per-token single-delegate approvals plus per-owner operator grants.
/// Existence of the token is the caller's concern; this store only records
/// grants.
#[derive(Debug, Default)]
pub(crate) struct ApprovalStore {
    delegates: HashMap<TokenId, AccountId>,
    operators: HashMap<AccountId, IndexSet<AccountId>>,
}

impl ApprovalStore {
    /// Unconditional overwrite of the token's delegate.
    pub(crate) fn approve(&mut self, token_id: TokenId, delegate: AccountId) {
        self.delegates.insert(token_id, delegate);
    }

    pub(crate) fn clear(&mut self, token_id: TokenId) -> Option<AccountId> {
        self.delegates.remove(&token_id)
    }

    pub(crate) fn approved_for(&self, token_id: TokenId) -> Option<&AccountId> {
        self.delegates.get(&token_id)
    }

    pub(crate) fn set_operator_approval(
        &mut self,
        owner: &AccountId,
        operator: &AccountId,
        enabled: bool,
    ) -> Result<(), RegistryError> {
        if operator == owner {
            return Err(RegistryError::InvalidArgument(
                "Cannot set operator approval for yourself".into(),
            ));
        }
        if enabled {
            self.operators
                .entry(owner.clone())
                .or_default()
                .insert(operator.clone());
        } else if let Some(operators) = self.operators.get_mut(owner) {
            operators.swap_remove(operator);
            if operators.is_empty() {
                self.operators.remove(owner);
            }
        }
        Ok(())
    }

    pub(crate) fn is_operator_approved(&self, owner: &AccountId, operator: &AccountId) -> bool {
        self.operators
            .get(owner)
            .is_some_and(|operators| operators.contains(operator))
    }
}

impl Registry {
    /// Sets (or, for the null delegate, clears) the token's single approved
    /// delegate. Caller must be the current owner or one of their operators.
    pub fn approve(
        &mut self,
        caller: &AccountId,
        delegate: &AccountId,
        token_id: TokenId,
    ) -> Result<(), RegistryError> {
        self.guarded(|reg| {
            let owner = reg.index.owner_of(token_id)?.clone();
            if caller != &owner && !reg.approvals.is_operator_approved(&owner, caller) {
                return Err(RegistryError::Unauthorized(format!(
                    "{} may not manage approvals for token {}",
                    caller, token_id
                )));
            }
            if delegate == &owner {
                return Err(RegistryError::InvalidArgument(
                    "Cannot approve the current owner as delegate".into(),
                ));
            }
            if delegate.is_null() {
                reg.approvals.clear(token_id);
            } else {
                reg.approvals.approve(token_id, delegate.clone());
            }
            let delegate = (!delegate.is_null()).then_some(delegate);
            events::emit_approval(&mut reg.events, &owner, delegate, token_id);
            Ok(())
        })
    }

    pub fn set_approval_for_all(
        &mut self,
        caller: &AccountId,
        operator: &AccountId,
        enabled: bool,
    ) -> Result<(), RegistryError> {
        self.guarded(|reg| {
            guards::check_not_null(operator, "grant operator approval")?;
            reg.approvals.set_operator_approval(caller, operator, enabled)?;
            events::emit_operator_approval(&mut reg.events, caller, operator, enabled);
            Ok(())
        })
    }
}
