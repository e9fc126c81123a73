use crate::*;

impl Registry {
    /// True iff `caller` is the token's owner, its approved delegate, or an
    /// approved operator of the owner.
    pub fn is_authorized(
        &self,
        caller: &AccountId,
        token_id: TokenId,
    ) -> Result<bool, RegistryError> {
        let owner = self.index.owner_of(token_id)?;
        if caller == owner {
            return Ok(true);
        }
        if self.approvals.approved_for(token_id) == Some(caller) {
            return Ok(true);
        }
        Ok(self.approvals.is_operator_approved(owner, caller))
    }

    pub fn transfer_from(
        &mut self,
        caller: &AccountId,
        from: &AccountId,
        to: &AccountId,
        token_id: TokenId,
    ) -> Result<(), RegistryError> {
        self.guarded(|reg| {
            reg.check_authorized(caller, token_id)?;
            reg.transfer_internal(from, to, token_id)?;
            let authorized_id = (caller != from).then_some(caller);
            events::emit_transfer(&mut reg.events, from, to, token_id, authorized_id, None);
            Ok(())
        })
    }

    /// Transfer plus receiver acceptance as one atomic unit: when the
    /// destination declines or cannot acknowledge, the ownership change and
    /// the pre-call delegate approval are restored exactly and no
    /// notification is emitted.
    pub fn safe_transfer_from(
        &mut self,
        caller: &AccountId,
        from: &AccountId,
        to: &AccountId,
        token_id: TokenId,
        payload: Option<&[u8]>,
    ) -> Result<(), RegistryError> {
        self.guarded(|reg| {
            reg.check_authorized(caller, token_id)?;
            let prior_delegate = reg.approvals.approved_for(token_id).cloned();
            reg.transfer_internal(from, to, token_id)?;

            if let Err(rejection) =
                reg.check_acceptance(caller, from, to, token_id, payload.unwrap_or(&[]))
            {
                reg.index.reassign(token_id, from.clone())?;
                if let Some(delegate) = prior_delegate {
                    reg.approvals.approve(token_id, delegate);
                }
                return Err(rejection);
            }

            let authorized_id = (caller != from).then_some(caller);
            events::emit_transfer(&mut reg.events, from, to, token_id, authorized_id, payload);
            Ok(())
        })
    }

    pub(crate) fn check_authorized(
        &self,
        caller: &AccountId,
        token_id: TokenId,
    ) -> Result<(), RegistryError> {
        if !self.is_authorized(caller, token_id)? {
            return Err(RegistryError::Unauthorized(format!(
                "{} may not act on token {}",
                caller, token_id
            )));
        }
        Ok(())
    }

    /// Unchecked internal transfer: callers authorize first. Verifies the
    /// stated `from` against the record, clears the delegate approval, and
    /// reassigns ownership.
    pub(crate) fn transfer_internal(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        token_id: TokenId,
    ) -> Result<(), RegistryError> {
        guards::check_not_null(to, "transfer")?;
        let owner = self.index.owner_of(token_id)?;
        if owner != from {
            return Err(RegistryError::wrong_owner(token_id, from, owner));
        }
        self.approvals.clear(token_id);
        self.index.reassign(token_id, to.clone())?;
        Ok(())
    }
}
