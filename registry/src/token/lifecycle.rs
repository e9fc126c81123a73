use crate::*;

impl Registry {
    /// Burns the token: approval, metadata, and both index sides go in one
    /// atomic step, and the id is retired for good.
    pub fn burn(&mut self, caller: &AccountId, token_id: TokenId) -> Result<(), RegistryError> {
        self.guarded(|reg| {
            reg.check_authorized(caller, token_id)?;

            reg.approvals.clear(token_id);
            reg.token_uris.remove(&token_id);
            let owner = reg.index.remove(token_id)?;
            reg.retired_ids.insert(token_id);

            let authorized_id = (caller != &owner).then_some(caller);
            events::emit_burn(&mut reg.events, &owner, token_id, authorized_id);
            Ok(())
        })
    }
}
