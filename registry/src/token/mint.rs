use crate::*;

impl Registry {
    /// Mints `token_id` to `to` with an optional metadata locator.
    pub fn mint(
        &mut self,
        to: &AccountId,
        token_id: TokenId,
        uri: Option<String>,
    ) -> Result<(), RegistryError> {
        self.guarded(|reg| reg.mint_internal(to, token_id, uri))
    }

    /// Sequence-assigned variant; returns the id it minted.
    pub fn mint_next(
        &mut self,
        to: &AccountId,
        uri: Option<String>,
    ) -> Result<TokenId, RegistryError> {
        self.guarded(|reg| {
            let token_id = reg.next_token_id;
            reg.mint_internal(to, token_id, uri)?;
            Ok(token_id)
        })
    }

    pub(crate) fn mint_internal(
        &mut self,
        to: &AccountId,
        token_id: TokenId,
        uri: Option<String>,
    ) -> Result<(), RegistryError> {
        guards::check_not_null(to, "mint")?;
        if self.retired_ids.contains(&token_id) {
            return Err(RegistryError::AlreadyExists(format!(
                "Token {} was burned and its id cannot be reissued",
                token_id
            )));
        }
        if let Some(uri) = &uri {
            validation::validate_uri(uri)?;
        }

        // Keep the shared sequence ahead of caller-assigned ids so
        // `mint_next` can never collide. Computed before any mutation so a
        // counter overflow leaves the registry untouched.
        let next_token_id = if token_id >= self.next_token_id {
            token_id.checked_next().ok_or_else(|| {
                RegistryError::InvariantViolation("Token id counter overflow".into())
            })?
        } else {
            self.next_token_id
        };

        self.index.insert(token_id, to.clone())?;
        if let Some(uri) = uri {
            self.token_uris.insert(token_id, uri);
        }
        self.next_token_id = next_token_id;

        events::emit_mint(&mut self.events, to, token_id);
        Ok(())
    }
}
