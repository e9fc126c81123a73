use crate::*;

/// Reentrancy lock held for the duration of every state-mutating entry
/// point. The only suspension point inside the registry is the receiver
/// callback of a safe transfer; while it is outstanding, nested mutating
/// calls must observe the lock and fail.
#[derive(Debug, Default)]
pub(crate) struct ReentrancyGuard {
    entered: bool,
}

impl ReentrancyGuard {
    pub(crate) fn enter(&mut self) -> Result<(), RegistryError> {
        if self.entered {
            return Err(RegistryError::ReentrantCall(
                "Mutating entry point called while another operation is in flight".into(),
            ));
        }
        self.entered = true;
        Ok(())
    }

    pub(crate) fn exit(&mut self) {
        self.entered = false;
    }
}

pub(crate) fn check_not_null(account: &AccountId, context: &str) -> Result<(), RegistryError> {
    if account.is_null() {
        return Err(RegistryError::null_destination(context));
    }
    Ok(())
}

impl Registry {
    pub(crate) fn check_registry_owner(&self, actor_id: &AccountId) -> Result<(), RegistryError> {
        if actor_id != &self.owner_id {
            return Err(RegistryError::only_owner("the registry owner"));
        }
        Ok(())
    }

    /// Runs `f` under the reentrancy lock, releasing it on every exit path.
    pub(crate) fn guarded<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, RegistryError>,
    ) -> Result<T, RegistryError> {
        self.guard.enter()?;
        let result = f(self);
        self.guard.exit();
        result
    }
}
