use std::collections::HashMap;

use indexmap::IndexSet;

use crate::*;

/// Acceptance entry point a contract destination implements to acknowledge
/// an incoming safe transfer. Returning [`TRANSFER_ACCEPTED`] commits the
/// transfer; any other value or an error rejects it.
///
/// The callback runs while the registry's reentrancy lock is held: calls
/// back into a mutating entry point fail with `ReentrantCall`. Reads are
/// allowed and observe the in-flight ownership change.
///
/// `Send` so a registry holding bound receivers can live behind a
/// [`SharedRegistry`](crate::SharedRegistry).
pub trait TokenReceiver: Send {
    fn on_token_received(
        &mut self,
        registry: &mut Registry,
        operator: &AccountId,
        from: &AccountId,
        token_id: TokenId,
        payload: &[u8],
    ) -> Result<[u8; 4], RegistryError>;
}

/// Which destinations are "capable of executing code", and the acceptance
/// entry points bound for them. A contract account without a bound receiver
/// exists: it models a destination whose code lacks the entry point.
#[derive(Default)]
pub(crate) struct ReceiverTable {
    contract_accounts: IndexSet<AccountId>,
    bound: HashMap<AccountId, Box<dyn TokenReceiver>>,
}

impl ReceiverTable {
    pub(crate) fn is_contract(&self, account: &AccountId) -> bool {
        self.contract_accounts.contains(account)
    }

    pub(crate) fn take(&mut self, account: &AccountId) -> Option<Box<dyn TokenReceiver>> {
        self.bound.remove(account)
    }

    pub(crate) fn put_back(&mut self, account: AccountId, receiver: Box<dyn TokenReceiver>) {
        self.bound.insert(account, receiver);
    }
}

impl Registry {
    /// Marks `account` as a contract destination without binding an
    /// acceptance entry point; safe transfers to it will be rejected.
    pub fn register_contract(&mut self, account: AccountId) {
        self.receivers.contract_accounts.insert(account);
    }

    pub fn bind_receiver(&mut self, account: AccountId, receiver: Box<dyn TokenReceiver>) {
        self.receivers.contract_accounts.insert(account.clone());
        self.receivers.bound.insert(account, receiver);
    }

    pub fn unbind_receiver(&mut self, account: &AccountId) -> Option<Box<dyn TokenReceiver>> {
        self.receivers.bound.remove(account)
    }

    pub fn has_code(&self, account: &AccountId) -> bool {
        self.receivers.is_contract(account)
    }

    /// Plain accounts accept automatically; contract accounts must return
    /// the acceptance magic from their bound entry point.
    pub(crate) fn check_acceptance(
        &mut self,
        operator: &AccountId,
        from: &AccountId,
        to: &AccountId,
        token_id: TokenId,
        payload: &[u8],
    ) -> Result<(), RegistryError> {
        if !self.receivers.is_contract(to) {
            return Ok(());
        }
        let Some(mut receiver) = self.receivers.take(to) else {
            return Err(RegistryError::RejectedByReceiver(format!(
                "{} has no acceptance entry point",
                to
            )));
        };
        let verdict = receiver.on_token_received(self, operator, from, token_id, payload);
        self.receivers.put_back(to.clone(), receiver);

        match verdict {
            Ok(code) if code == TRANSFER_ACCEPTED => Ok(()),
            Ok(code) => Err(RegistryError::RejectedByReceiver(format!(
                "{} returned {:02x?} instead of the acceptance magic",
                to, code
            ))),
            Err(err) => Err(RegistryError::RejectedByReceiver(format!(
                "{} failed during acceptance: {}",
                to, err
            ))),
        }
    }
}
