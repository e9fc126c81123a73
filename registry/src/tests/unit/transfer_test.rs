use crate::tests::test_utils::*;
use crate::*;

// --- transfer_from authorization ---

#[test]
fn owner_transfers_own_token() {
    let mut registry = new_registry();
    let token = mint_to(&mut registry, &alice(), 1);
    registry.transfer_from(&alice(), &alice(), &bob(), token).unwrap();
    assert_eq!(registry.owner_of(token).unwrap(), bob());
}

#[test]
fn delegate_transfers_token() {
    let mut registry = new_registry();
    let token = mint_to(&mut registry, &alice(), 1);
    registry.approve(&alice(), &bob(), token).unwrap();
    registry.transfer_from(&bob(), &alice(), &carol(), token).unwrap();
    assert_eq!(registry.owner_of(token).unwrap(), carol());
}

#[test]
fn operator_transfers_token() {
    let mut registry = new_registry();
    let token = mint_to(&mut registry, &alice(), 1);
    registry.set_approval_for_all(&alice(), &bob(), true).unwrap();
    registry.transfer_from(&bob(), &alice(), &carol(), token).unwrap();
    assert_eq!(registry.owner_of(token).unwrap(), carol());
}

#[test]
fn stranger_cannot_transfer() {
    let mut registry = new_registry();
    let token = mint_to(&mut registry, &alice(), 1);
    let err = registry
        .transfer_from(&carol(), &alice(), &bob(), token)
        .unwrap_err();
    assert!(matches!(err, RegistryError::Unauthorized(_)));
    assert_eq!(registry.owner_of(token).unwrap(), alice());
}

#[test]
fn transfer_unknown_token_fails() {
    let mut registry = new_registry();
    let err = registry
        .transfer_from(&alice(), &alice(), &bob(), TokenId(9))
        .unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(_)));
}

#[test]
fn transfer_with_wrong_from_fails() {
    let mut registry = new_registry();
    let token = mint_to(&mut registry, &alice(), 1);
    let err = registry
        .transfer_from(&alice(), &bob(), &carol(), token)
        .unwrap_err();
    assert!(matches!(err, RegistryError::InvariantViolation(_)));
    assert_eq!(registry.owner_of(token).unwrap(), alice());
}

#[test]
fn transfer_to_null_account_fails() {
    let mut registry = new_registry();
    let token = mint_to(&mut registry, &alice(), 1);
    let err = registry
        .transfer_from(&alice(), &alice(), &AccountId::null(), token)
        .unwrap_err();
    assert!(matches!(err, RegistryError::InvalidArgument(_)));
    assert_eq!(registry.owner_of(token).unwrap(), alice());
}

// --- transfer side effects ---

#[test]
fn transfer_clears_delegate_approval() {
    let mut registry = new_registry();
    let token = mint_to(&mut registry, &alice(), 1);
    registry.approve(&alice(), &carol(), token).unwrap();
    registry.transfer_from(&alice(), &alice(), &bob(), token).unwrap();
    assert_eq!(registry.get_approved(token).unwrap(), None);
}

#[test]
fn spent_delegate_cannot_transfer_again() {
    let mut registry = new_registry();
    let token = mint_to(&mut registry, &alice(), 1);
    registry.approve(&alice(), &bob(), token).unwrap();
    registry.transfer_from(&bob(), &alice(), &carol(), token).unwrap();

    let err = registry
        .transfer_from(&bob(), &carol(), &alice(), token)
        .unwrap_err();
    assert!(matches!(err, RegistryError::Unauthorized(_)));
}

#[test]
fn self_transfer_is_allowed() {
    let mut registry = new_registry();
    let token = mint_to(&mut registry, &alice(), 1);
    registry.approve(&alice(), &bob(), token).unwrap();
    registry.transfer_from(&alice(), &alice(), &alice(), token).unwrap();

    assert_eq!(registry.owner_of(token).unwrap(), alice());
    assert_eq!(registry.balance_of(&alice()), 1);
    // Even a self-transfer clears the delegate.
    assert_eq!(registry.get_approved(token).unwrap(), None);
}

// --- transfer events ---

#[test]
fn owner_transfer_event_has_no_authorized_id() {
    let mut registry = new_registry();
    let token = mint_to(&mut registry, &alice(), 1);
    registry.transfer_from(&alice(), &alice(), &bob(), token).unwrap();

    let event = registry.events().last().unwrap();
    assert_eq!(event.event, "transfer");
    assert_eq!(event.data_str("old_owner_id"), Some("alice"));
    assert_eq!(event.data_str("new_owner_id"), Some("bob"));
    assert_eq!(event.data_str("authorized_id"), None);
}

#[test]
fn delegate_transfer_event_names_the_delegate() {
    let mut registry = new_registry();
    let token = mint_to(&mut registry, &alice(), 1);
    registry.approve(&alice(), &bob(), token).unwrap();
    registry.transfer_from(&bob(), &alice(), &carol(), token).unwrap();

    let event = registry.events().last().unwrap();
    assert_eq!(event.data_str("authorized_id"), Some("bob"));
}

#[test]
fn failed_transfer_emits_nothing() {
    let mut registry = new_registry();
    let token = mint_to(&mut registry, &alice(), 1);
    let before = registry.events().len();
    let _ = registry.transfer_from(&carol(), &alice(), &bob(), token);
    assert_eq!(registry.events().len(), before);
}
