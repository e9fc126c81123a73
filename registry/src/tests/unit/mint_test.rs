use crate::tests::test_utils::*;
use crate::*;

// --- mint ---

#[test]
fn mint_assigns_owner_and_supply() {
    let mut registry = new_registry();
    let token = mint_to(&mut registry, &alice(), 1);

    assert!(registry.exists(token));
    assert_eq!(registry.owner_of(token).unwrap(), alice());
    assert_eq!(registry.balance_of(&alice()), 1);
    assert_eq!(registry.total_supply(), 1);
}

#[test]
fn mint_with_uri_stores_it() {
    let mut registry = new_registry();
    registry
        .mint(&alice(), TokenId(7), Some("ipfs://abc".to_string()))
        .unwrap();
    assert_eq!(registry.token_uri(TokenId(7)).unwrap(), "ipfs://abc");
}

#[test]
fn mint_duplicate_id_fails() {
    let mut registry = new_registry();
    mint_to(&mut registry, &alice(), 1);
    let err = registry.mint(&bob(), TokenId(1), None).unwrap_err();
    assert!(matches!(err, RegistryError::AlreadyExists(_)));
    // The loser left no trace.
    assert_eq!(registry.owner_of(TokenId(1)).unwrap(), alice());
    assert_eq!(registry.balance_of(&bob()), 0);
}

#[test]
fn mint_to_null_account_fails() {
    let mut registry = new_registry();
    let err = registry.mint(&AccountId::null(), TokenId(1), None).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidArgument(_)));
    assert_eq!(registry.total_supply(), 0);
}

#[test]
fn mint_rejects_oversized_uri() {
    let mut registry = new_registry();
    let uri = "x".repeat(MAX_URI_LEN + 1);
    let err = registry.mint(&alice(), TokenId(1), Some(uri)).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidArgument(_)));
    assert!(!registry.exists(TokenId(1)));
}

#[test]
fn mint_emits_event_with_null_old_owner() {
    let mut registry = new_registry();
    mint_to(&mut registry, &alice(), 3);

    let event = registry.events().last().unwrap();
    assert_eq!(event.event, "mint");
    assert_eq!(event.data_str("old_owner_id"), Some(""));
    assert_eq!(event.data_str("new_owner_id"), Some("alice"));
    assert_eq!(event.data_u64("token_id"), Some(3));
}

// --- mint_next ---

#[test]
fn mint_next_starts_at_zero_and_increments() {
    let mut registry = new_registry();
    assert_eq!(registry.mint_next(&alice(), None).unwrap(), TokenId(0));
    assert_eq!(registry.mint_next(&alice(), None).unwrap(), TokenId(1));
}

#[test]
fn mint_next_skips_caller_assigned_ids() {
    let mut registry = new_registry();
    mint_to(&mut registry, &alice(), 10);
    assert_eq!(registry.mint_next(&bob(), None).unwrap(), TokenId(11));
}

#[test]
fn mint_at_max_id_overflows_counter() {
    let mut registry = new_registry();
    let err = registry.mint(&alice(), TokenId(u64::MAX), None).unwrap_err();
    assert!(matches!(err, RegistryError::InvariantViolation(_)));
    // All-or-nothing: the failed mint changed nothing.
    assert!(!registry.exists(TokenId(u64::MAX)));
    assert_eq!(registry.total_supply(), 0);
    assert_eq!(registry.mint_next(&alice(), None).unwrap(), TokenId(0));
}
