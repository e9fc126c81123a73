use crate::tests::test_utils::*;
use crate::*;

// --- balances and supply ---

#[test]
fn balances_track_both_sides() {
    let mut registry = new_registry();
    mint_to(&mut registry, &alice(), 1);
    mint_to(&mut registry, &alice(), 2);
    mint_to(&mut registry, &bob(), 3);

    assert_eq!(registry.balance_of(&alice()), 2);
    assert_eq!(registry.balance_of(&bob()), 1);
    assert_eq!(registry.balance_of(&carol()), 0);
    assert_eq!(registry.total_supply(), 3);
}

#[test]
fn transfer_moves_holdings_between_owners() {
    let mut registry = new_registry();
    let token = mint_to(&mut registry, &alice(), 1);
    registry
        .transfer_from(&alice(), &alice(), &bob(), token)
        .unwrap();

    assert_eq!(registry.balance_of(&alice()), 0);
    assert_eq!(registry.balance_of(&bob()), 1);
    assert_eq!(registry.total_supply(), 1);
    assert_eq!(
        registry.token_of_owner_by_index(&bob(), 0).unwrap(),
        token
    );
}

#[test]
fn owner_of_unknown_token_fails() {
    let registry = new_registry();
    let err = registry.owner_of(TokenId(99)).unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(_)));
}

// --- per-owner index ---

#[test]
fn emptied_owner_has_no_holdings_entry() {
    let mut registry = new_registry();
    let token = mint_to(&mut registry, &alice(), 1);
    registry
        .transfer_from(&alice(), &alice(), &bob(), token)
        .unwrap();

    assert_eq!(registry.balance_of(&alice()), 0);
    assert!(registry.tokens_for_owner(&alice(), None, None).is_empty());
    let err = registry.token_of_owner_by_index(&alice(), 0).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidArgument(_)));
}

#[test]
fn every_token_appears_in_exactly_one_holding_set() {
    let mut registry = new_registry();
    for id in 0..5 {
        mint_to(&mut registry, &alice(), id);
    }
    registry
        .transfer_from(&alice(), &alice(), &bob(), TokenId(2))
        .unwrap();

    let alice_tokens: Vec<TokenId> = registry
        .tokens_for_owner(&alice(), None, None)
        .into_iter()
        .map(|t| t.token_id)
        .collect();
    let bob_tokens: Vec<TokenId> = registry
        .tokens_for_owner(&bob(), None, None)
        .into_iter()
        .map(|t| t.token_id)
        .collect();

    assert_eq!(alice_tokens.len() + bob_tokens.len(), 5);
    assert!(!alice_tokens.contains(&TokenId(2)));
    assert_eq!(bob_tokens, vec![TokenId(2)]);
    for token in alice_tokens {
        assert_eq!(registry.owner_of(token).unwrap(), alice());
    }
}
