use pretty_assertions::assert_eq;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{token, vec, Address, Env};

use crate::tests::setup::{deploy_token_contract, deploy_vault_contract};

#[test]
fn test_initialize_sets_roles() {
    let env = Env::default();
    let owner = Address::generate(&env);
    let manager = Address::generate(&env);

    let vault = deploy_vault_contract(&env, &owner, &manager);

    assert_eq!(vault.query_owner(), owner);
    assert_eq!(vault.query_manager(), manager);
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn test_initialize_twice_fails() {
    let env = Env::default();
    let owner = Address::generate(&env);
    let manager = Address::generate(&env);

    let vault = deploy_vault_contract(&env, &owner, &manager);
    vault.initialize(&owner, &manager);
}

#[test]
fn test_withdraw_to() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let manager = Address::generate(&env);
    let recipient = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let asset = deploy_token_contract(&env, &token_admin);
    let token_client = token::TokenClient::new(&env, &asset.address);

    let vault = deploy_vault_contract(&env, &owner, &manager);
    asset.mint(&vault.address, &1_000);

    vault.withdraw_to(&asset.address, &400, &recipient);

    assert_eq!(token_client.balance(&vault.address), 600);
    assert_eq!(token_client.balance(&recipient), 400);
}

#[test]
fn test_withdraw_to_zero_amount_is_a_void_withdrawal() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let manager = Address::generate(&env);
    let recipient = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let asset = deploy_token_contract(&env, &token_admin);
    let token_client = token::TokenClient::new(&env, &asset.address);

    let vault = deploy_vault_contract(&env, &owner, &manager);
    asset.mint(&vault.address, &1_000);

    vault.withdraw_to(&asset.address, &0, &recipient);

    assert_eq!(token_client.balance(&vault.address), 1_000);
    assert_eq!(token_client.balance(&recipient), 0);
}

#[test]
#[should_panic]
fn test_withdraw_to_requires_manager_auth() {
    let env = Env::default();

    let owner = Address::generate(&env);
    let manager = Address::generate(&env);
    let recipient = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let asset = deploy_token_contract(&env, &token_admin);

    let vault = deploy_vault_contract(&env, &owner, &manager);

    // No auth mocked for the manager, so the withdrawal must fail.
    vault.withdraw_to(&asset.address, &1, &recipient);
}

#[test]
fn test_batch_withdraw_to() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let manager = Address::generate(&env);
    let recipient = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let asset_a = deploy_token_contract(&env, &token_admin);
    let asset_b = deploy_token_contract(&env, &token_admin);

    let vault = deploy_vault_contract(&env, &owner, &manager);
    asset_a.mint(&vault.address, &500);
    asset_b.mint(&vault.address, &800);

    vault.batch_withdraw_to(
        &vec![&env, asset_a.address.clone(), asset_b.address.clone()],
        &vec![&env, 200, 300],
        &recipient,
    );

    let a = token::TokenClient::new(&env, &asset_a.address);
    let b = token::TokenClient::new(&env, &asset_b.address);
    assert_eq!(a.balance(&vault.address), 300);
    assert_eq!(b.balance(&vault.address), 500);
    assert_eq!(a.balance(&recipient), 200);
    assert_eq!(b.balance(&recipient), 300);
}

#[test]
#[should_panic(expected = "Error(Contract, #2)")]
fn test_batch_withdraw_to_rejects_mismatched_lengths() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let manager = Address::generate(&env);
    let recipient = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let asset = deploy_token_contract(&env, &token_admin);

    let vault = deploy_vault_contract(&env, &owner, &manager);

    vault.batch_withdraw_to(
        &vec![&env, asset.address.clone()],
        &vec![&env, 1, 2],
        &recipient,
    );
}

#[test]
fn test_batch_withdraw_to_is_all_or_nothing() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let manager = Address::generate(&env);
    let recipient = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let asset_a = deploy_token_contract(&env, &token_admin);
    let asset_b = deploy_token_contract(&env, &token_admin);

    let vault = deploy_vault_contract(&env, &owner, &manager);
    asset_a.mint(&vault.address, &500);
    asset_b.mint(&vault.address, &100);

    // The second transfer exceeds the vault's balance, so the first one
    // must be rolled back with it.
    let result = vault.try_batch_withdraw_to(
        &vec![&env, asset_a.address.clone(), asset_b.address.clone()],
        &vec![&env, 200, 300],
        &recipient,
    );
    assert!(result.is_err());

    let a = token::TokenClient::new(&env, &asset_a.address);
    let b = token::TokenClient::new(&env, &asset_b.address);
    assert_eq!(a.balance(&vault.address), 500);
    assert_eq!(b.balance(&vault.address), 100);
    assert_eq!(a.balance(&recipient), 0);
    assert_eq!(b.balance(&recipient), 0);
}

#[test]
fn test_change_manager() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let manager = Address::generate(&env);
    let new_manager = Address::generate(&env);

    let vault = deploy_vault_contract(&env, &owner, &manager);
    assert_eq!(vault.query_manager(), manager);

    vault.change_manager(&new_manager);
    assert_eq!(vault.query_manager(), new_manager);
    // The owner is untouched by a manager rotation.
    assert_eq!(vault.query_owner(), owner);
}

#[test]
#[should_panic]
fn test_change_manager_requires_owner_auth() {
    let env = Env::default();

    let owner = Address::generate(&env);
    let manager = Address::generate(&env);
    let new_manager = Address::generate(&env);

    let vault = deploy_vault_contract(&env, &owner, &manager);
    vault.change_manager(&new_manager);
}
