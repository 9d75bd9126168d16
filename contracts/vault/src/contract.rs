use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, token, Address, Env, Vec,
};

use crate::{
    events::VaultEvents,
    storage::{get_config, is_initialized, save_config, set_initialized, Config},
    vault::VaultTrait,
};

use reserve::{
    constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD},
    error::ErrorCode,
};

contractmeta!(
    key = "Description",
    val = "Custody vault for the collateral backing the reserve asset"
);

#[contract]
pub struct Vault;

#[contractimpl]
impl VaultTrait for Vault {
    fn initialize(env: Env, owner: Address, manager: Address) {
        if is_initialized(&env) {
            log!(
                &env,
                "Vault: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        set_initialized(&env);

        save_config(
            &env,
            Config {
                owner: owner.clone(),
                manager: manager.clone(),
            },
        );

        VaultEvents::initialize(&env, owner, manager);
    }

    fn withdraw_to(env: Env, token: Address, amount: i128, to: Address) {
        let config = get_config(&env);
        config.manager.require_auth();

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if amount < 0 {
            log!(&env, "Vault: Withdraw to: negative amount");
            panic_with_error!(&env, ErrorCode::AmountMustBePositive);
        }

        token::TokenClient::new(&env, &token).transfer(
            &env.current_contract_address(),
            &to,
            &amount,
        );

        VaultEvents::withdrawal(&env, token, amount, to);
    }

    fn batch_withdraw_to(env: Env, tokens: Vec<Address>, amounts: Vec<i128>, to: Address) {
        let config = get_config(&env);
        config.manager.require_auth();

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if tokens.len() != amounts.len() {
            log!(&env, "Vault: Batch withdraw to: mismatched array lengths");
            panic_with_error!(&env, ErrorCode::ArrayLengthMismatch);
        }

        // One failed transfer aborts the invocation, rolling back the rest.
        for (token, amount) in tokens.iter().zip(amounts.iter()) {
            if amount < 0 {
                log!(&env, "Vault: Batch withdraw to: negative amount");
                panic_with_error!(&env, ErrorCode::AmountMustBePositive);
            }

            token::TokenClient::new(&env, &token).transfer(
                &env.current_contract_address(),
                &to,
                &amount,
            );

            VaultEvents::withdrawal(&env, token, amount, to.clone());
        }
    }

    fn change_manager(env: Env, new_manager: Address) {
        let config = get_config(&env);
        config.owner.require_auth();

        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let previous_manager = config.manager.clone();
        save_config(
            &env,
            Config {
                manager: new_manager.clone(),
                ..config
            },
        );

        VaultEvents::manager_transferred(&env, previous_manager, new_manager);
    }

    fn query_manager(env: Env) -> Address {
        get_config(&env).manager
    }

    fn query_owner(env: Env) -> Address {
        get_config(&env).owner
    }
}
