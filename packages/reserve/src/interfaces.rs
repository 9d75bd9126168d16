use soroban_sdk::{contractclient, Address, Env, Vec};

/// Withdrawal surface of the collateral vault, as seen by the manager.
#[contractclient(name = "VaultClient")]
pub trait VaultInterface {
    /// Move `amount` of `token` out of the vault to `to`.
    fn withdraw_to(env: Env, token: Address, amount: i128, to: Address);

    /// All-or-nothing variant over parallel `tokens`/`amounts` arrays.
    fn batch_withdraw_to(env: Env, tokens: Vec<Address>, amounts: Vec<i128>, to: Address);
}

/// Managed-mint surface of the reserve token. The SEP-41 face of the token
/// (transfer, burn, balance, ...) is reached through
/// `soroban_sdk::token::TokenClient`.
#[contractclient(name = "ReserveTokenClient")]
pub trait ReserveTokenInterface {
    /// Mint `amount` to `to`. Restricted to the configured minter.
    fn mint(env: Env, to: Address, amount: i128);

    /// Outstanding supply of the reserve token.
    fn total_supply(env: Env) -> i128;
}
