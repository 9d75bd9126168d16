use soroban_sdk::{Address, Env, Vec};

#[allow(dead_code)]
pub trait VaultTrait {
    fn initialize(env: Env, owner: Address, manager: Address);

    /// Move `amount` of `token` out of custody to `to`. Manager role only.
    fn withdraw_to(env: Env, token: Address, amount: i128, to: Address);

    /// All-or-nothing withdrawal over parallel `tokens`/`amounts` arrays.
    fn batch_withdraw_to(env: Env, tokens: Vec<Address>, amounts: Vec<i128>, to: Address);

    /// Hand the manager role to another address. Owner only.
    fn change_manager(env: Env, new_manager: Address);

    fn query_manager(env: Env) -> Address;

    fn query_owner(env: Env) -> Address;
}
