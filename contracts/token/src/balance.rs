use reserve::constants::{BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD};
use reserve::error::ErrorCode;
use soroban_sdk::{panic_with_error, Address, Env};

use crate::storage_types::DataKey;

pub fn read_balance(env: &Env, addr: Address) -> i128 {
    let key = DataKey::Balance(addr);
    if let Some(balance) = env.storage().persistent().get::<DataKey, i128>(&key) {
        env.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
        balance
    } else {
        0
    }
}

fn write_balance(env: &Env, addr: Address, amount: i128) {
    let key = DataKey::Balance(addr);
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn receive_balance(env: &Env, addr: Address, amount: i128) {
    let balance = read_balance(env, addr.clone());
    match balance.checked_add(amount) {
        Some(updated) => write_balance(env, addr, updated),
        None => panic_with_error!(env, ErrorCode::MathError),
    }
}

pub fn spend_balance(env: &Env, addr: Address, amount: i128) {
    let balance = read_balance(env, addr.clone());
    if balance < amount {
        panic_with_error!(env, ErrorCode::InsufficientFunds);
    }
    write_balance(env, addr, balance - amount);
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn increase_total_supply(env: &Env, amount: i128) {
    let supply = read_total_supply(env);
    match supply.checked_add(amount) {
        Some(updated) => env.storage().instance().set(&DataKey::TotalSupply, &updated),
        None => panic_with_error!(env, ErrorCode::MathError),
    }
}

pub fn decrease_total_supply(env: &Env, amount: i128) {
    let supply = read_total_supply(env);
    if supply < amount {
        panic_with_error!(env, ErrorCode::InsufficientFunds);
    }
    env.storage()
        .instance()
        .set(&DataKey::TotalSupply, &(supply - amount));
}
