use reserve::constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use reserve::error::{ErrorCode, ReserveResult};
use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::basket::Basket;
use crate::proposal::Proposal;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Initialized,
    CurrentBasket,
    BasketCount,
    Basket(u32),
    ProposalCount,
    Proposal(u32),
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub owner: Address,
    pub operator: Address,
    pub vault: Address,
    pub reserve_token: Address,
    /// Issuance fee in basis points, charged on top of exact collateral cost.
    pub seigniorage_bps: i64,
    /// Minimum dwell between proposal acceptance and execution, in seconds.
    pub delay: u64,
    pub issuance_paused: bool,
    pub emergency: bool,
    pub use_whitelist: bool,
    pub whitelist: Vec<Address>,
}

pub fn save_config(env: &Env, config: Config) {
    env.storage().persistent().set(&DataKey::Config, &config);
    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .expect("Config not set");

    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    config
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
}

// ################################################################
//                        Basket arena
// ################################################################

/// Append `basket` to the immutable basket arena and return its id. The
/// record is never touched again; successors read it, they don't change it.
pub fn save_basket(env: &Env, basket: &Basket) -> u32 {
    let id: u32 = env
        .storage()
        .instance()
        .get(&DataKey::BasketCount)
        .unwrap_or(0);

    let key = DataKey::Basket(id);
    env.storage().persistent().set(&key, basket);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    env.storage().instance().set(&DataKey::BasketCount, &(id + 1));
    id
}

pub fn get_basket(env: &Env, id: u32) -> ReserveResult<Basket> {
    let key = DataKey::Basket(id);
    let basket = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ErrorCode::ProposalNotFound)?;

    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    Ok(basket)
}

pub fn set_current_basket(env: &Env, id: u32) {
    env.storage().instance().set(&DataKey::CurrentBasket, &id);
}

pub fn get_current_basket_id(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::CurrentBasket)
        .expect("Current basket not set")
}

pub fn get_current_basket(env: &Env) -> Basket {
    get_basket(env, get_current_basket_id(env)).expect("Current basket not set")
}

// ################################################################
//                       Proposal arena
// ################################################################

pub fn get_proposals_length(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

/// Append a proposal; its id equals its index in the list.
pub fn append_proposal(env: &Env, proposal: &Proposal) {
    let count = get_proposals_length(env);
    save_proposal(env, proposal);
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &(count + 1));
}

pub fn save_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_proposal(env: &Env, id: u32) -> ReserveResult<Proposal> {
    let key = DataKey::Proposal(id);
    let proposal = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ErrorCode::ProposalNotFound)?;

    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    Ok(proposal)
}

/// Allocate the next proposal id.
pub fn next_proposal_id(env: &Env) -> u32 {
    get_proposals_length(env)
}
