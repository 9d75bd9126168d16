use soroban_sdk::{Address, Env, Vec};

use crate::basket::Basket;
use crate::proposal::Proposal;
use crate::storage::Config;

#[allow(dead_code)]
pub trait ManagerTrait {
    /// Set up roles, collaborators and the initial basket (basket id 0).
    /// The manager starts in emergency state and must be explicitly cleared
    /// by the operator before issuance, redemption or proposal execution.
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        owner: Address,
        operator: Address,
        vault: Address,
        reserve_token: Address,
        tokens: Vec<Address>,
        weights: Vec<i128>,
        seigniorage_bps: i64,
    );

    /// Propose a full weight re-target. The weights must sum to exactly one
    /// basket unit; this is enforced here, not at execution.
    fn propose_weights(env: Env, proposer: Address, tokens: Vec<Address>, weights: Vec<i128>)
        -> u32;

    /// Propose a pairwise swap of collateral against the vault. Net-zero
    /// value is the proposer's business, not enforced here.
    fn propose_swap(
        env: Env,
        proposer: Address,
        tokens: Vec<Address>,
        amounts: Vec<i128>,
        to_vault: Vec<bool>,
    ) -> u32;

    /// Operator accepts a proposal, starting the cooldown clock.
    fn accept_proposal(env: Env, id: u32);

    /// Proposer or owner may cancel while Created or Accepted.
    fn cancel_proposal(env: Env, sender: Address, id: u32);

    /// Operator executes an accepted proposal once the cooldown has elapsed:
    /// materializes the replacement basket, settles the collateral difference
    /// with the proposer, and atomically moves the active basket reference.
    fn execute_proposal(env: Env, id: u32);

    /// Mint `amount` reserve against collateral pulled from the caller at the
    /// current basket weights plus seigniorage.
    fn issue(env: Env, user: Address, amount: i128);

    /// Burn `amount` reserve from the caller and pay out collateral at the
    /// current basket weights, fee-free.
    fn redeem(env: Env, user: Address, amount: i128);

    fn set_emergency(env: Env, emergency: bool);

    fn set_issuance_paused(env: Env, paused: bool);

    fn set_operator(env: Env, new_operator: Address);

    fn set_vault(env: Env, new_vault: Address);

    fn set_seigniorage(env: Env, seigniorage_bps: i64);

    fn set_delay(env: Env, delay: u64);

    fn set_use_whitelist(env: Env, enabled: bool);

    fn update_whitelist(env: Env, to_add: Vec<Address>, to_remove: Vec<Address>);

    fn is_fully_collateralized(env: Env) -> bool;

    fn query_config(env: Env) -> Config;

    fn query_basket(env: Env) -> Basket;

    fn query_basket_id(env: Env) -> u32;

    fn query_basket_at(env: Env, id: u32) -> Basket;

    fn query_proposal(env: Env, id: u32) -> Proposal;

    fn query_proposals_length(env: Env) -> u32;
}
