use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, token, Address, Env, Vec,
};

use crate::{
    basket::Basket,
    events::ManagerEvents,
    manager::ManagerTrait,
    proposal::{Proposal, ProposalKind, SwapDescriptor, WeightsDescriptor},
    storage::{
        append_proposal, get_basket, get_config, get_current_basket, get_current_basket_id,
        get_proposal, get_proposals_length, is_initialized, next_proposal_id, save_basket,
        save_config, save_proposal, set_current_basket, set_initialized, Config,
    },
};

use reserve::{
    constants::{
        BPS_FACTOR, DEFAULT_PROPOSAL_DELAY, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD,
        MAX_SEIGNIORAGE_BPS, WEIGHT_SCALE,
    },
    error::ErrorCode,
    interfaces::{ReserveTokenClient, VaultClient},
    math::safe_math::SafeMath,
    validate_bps,
};

contractmeta!(
    key = "Description",
    val = "Basket governance, issuance and redemption for the reserve asset"
);

#[contract]
pub struct Manager;

#[contractimpl]
impl ManagerTrait for Manager {
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
    ) {
        if is_initialized(&env) {
            log!(
                &env,
                "Manager: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        validate_bps!(seigniorage_bps);
        if seigniorage_bps > MAX_SEIGNIORAGE_BPS {
            log!(&env, "Manager: Initialize: seigniorage above the cap");
            panic_with_error!(&env, ErrorCode::InvalidBps);
        }

        let basket = Basket::new(&env, tokens, weights)
            .unwrap_or_else(|err| panic_with_error!(&env, err));

        set_initialized(&env);

        let basket_id = save_basket(&env, &basket);
        set_current_basket(&env, basket_id);

        save_config(
            &env,
            Config {
                owner: owner.clone(),
                operator: operator.clone(),
                vault,
                reserve_token,
                seigniorage_bps,
                delay: DEFAULT_PROPOSAL_DELAY,
                issuance_paused: false,
                // Starts in emergency; the operator has to clear it before
                // issuance, redemption or proposal execution can run.
                emergency: true,
                use_whitelist: false,
                whitelist: Vec::new(&env),
            },
        );

        ManagerEvents::initialize(&env, owner, operator, basket_id);
    }

    fn propose_weights(
        env: Env,
        proposer: Address,
        tokens: Vec<Address>,
        weights: Vec<i128>,
    ) -> u32 {
        proposer.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        // Shape checks are the same as for a standalone basket; a proposal
        // that cannot construct one must never reach Created.
        Basket::new(&env, tokens.clone(), weights.clone())
            .unwrap_or_else(|err| panic_with_error!(&env, err));

        let sum = weight_sum(&env, &weights);
        if sum != WEIGHT_SCALE {
            log!(
                &env,
                "Manager: Propose weights: weights must sum to one basket unit"
            );
            panic_with_error!(&env, ErrorCode::InvalidWeightSum);
        }

        let proposal = Proposal::new(
            next_proposal_id(&env),
            proposer.clone(),
            ProposalKind::Weights(WeightsDescriptor { tokens, weights }),
        );
        append_proposal(&env, &proposal);

        ManagerEvents::propose(&env, proposer, proposal.id);
        proposal.id
    }

    fn propose_swap(
        env: Env,
        proposer: Address,
        tokens: Vec<Address>,
        amounts: Vec<i128>,
        to_vault: Vec<bool>,
    ) -> u32 {
        proposer.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if tokens.len() != amounts.len() || tokens.len() != to_vault.len() {
            log!(&env, "Manager: Propose swap: mismatched array lengths");
            panic_with_error!(&env, ErrorCode::ArrayLengthMismatch);
        }
        for amount in amounts.iter() {
            if amount < 0 {
                log!(&env, "Manager: Propose swap: negative amount");
                panic_with_error!(&env, ErrorCode::AmountMustBePositive);
            }
        }

        let proposal = Proposal::new(
            next_proposal_id(&env),
            proposer.clone(),
            ProposalKind::Swap(SwapDescriptor {
                tokens,
                amounts,
                to_vault,
            }),
        );
        append_proposal(&env, &proposal);

        ManagerEvents::propose(&env, proposer, proposal.id);
        proposal.id
    }

    fn accept_proposal(env: Env, id: u32) {
        let config = get_config(&env);
        config.operator.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let mut proposal =
            get_proposal(&env, id).unwrap_or_else(|err| panic_with_error!(&env, err));

        let now = env.ledger().timestamp();
        proposal
            .accept(now)
            .unwrap_or_else(|err| panic_with_error!(&env, err));
        save_proposal(&env, &proposal);

        ManagerEvents::proposal_accepted(&env, id, proposal.proposer, now);
    }

    fn cancel_proposal(env: Env, sender: Address, id: u32) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let mut proposal =
            get_proposal(&env, id).unwrap_or_else(|err| panic_with_error!(&env, err));

        if sender != proposal.proposer && sender != config.owner {
            log!(&env, "Manager: Cancel proposal: You are not authorized!");
            panic_with_error!(&env, ErrorCode::NotAuthorized);
        }

        proposal
            .cancel()
            .unwrap_or_else(|err| panic_with_error!(&env, err));
        save_proposal(&env, &proposal);

        ManagerEvents::proposal_cancelled(&env, id, proposal.proposer);
    }

    fn execute_proposal(env: Env, id: u32) {
        let config = get_config(&env);
        config.operator.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if config.emergency {
            log!(&env, "Manager: Execute proposal: halted by emergency");
            panic_with_error!(&env, ErrorCode::InEmergency);
        }

        let mut proposal =
            get_proposal(&env, id).unwrap_or_else(|err| panic_with_error!(&env, err));

        let current = get_current_basket(&env);
        let supply = ReserveTokenClient::new(&env, &config.reserve_token).total_supply();

        let new_basket = proposal
            .complete(
                &env,
                env.ledger().timestamp(),
                config.delay,
                &current,
                supply,
            )
            .unwrap_or_else(|err| panic_with_error!(&env, err));

        // Settle the collateral difference with the proposer: what the new
        // basket needs beyond the old one comes in, what it frees goes out.
        let deltas = new_basket
            .delta_quantities_required(&env, supply, &current)
            .unwrap_or_else(|err| panic_with_error!(&env, err));

        let mut out_tokens = Vec::new(&env);
        let mut out_amounts = Vec::new(&env);
        for (token, delta) in deltas.iter() {
            if delta > 0 {
                token::TokenClient::new(&env, &token).transfer_from(
                    &env.current_contract_address(),
                    &proposal.proposer,
                    &config.vault,
                    &delta,
                );
            } else if delta < 0 {
                out_tokens.push_back(token);
                out_amounts.push_back(-delta);
            }
        }
        if !out_tokens.is_empty() {
            VaultClient::new(&env, &config.vault).batch_withdraw_to(
                &out_tokens,
                &out_amounts,
                &proposal.proposer,
            );
        }

        let basket_id = save_basket(&env, &new_basket);
        set_current_basket(&env, basket_id);
        save_proposal(&env, &proposal);

        assert_fully_collateralized(&env, &config, &new_basket);

        ManagerEvents::proposal_completed(&env, id, basket_id);
    }

    fn issue(env: Env, user: Address, amount: i128) {
        user.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if amount <= 0 {
            log!(&env, "Manager: Issue: amount must be positive");
            panic_with_error!(&env, ErrorCode::AmountMustBePositive);
        }

        let config = get_config(&env);
        if config.emergency {
            log!(&env, "Manager: Issue: halted by emergency");
            panic_with_error!(&env, ErrorCode::InEmergency);
        }
        if config.issuance_paused {
            log!(&env, "Manager: Issue: issuance is paused");
            panic_with_error!(&env, ErrorCode::IssuancePaused);
        }
        if config.use_whitelist && !config.whitelist.contains(user.clone()) {
            log!(&env, "Manager: Issue: caller is not whitelisted");
            panic_with_error!(&env, ErrorCode::NotWhitelisted);
        }

        let basket = get_current_basket(&env);

        // Seigniorage scales the amount being backed, then the basket prices
        // it. Intake rounds up so dust stays on the vault's side.
        let effective = amount
            .safe_mul(
                BPS_FACTOR
                    .safe_add(config.seigniorage_bps as i128, &env)
                    .unwrap_or_else(|err| panic_with_error!(&env, err)),
                &env,
            )
            .and_then(|value| value.safe_div(BPS_FACTOR, &env))
            .unwrap_or_else(|err| panic_with_error!(&env, err));

        let required = basket
            .quantities_required_ceil(&env, effective)
            .unwrap_or_else(|err| panic_with_error!(&env, err));

        for (token, token_amount) in basket.tokens.iter().zip(required.iter()) {
            token::TokenClient::new(&env, &token).transfer(&user, &config.vault, &token_amount);
        }

        ReserveTokenClient::new(&env, &config.reserve_token).mint(&user, &amount);

        assert_fully_collateralized(&env, &config, &basket);

        ManagerEvents::issuance(&env, user, amount);
    }

    fn redeem(env: Env, user: Address, amount: i128) {
        user.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if amount <= 0 {
            log!(&env, "Manager: Redeem: amount must be positive");
            panic_with_error!(&env, ErrorCode::AmountMustBePositive);
        }

        let config = get_config(&env);
        if config.emergency {
            log!(&env, "Manager: Redeem: halted by emergency");
            panic_with_error!(&env, ErrorCode::InEmergency);
        }

        let basket = get_current_basket(&env);

        // Burn first; the token contract rejects an insufficient balance.
        token::TokenClient::new(&env, &config.reserve_token).burn(&user, &amount);

        let payout = basket
            .quantities_required(&env, amount)
            .unwrap_or_else(|err| panic_with_error!(&env, err));

        VaultClient::new(&env, &config.vault).batch_withdraw_to(&basket.tokens, &payout, &user);

        assert_fully_collateralized(&env, &config, &basket);

        ManagerEvents::redemption(&env, user, amount);
    }

    fn set_emergency(env: Env, emergency: bool) {
        let config = get_config(&env);
        config.operator.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let old = config.emergency;
        save_config(&env, Config { emergency, ..config });

        ManagerEvents::emergency_changed(&env, old, emergency);
    }

    fn set_issuance_paused(env: Env, paused: bool) {
        let config = get_config(&env);
        config.operator.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let old = config.issuance_paused;
        save_config(
            &env,
            Config {
                issuance_paused: paused,
                ..config
            },
        );

        ManagerEvents::issuance_paused_changed(&env, old, paused);
    }

    fn set_operator(env: Env, new_operator: Address) {
        let config = get_config(&env);
        config.owner.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let old = config.operator.clone();
        save_config(
            &env,
            Config {
                operator: new_operator.clone(),
                ..config
            },
        );

        ManagerEvents::operator_changed(&env, old, new_operator);
    }

    fn set_vault(env: Env, new_vault: Address) {
        let config = get_config(&env);
        config.owner.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let old = config.vault.clone();
        save_config(
            &env,
            Config {
                vault: new_vault.clone(),
                ..config
            },
        );

        ManagerEvents::vault_changed(&env, old, new_vault);
    }

    fn set_seigniorage(env: Env, seigniorage_bps: i64) {
        let config = get_config(&env);
        config.owner.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        validate_bps!(seigniorage_bps);
        if seigniorage_bps > MAX_SEIGNIORAGE_BPS {
            log!(&env, "Manager: Set seigniorage: value above the cap");
            panic_with_error!(&env, ErrorCode::InvalidBps);
        }

        let old = config.seigniorage_bps;
        save_config(
            &env,
            Config {
                seigniorage_bps,
                ..config
            },
        );

        ManagerEvents::seigniorage_changed(&env, old, seigniorage_bps);
    }

    fn set_delay(env: Env, delay: u64) {
        let config = get_config(&env);
        config.owner.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let old = config.delay;
        save_config(&env, Config { delay, ..config });

        ManagerEvents::delay_changed(&env, old, delay);
    }

    fn set_use_whitelist(env: Env, enabled: bool) {
        let config = get_config(&env);
        config.owner.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        save_config(
            &env,
            Config {
                use_whitelist: enabled,
                ..config
            },
        );

        ManagerEvents::whitelist_changed(&env, enabled);
    }

    fn update_whitelist(env: Env, to_add: Vec<Address>, to_remove: Vec<Address>) {
        let config = get_config(&env);
        config.owner.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let mut whitelist = config.whitelist.clone();

        to_add.into_iter().for_each(|addr| {
            if !whitelist.contains(addr.clone()) {
                whitelist.push_back(addr);
            }
        });

        to_remove.into_iter().for_each(|addr| {
            if let Some(id) = whitelist.iter().position(|x| x == addr) {
                whitelist.remove(id as u32);
            }
        });

        save_config(&env, Config { whitelist, ..config });
    }

    fn is_fully_collateralized(env: Env) -> bool {
        let config = get_config(&env);
        let basket = get_current_basket(&env);
        check_collateralized(&env, &config, &basket)
    }

    fn query_config(env: Env) -> Config {
        get_config(&env)
    }

    fn query_basket(env: Env) -> Basket {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_current_basket(&env)
    }

    fn query_basket_id(env: Env) -> u32 {
        get_current_basket_id(&env)
    }

    fn query_basket_at(env: Env, id: u32) -> Basket {
        get_basket(&env, id).unwrap_or_else(|err| panic_with_error!(&env, err))
    }

    fn query_proposal(env: Env, id: u32) -> Proposal {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_proposal(&env, id).unwrap_or_else(|err| panic_with_error!(&env, err))
    }

    fn query_proposals_length(env: Env) -> u32 {
        get_proposals_length(&env)
    }
}

fn weight_sum(env: &Env, weights: &Vec<i128>) -> i128 {
    let mut sum = 0i128;
    for weight in weights.iter() {
        sum = sum
            .safe_add(weight, env)
            .unwrap_or_else(|err| panic_with_error!(env, err));
    }
    sum
}

/// The invariant behind every mutating operation: the vault must hold enough
/// of every basket token to redeem the entire outstanding supply.
fn check_collateralized(env: &Env, config: &Config, basket: &Basket) -> bool {
    let supply = ReserveTokenClient::new(env, &config.reserve_token).total_supply();
    for token in basket.tokens.iter() {
        let required = basket
            .quantity_required(&token, supply)
            .unwrap_or_else(|err| panic_with_error!(env, err));
        let balance = token::TokenClient::new(env, &token).balance(&config.vault);
        if balance < required {
            return false;
        }
    }
    true
}

fn assert_fully_collateralized(env: &Env, config: &Config, basket: &Basket) {
    if !check_collateralized(env, config, basket) {
        log!(&env, "Manager: vault no longer covers the outstanding supply");
        panic_with_error!(env, ErrorCode::NotCollateralized);
    }
}
