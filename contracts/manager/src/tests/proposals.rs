use pretty_assertions::assert_eq;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{token, vec, Address, Env};

use crate::proposal::ProposalState;
use crate::tests::setup::{
    accept_and_execute, balance, default_weights, fund_account_and_approve, setup_default, ONE_DAY,
};
use reserve::constants::WEIGHT_SCALE;

#[test]
fn test_propose_weights_creates_a_proposal() {
    let env = Env::default();
    let ctx = setup_default(&env, 0);

    assert_eq!(ctx.manager.query_proposals_length(), 0);

    let tokens = ctx.manager.query_basket().tokens;
    let id = ctx
        .manager
        .propose_weights(&ctx.proposer, &tokens, &default_weights(&env));

    assert_eq!(id, 0);
    assert_eq!(ctx.manager.query_proposals_length(), 1);

    let proposal = ctx.manager.query_proposal(&id);
    assert_eq!(proposal.id, 0);
    assert_eq!(proposal.proposer, ctx.proposer);
    assert_eq!(proposal.state, ProposalState::Created);
    assert_eq!(proposal.acceptance_time, 0);
}

#[test]
fn test_propose_weights_rejects_bad_weight_sum() {
    let env = Env::default();
    let ctx = setup_default(&env, 0);

    let tokens = ctx.manager.query_basket().tokens;
    let result = ctx.manager.try_propose_weights(
        &ctx.proposer,
        &tokens,
        &vec![&env, WEIGHT_SCALE / 8, WEIGHT_SCALE / 8, WEIGHT_SCALE / 8],
    );

    assert!(result.is_err());
    // A proposal that failed validation never reaches Created state.
    assert_eq!(ctx.manager.query_proposals_length(), 0);
}

#[test]
fn test_propose_weights_rejects_mismatched_lengths() {
    let env = Env::default();
    let ctx = setup_default(&env, 0);

    let tokens = ctx.manager.query_basket().tokens;
    let result = ctx.manager.try_propose_weights(
        &ctx.proposer,
        &tokens,
        &vec![&env, WEIGHT_SCALE / 2, WEIGHT_SCALE / 2],
    );

    assert!(result.is_err());
    assert_eq!(ctx.manager.query_proposals_length(), 0);
}

#[test]
fn test_propose_swap_rejects_mismatched_lengths() {
    let env = Env::default();
    let ctx = setup_default(&env, 0);

    let tokens = ctx.manager.query_basket().tokens;
    let result = ctx.manager.try_propose_swap(
        &ctx.proposer,
        &tokens,
        &vec![&env, 1i128, 2],
        &vec![&env, true, true, true],
    );

    assert!(result.is_err());
    assert_eq!(ctx.manager.query_proposals_length(), 0);
}

#[test]
fn test_accept_records_acceptance_time() {
    let env = Env::default();
    let ctx = setup_default(&env, 0);

    env.ledger().with_mut(|li| {
        li.timestamp = 12_345;
    });

    let tokens = ctx.manager.query_basket().tokens;
    let id = ctx
        .manager
        .propose_weights(&ctx.proposer, &tokens, &default_weights(&env));

    ctx.manager.accept_proposal(&id);

    let proposal = ctx.manager.query_proposal(&id);
    assert_eq!(proposal.state, ProposalState::Accepted);
    assert_eq!(proposal.acceptance_time, 12_345);
}

#[test]
#[should_panic(expected = "Error(Contract, #12)")]
fn test_accept_twice_fails() {
    let env = Env::default();
    let ctx = setup_default(&env, 0);

    let tokens = ctx.manager.query_basket().tokens;
    let id = ctx
        .manager
        .propose_weights(&ctx.proposer, &tokens, &default_weights(&env));

    ctx.manager.accept_proposal(&id);
    ctx.manager.accept_proposal(&id);
}

#[test]
fn test_execute_respects_the_cooldown_boundary() {
    let env = Env::default();
    let ctx = setup_default(&env, 0);

    let tokens = ctx.manager.query_basket().tokens;
    let id = ctx
        .manager
        .propose_weights(&ctx.proposer, &tokens, &default_weights(&env));
    ctx.manager.accept_proposal(&id);

    let accepted_at = env.ledger().timestamp();

    // One second short of the cooldown: still locked.
    env.ledger().with_mut(|li| {
        li.timestamp = accepted_at + ONE_DAY - 1;
    });
    assert!(ctx.manager.try_execute_proposal(&id).is_err());
    assert_eq!(
        ctx.manager.query_proposal(&id).state,
        ProposalState::Accepted
    );

    // Exactly at the boundary: executable.
    env.ledger().with_mut(|li| {
        li.timestamp = accepted_at + ONE_DAY;
    });
    ctx.manager.execute_proposal(&id);
    assert_eq!(
        ctx.manager.query_proposal(&id).state,
        ProposalState::Completed
    );
}

#[test]
fn test_execute_requires_accepted_state() {
    let env = Env::default();
    let ctx = setup_default(&env, 0);

    let tokens = ctx.manager.query_basket().tokens;
    let id = ctx
        .manager
        .propose_weights(&ctx.proposer, &tokens, &default_weights(&env));

    let basket_id_before = ctx.manager.query_basket_id();

    // Created, not Accepted.
    assert!(ctx.manager.try_execute_proposal(&id).is_err());

    // Cancelled proposals can't be executed either.
    ctx.manager.cancel_proposal(&ctx.proposer, &id);
    assert!(ctx.manager.try_execute_proposal(&id).is_err());

    // A failed execution leaves the manager untouched.
    assert_eq!(ctx.manager.query_basket_id(), basket_id_before);
    assert_eq!(ctx.manager.query_proposals_length(), 1);
    assert_eq!(
        ctx.manager.query_proposal(&id).state,
        ProposalState::Cancelled
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #16)")]
fn test_execute_is_halted_by_emergency() {
    let env = Env::default();
    let ctx = setup_default(&env, 0);

    let tokens = ctx.manager.query_basket().tokens;
    let id = ctx
        .manager
        .propose_weights(&ctx.proposer, &tokens, &default_weights(&env));
    ctx.manager.accept_proposal(&id);
    env.ledger().with_mut(|li| {
        li.timestamp += ONE_DAY;
    });

    ctx.manager.set_emergency(&true);
    ctx.manager.execute_proposal(&id);
}

#[test]
fn test_cancel_from_created_and_accepted() {
    let env = Env::default();
    let ctx = setup_default(&env, 0);

    let tokens = ctx.manager.query_basket().tokens;

    // Proposer cancels their own Created proposal.
    let first = ctx
        .manager
        .propose_weights(&ctx.proposer, &tokens, &default_weights(&env));
    ctx.manager.cancel_proposal(&ctx.proposer, &first);
    assert_eq!(
        ctx.manager.query_proposal(&first).state,
        ProposalState::Cancelled
    );

    // Owner cancels someone else's Accepted proposal.
    let second = ctx
        .manager
        .propose_weights(&ctx.proposer, &tokens, &default_weights(&env));
    ctx.manager.accept_proposal(&second);
    ctx.manager.cancel_proposal(&ctx.owner, &second);
    assert_eq!(
        ctx.manager.query_proposal(&second).state,
        ProposalState::Cancelled
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #10)")]
fn test_cancel_by_a_stranger_fails() {
    let env = Env::default();
    let ctx = setup_default(&env, 0);

    let tokens = ctx.manager.query_basket().tokens;
    let id = ctx
        .manager
        .propose_weights(&ctx.proposer, &tokens, &default_weights(&env));

    let stranger = Address::generate(&env);
    ctx.manager.cancel_proposal(&stranger, &id);
}

#[test]
#[should_panic(expected = "Error(Contract, #12)")]
fn test_cancel_after_completion_fails() {
    let env = Env::default();
    let ctx = setup_default(&env, 0);

    let tokens = ctx.manager.query_basket().tokens;
    let id = ctx
        .manager
        .propose_weights(&ctx.proposer, &tokens, &default_weights(&env));
    accept_and_execute(&env, &ctx.manager, id);

    ctx.manager.cancel_proposal(&ctx.proposer, &id);
}

#[test]
fn test_weight_proposal_replaces_the_basket_at_zero_supply() {
    let env = Env::default();
    let ctx = setup_default(&env, 0);

    let tokens = ctx.manager.query_basket().tokens;
    let new_weights = vec![
        &env,
        4 * WEIGHT_SCALE / 8,
        WEIGHT_SCALE / 8,
        3 * WEIGHT_SCALE / 8,
    ];

    let id = ctx
        .manager
        .propose_weights(&ctx.proposer, &tokens, &new_weights);
    accept_and_execute(&env, &ctx.manager, id);

    // The active reference moved to a fresh basket record.
    assert_eq!(ctx.manager.query_basket_id(), 1);
    let basket = ctx.manager.query_basket();
    for (i, token) in tokens.iter().enumerate() {
        assert_eq!(
            basket.weight_of(&token),
            new_weights.get(i as u32).unwrap()
        );
    }

    // The original record is history, not gone.
    let original = ctx.manager.query_basket_at(&0);
    assert_eq!(original.weight_of(&tokens.get(0).unwrap()), WEIGHT_SCALE / 8);
}

#[test]
fn test_weight_proposal_settles_collateral_with_the_proposer() {
    let env = Env::default();
    let ctx = setup_default(&env, 0);

    // Put 1000 reserve units in circulation: vault holds [125, 375, 500].
    fund_account_and_approve(
        &env,
        &ctx.collateral,
        &ctx.user,
        &[125, 375, 500],
        &ctx.manager.address,
    );
    ctx.manager.issue(&ctx.user, &1_000);

    // Retarget to [4/8, 1/8, 3/8]: the proposer owes 375 of the first token
    // and is owed 250 and 125 of the other two.
    let tokens = ctx.manager.query_basket().tokens;
    let id = ctx.manager.propose_weights(
        &ctx.proposer,
        &tokens,
        &vec![
            &env,
            4 * WEIGHT_SCALE / 8,
            WEIGHT_SCALE / 8,
            3 * WEIGHT_SCALE / 8,
        ],
    );

    fund_account_and_approve(
        &env,
        &ctx.collateral,
        &ctx.proposer,
        &[375, 0, 0],
        &ctx.manager.address,
    );
    accept_and_execute(&env, &ctx.manager, id);

    let vault_addr = &ctx.vault.address;
    assert_eq!(balance(&env, &ctx.collateral[0].address, vault_addr), 500);
    assert_eq!(balance(&env, &ctx.collateral[1].address, vault_addr), 125);
    assert_eq!(balance(&env, &ctx.collateral[2].address, vault_addr), 375);

    assert_eq!(balance(&env, &ctx.collateral[0].address, &ctx.proposer), 0);
    assert_eq!(balance(&env, &ctx.collateral[1].address, &ctx.proposer), 250);
    assert_eq!(balance(&env, &ctx.collateral[2].address, &ctx.proposer), 125);

    assert!(ctx.manager.is_fully_collateralized());
}

#[test]
fn test_swap_proposal_rederives_weights_from_collateral_change() {
    let env = Env::default();
    let ctx = setup_default(&env, 0);

    fund_account_and_approve(
        &env,
        &ctx.collateral,
        &ctx.user,
        &[125, 375, 500],
        &ctx.manager.address,
    );
    ctx.manager.issue(&ctx.user, &1_000);
    let supply: i128 = 1_000;

    let basket = ctx.manager.query_basket();
    let token_a = basket.tokens.get(0).unwrap();
    let token_b = basket.tokens.get(1).unwrap();
    let weight_a = basket.weight_of(&token_a);
    let weight_b = basket.weight_of(&token_b);

    // 50 of the first token into the vault, 25 of the second out of it.
    let id = ctx.manager.propose_swap(
        &ctx.proposer,
        &vec![&env, token_a.clone(), token_b.clone()],
        &vec![&env, 50i128, 25],
        &vec![&env, true, false],
    );

    fund_account_and_approve(
        &env,
        &ctx.collateral,
        &ctx.proposer,
        &[50, 0, 0],
        &ctx.manager.address,
    );
    accept_and_execute(&env, &ctx.manager, id);

    // Weights are re-derived from the realized collateral change, floored.
    let expected_a = (weight_a * supply + 50 * WEIGHT_SCALE) / supply;
    let expected_b = (weight_b * supply - 25 * WEIGHT_SCALE) / supply;
    let new_basket = ctx.manager.query_basket();
    assert_eq!(new_basket.weight_of(&token_a), expected_a);
    assert_eq!(new_basket.weight_of(&token_b), expected_b);

    // The unlisted third token carries over unchanged.
    let token_c = basket.tokens.get(2).unwrap();
    assert_eq!(new_basket.weight_of(&token_c), basket.weight_of(&token_c));

    // The vault ends up holding exactly the new requirements.
    let required = new_basket.quantities_required(&env, supply).unwrap();
    for (token, required_amount) in new_basket.tokens.iter().zip(required.iter()) {
        assert_eq!(
            token::TokenClient::new(&env, &token).balance(&ctx.vault.address),
            required_amount
        );
    }
    assert!(ctx.manager.is_fully_collateralized());
}

#[test]
fn test_swap_proposal_fails_at_zero_supply() {
    let env = Env::default();
    let ctx = setup_default(&env, 0);

    let basket = ctx.manager.query_basket();
    let token_a = basket.tokens.get(0).unwrap();

    let id = ctx.manager.propose_swap(
        &ctx.proposer,
        &vec![&env, token_a],
        &vec![&env, 50i128],
        &vec![&env, true],
    );
    ctx.manager.accept_proposal(&id);
    env.ledger().with_mut(|li| {
        li.timestamp += ONE_DAY;
    });

    assert!(ctx.manager.try_execute_proposal(&id).is_err());
    assert_eq!(ctx.manager.query_basket_id(), 0);
}

#[test]
fn test_accepted_proposals_execute_in_call_order() {
    let env = Env::default();
    let ctx = setup_default(&env, 0);

    let tokens = ctx.manager.query_basket().tokens;
    let first = ctx.manager.propose_weights(
        &ctx.proposer,
        &tokens,
        &vec![
            &env,
            2 * WEIGHT_SCALE / 8,
            2 * WEIGHT_SCALE / 8,
            4 * WEIGHT_SCALE / 8,
        ],
    );
    let second = ctx.manager.propose_weights(
        &ctx.proposer,
        &tokens,
        &vec![
            &env,
            WEIGHT_SCALE / 8,
            WEIGHT_SCALE / 8,
            6 * WEIGHT_SCALE / 8,
        ],
    );

    // Both sit Accepted at once; executing one does not invalidate the other.
    ctx.manager.accept_proposal(&first);
    ctx.manager.accept_proposal(&second);
    env.ledger().with_mut(|li| {
        li.timestamp += ONE_DAY;
    });

    ctx.manager.execute_proposal(&second);
    ctx.manager.execute_proposal(&first);

    // Last executed wins the active reference.
    let basket = ctx.manager.query_basket();
    assert_eq!(
        basket.weight_of(&tokens.get(0).unwrap()),
        2 * WEIGHT_SCALE / 8
    );
    assert_eq!(ctx.manager.query_basket_id(), 2);
}
