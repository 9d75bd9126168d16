use reserve::constants::WEIGHT_SCALE;
use reserve::error::{ErrorCode, ReserveResult};
use reserve::math::safe_math::{SafeDivFloor, SafeMath};
use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::basket::Basket;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalState {
    Created,
    Accepted,
    Cancelled,
    Completed,
}

/// Fully specified replacement target for a weight re-target.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WeightsDescriptor {
    pub tokens: Vec<Address>,
    pub weights: Vec<i128>,
}

/// Net transfers against the vault, one entry per token. `to_vault` gives the
/// direction of each amount.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapDescriptor {
    pub tokens: Vec<Address>,
    pub amounts: Vec<i128>,
    pub to_vault: Vec<bool>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProposalKind {
    Weights(WeightsDescriptor),
    Swap(SwapDescriptor),
}

/// A pending basket change. One shared state machine; the two kinds differ
/// only in how the replacement basket is materialized on completion.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    /// Index in the manager's append-only proposal list.
    pub id: u32,
    pub proposer: Address,
    pub state: ProposalState,
    /// Set on the transition into Accepted, zero before that.
    pub acceptance_time: u64,
    pub kind: ProposalKind,
}

impl Proposal {
    pub fn new(id: u32, proposer: Address, kind: ProposalKind) -> Proposal {
        Proposal {
            id,
            proposer,
            state: ProposalState::Created,
            acceptance_time: 0,
            kind,
        }
    }

    pub fn accept(&mut self, now: u64) -> ReserveResult<()> {
        if self.state != ProposalState::Created {
            return Err(ErrorCode::InvalidProposalState);
        }
        self.state = ProposalState::Accepted;
        self.acceptance_time = now;
        Ok(())
    }

    /// Valid from Created and Accepted. Completed proposals are history and
    /// stay that way.
    pub fn cancel(&mut self) -> ReserveResult<()> {
        match self.state {
            ProposalState::Created | ProposalState::Accepted => {
                self.state = ProposalState::Cancelled;
                Ok(())
            }
            _ => Err(ErrorCode::InvalidProposalState),
        }
    }

    /// Materialize the replacement basket and flip to Completed. Only valid
    /// once the cooldown since acceptance has fully elapsed.
    pub fn complete(
        &mut self,
        env: &Env,
        now: u64,
        delay: u64,
        current: &Basket,
        supply: i128,
    ) -> ReserveResult<Basket> {
        if self.state != ProposalState::Accepted {
            return Err(ErrorCode::InvalidProposalState);
        }
        if now < self.acceptance_time.safe_add(delay, env)? {
            return Err(ErrorCode::ProposalCooldownActive);
        }

        let basket = match &self.kind {
            ProposalKind::Weights(descriptor) => Basket::from_predecessor(
                env,
                current,
                descriptor.tokens.clone(),
                descriptor.weights.clone(),
            )?,
            ProposalKind::Swap(descriptor) => {
                materialize_swap(env, current, descriptor, supply)?
            }
        };

        self.state = ProposalState::Completed;
        Ok(basket)
    }
}

/// Re-derive weights from the realized collateral change: for each listed
/// token, `floor((weight * supply ± amount_in_weight_base) / supply)`.
/// Unlisted tokens carry over unchanged via the predecessor merge.
fn materialize_swap(
    env: &Env,
    current: &Basket,
    descriptor: &SwapDescriptor,
    supply: i128,
) -> ReserveResult<Basket> {
    if supply <= 0 {
        return Err(ErrorCode::MathError);
    }

    let mut new_tokens = Vec::new(env);
    let mut new_weights = Vec::new(env);

    for i in 0..descriptor.tokens.len() {
        let token = descriptor.tokens.get(i).ok_or(ErrorCode::MathError)?;
        let amount = descriptor.amounts.get(i).ok_or(ErrorCode::MathError)?;
        let to_vault = descriptor.to_vault.get(i).ok_or(ErrorCode::MathError)?;

        let scaled_amount = amount.safe_mul(WEIGHT_SCALE, env)?;
        let scaled_weight = current.weight_of(&token).safe_mul(supply, env)?;
        let numerator = if to_vault {
            scaled_weight.safe_add(scaled_amount, env)?
        } else {
            scaled_weight.safe_sub(scaled_amount, env)?
        };
        if numerator < 0 {
            return Err(ErrorCode::MathError);
        }

        new_tokens.push_back(token);
        new_weights.push_back(numerator.safe_div_floor(supply, env)?);
    }

    Basket::from_predecessor(env, current, new_tokens, new_weights)
}
