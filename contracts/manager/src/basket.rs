use reserve::constants::{MAX_BASKET_SIZE, WEIGHT_SCALE};
use reserve::error::{ErrorCode, ReserveResult};
use reserve::math::safe_math::SafeMath;
use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{contracttype, Address, Env, Map, Vec};

/// Immutable snapshot of the collateral tokens backing the reserve asset and
/// their per-unit weights. Baskets are only ever constructed, stored and
/// superseded; a stored basket is never mutated in place.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Basket {
    /// Insertion-ordered token list. Uniqueness is enforced at construction.
    pub tokens: Vec<Address>,
    /// Units of each token backing one whole reserve unit, in the 2^36 base.
    pub weights: Map<Address, i128>,
}

impl Basket {
    pub fn new(env: &Env, tokens: Vec<Address>, weights: Vec<i128>) -> ReserveResult<Basket> {
        if tokens.len() != weights.len() {
            return Err(ErrorCode::ArrayLengthMismatch);
        }
        if tokens.is_empty() {
            return Err(ErrorCode::EmptyBasket);
        }
        if tokens.len() > MAX_BASKET_SIZE {
            return Err(ErrorCode::BasketTooLarge);
        }

        let mut weight_map: Map<Address, i128> = Map::new(env);
        for (token, weight) in tokens.iter().zip(weights.iter()) {
            if weight < 0 {
                return Err(ErrorCode::InvalidWeight);
            }
            if weight_map.contains_key(token.clone()) {
                return Err(ErrorCode::DuplicateToken);
            }
            weight_map.set(token, weight);
        }

        Ok(Basket {
            tokens,
            weights: weight_map,
        })
    }

    /// Build a successor basket: `prev`'s entries carried forward, entries for
    /// `new_tokens` overridden or appended. Empty `new_tokens` yields an exact
    /// copy of `prev`.
    pub fn from_predecessor(
        env: &Env,
        prev: &Basket,
        new_tokens: Vec<Address>,
        new_weights: Vec<i128>,
    ) -> ReserveResult<Basket> {
        if new_tokens.len() != new_weights.len() {
            return Err(ErrorCode::ArrayLengthMismatch);
        }

        let mut tokens = prev.tokens.clone();
        let mut weights = prev.weights.clone();
        let mut seen: Map<Address, bool> = Map::new(env);

        for (token, weight) in new_tokens.iter().zip(new_weights.iter()) {
            if weight < 0 {
                return Err(ErrorCode::InvalidWeight);
            }
            if seen.contains_key(token.clone()) {
                return Err(ErrorCode::DuplicateToken);
            }
            seen.set(token.clone(), true);

            if !weights.contains_key(token.clone()) {
                tokens.push_back(token.clone());
            }
            weights.set(token, weight);
        }

        if tokens.len() > MAX_BASKET_SIZE {
            return Err(ErrorCode::BasketTooLarge);
        }

        Ok(Basket { tokens, weights })
    }

    pub fn size(&self) -> u32 {
        self.tokens.len()
    }

    pub fn token_at(&self, index: u32) -> Option<Address> {
        self.tokens.get(index)
    }

    pub fn has(&self, token: &Address) -> bool {
        self.weights.contains_key(token.clone())
    }

    /// Weight of `token`, or zero for a token outside the basket.
    pub fn weight_of(&self, token: &Address) -> i128 {
        self.weights.get(token.clone()).unwrap_or(0)
    }

    /// Per token, `floor(weight * supply / 2^36)`, in token order.
    pub fn quantities_required(&self, env: &Env, supply: i128) -> ReserveResult<Vec<i128>> {
        let mut amounts = Vec::new(env);
        for token in self.tokens.iter() {
            amounts.push_back(self.quantity_required(&token, supply)?);
        }
        Ok(amounts)
    }

    /// Ceiling variant used when collateral flows in, so rounding dust always
    /// lands on the vault's side of the invariant.
    pub fn quantities_required_ceil(&self, env: &Env, supply: i128) -> ReserveResult<Vec<i128>> {
        let mut amounts = Vec::new(env);
        for token in self.tokens.iter() {
            let weight = self.weight_of(&token);
            let amount = weight
                .fixed_mul_ceil(supply, WEIGHT_SCALE)
                .ok_or(ErrorCode::MathError)?;
            amounts.push_back(amount);
        }
        Ok(amounts)
    }

    pub fn quantity_required(&self, token: &Address, supply: i128) -> ReserveResult<i128> {
        self.weight_of(token)
            .fixed_mul_floor(supply, WEIGHT_SCALE)
            .ok_or(ErrorCode::MathError)
    }

    /// Per token over the union of both baskets, this basket's requirement at
    /// `supply` minus `other`'s. Positive entries are owed to the vault when
    /// moving from `other` to `self`; negative entries are released by it.
    pub fn delta_quantities_required(
        &self,
        env: &Env,
        supply: i128,
        other: &Basket,
    ) -> ReserveResult<Map<Address, i128>> {
        let mut deltas: Map<Address, i128> = Map::new(env);

        for token in self.tokens.iter() {
            let delta = self
                .quantity_required(&token, supply)?
                .safe_sub(other.quantity_required(&token, supply)?, env)?;
            deltas.set(token, delta);
        }
        for token in other.tokens.iter() {
            if !self.has(&token) {
                let delta = 0i128.safe_sub(other.quantity_required(&token, supply)?, env)?;
                deltas.set(token, delta);
            }
        }

        Ok(deltas)
    }
}
