/// Fixed-point base for basket weights: one basket unit worth of backing
/// per unit of reserve asset is `1 << 36`.
pub const WEIGHT_SCALE: i128 = 1 << 36;

/// Basis-point base used for seigniorage.
pub const BPS_FACTOR: i128 = 10_000;

/// Upper bound on the seigniorage fee, in basis points.
pub const MAX_SEIGNIORAGE_BPS: i64 = 1_000;

/// Largest number of tokens a basket may hold.
pub const MAX_BASKET_SIZE: u32 = 100;

pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Default dwell time between proposal acceptance and execution.
pub const DEFAULT_PROPOSAL_DELAY: u64 = SECONDS_PER_DAY;

pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
