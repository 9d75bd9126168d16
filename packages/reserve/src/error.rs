use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    // Validation
    AlreadyInitialized = 1,
    ArrayLengthMismatch = 2,
    EmptyBasket = 3,
    BasketTooLarge = 4,
    DuplicateToken = 5,
    InvalidWeight = 6,
    InvalidWeightSum = 7,
    InvalidBps = 8,
    AmountMustBePositive = 9,

    // Authorization
    NotAuthorized = 10,
    NotWhitelisted = 11,

    // State
    InvalidProposalState = 12,
    ProposalCooldownActive = 13,
    ProposalNotFound = 14,
    IssuancePaused = 15,
    InEmergency = 16,
    NotCollateralized = 17,

    // Arithmetic
    MathError = 18,
    InsufficientFunds = 19,
}

pub type ReserveResult<T> = Result<T, ErrorCode>;
