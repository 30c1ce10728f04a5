use soroban_sdk::contracterror;

/// Errors surfaced by the swap contract
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SwapError {
    // Authorization errors
    Unauthorized = 1,

    // Configuration errors
    NotInitialized = 2,
    PriceNotConfigured = 3,
    InvalidPrice = 4,
    InvalidKey = 5,

    // Verification errors
    InvalidVerificationData = 6,

    // Funds errors
    InsufficientFunds = 7,
    InsufficientAllowance = 8,

    // Argument errors
    InvalidAmount = 9,
    InvalidPoints = 10,
    AmountOverflow = 11,
}
