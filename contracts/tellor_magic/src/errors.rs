use soroban_sdk::contracterror;

/// Failure taxonomy of the adapter. Every variant aborts the invocation and
/// rolls back whatever it touched, including fee transfers.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    UnknownFeed = 1,
    InvalidDecimals = 2,
    NoData = 3,
    StaleData = 4,
    DisputedData = 5,
    PendingDispute = 6,
    RoundNotFound = 7,
    InsufficientFee = 8,
    Unauthorized = 9,
    ZeroAddress = 10,
    Paused = 11,
    AlreadyInitialized = 12,
    NotInitialized = 13,
    InvalidFeedId = 14,
    InvalidQueryId = 15,
    InvalidWindow = 16,
    InvalidFee = 17,
    ScalingOverflow = 18,
}
