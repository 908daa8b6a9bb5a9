use soroban_sdk::{contracttype, Address, BytesN, String};

/// Feeds may not declare more precision than an 18-decimal ERC-20 style price.
pub const MAX_FEED_DECIMALS: u32 = 18;

/// The all-zero ed25519 account, used as the null address.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FeedMapping {
    pub feed_id: String,
    pub query_id: BytesN<32>,
    pub decimals: u32,
    /// Oldest acceptable report age, in seconds.
    pub max_staleness: u64,
    /// Seconds a report must age before it is considered final.
    pub dispute_buffer: u64,
}

/// A raw report as exposed by the oracle store. `decimals` is the native
/// precision the reporter used for `value`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct OracleReport {
    pub value: i128,
    pub decimals: u32,
    pub reported_at: u64,
    pub disputed: bool,
    pub reporter_stake: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct NormalizedAnswer {
    pub value: i128,
    pub updated_at: u64,
    pub answered_in_round: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FeeConfig {
    pub fee_amount: i128,
    pub fee_receiver: Address,
    pub fee_token: Address,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Paused,
    FeeConfig,
    Oracle,
    FeedIds,
    Feed(String),
}
