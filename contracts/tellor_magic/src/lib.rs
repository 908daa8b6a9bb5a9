#![no_std]

mod access;
pub mod contract;
mod errors;
mod events;
mod fee;
pub mod oracle;
mod registry;
mod storage;
mod types;
pub mod validator;


pub use contract::{TellorMagic, TellorMagicClient};
pub use errors::Error;
pub use oracle::{TellorOracle, TellorOracleClient};
pub use types::{FeeConfig, FeedMapping, NormalizedAnswer, OracleReport, MAX_FEED_DECIMALS, ZERO_ACCOUNT};
