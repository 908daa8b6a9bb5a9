#![no_std]

//! Minimal Tellor-style report store.
//!
//! Reporters push values under a 32-byte query id; every submission is
//! appended at the current ledger timestamp and addressed by its index.
//! Anyone may flag a report as disputed. There is no staking, reward or
//! dispute resolution here; the store only records what was submitted and
//! whether it has been contested.

use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, log, symbol_short, Address,
    BytesN, Env,
};

#[cfg(test)]
mod test;

/// Highest native precision a report may declare; 10^38 is the largest power
/// of ten that fits in an i128.
pub const MAX_REPORT_DECIMALS: u32 = 38;

const DAY_IN_LEDGERS: u32 = 17_280;
const TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const TTL_THRESHOLD: u32 = TTL_AMOUNT - DAY_IN_LEDGERS;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InvalidValue = 1,
    ReportNotFound = 2,
    AlreadyDisputed = 3,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct OracleReport {
    pub value: i128,
    pub decimals: u32,
    pub reported_at: u64,
    pub disputed: bool,
    pub reporter_stake: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct StoredReport {
    pub reporter: Address,
    pub report: OracleReport,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Count(BytesN<32>),
    Report(BytesN<32>, u32),
}

contractmeta!(
    key = "Description",
    val = "Tellor-style report store with dispute flags"
);

#[contract]
pub struct TellorPlayground;

#[contractimpl]
impl TellorPlayground {
    /// Appends a report for `query_id` and returns its index.
    pub fn submit_value(
        env: Env,
        reporter: Address,
        query_id: BytesN<32>,
        value: i128,
        decimals: u32,
        stake: i128,
    ) -> Result<u32, Error> {
        reporter.require_auth();

        if stake <= 0 || decimals > MAX_REPORT_DECIMALS {
            return Err(Error::InvalidValue);
        }

        let index = Self::get_new_value_count(env.clone(), query_id.clone());
        let reported_at = env.ledger().timestamp();

        let stored = StoredReport {
            reporter: reporter.clone(),
            report: OracleReport {
                value,
                decimals,
                reported_at,
                disputed: false,
                reporter_stake: stake,
            },
        };

        let report_key = DataKey::Report(query_id.clone(), index);
        let count_key = DataKey::Count(query_id.clone());
        env.storage().persistent().set(&report_key, &stored);
        env.storage()
            .persistent()
            .set(&count_key, &index.saturating_add(1));
        extend(&env, &report_key);
        extend(&env, &count_key);

        log!(&env, "report submitted", query_id.clone(), index, value);
        env.events()
            .publish((symbol_short!("report"), query_id), (index, reporter, value));
        Ok(index)
    }

    pub fn begin_dispute(
        env: Env,
        disputer: Address,
        query_id: BytesN<32>,
        index: u32,
    ) -> Result<(), Error> {
        disputer.require_auth();

        let key = DataKey::Report(query_id.clone(), index);
        let mut stored: StoredReport = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(Error::ReportNotFound)?;

        if stored.report.disputed {
            return Err(Error::AlreadyDisputed);
        }

        stored.report.disputed = true;
        env.storage().persistent().set(&key, &stored);
        extend(&env, &key);

        env.events()
            .publish((symbol_short!("dispute"), query_id), (index, disputer));
        Ok(())
    }

    pub fn is_in_dispute(env: Env, query_id: BytesN<32>, index: u32) -> bool {
        Self::get_report_by_index(env, query_id, index)
            .map(|r| r.disputed)
            .unwrap_or(false)
    }

    pub fn get_new_value_count(env: Env, query_id: BytesN<32>) -> u32 {
        let key = DataKey::Count(query_id);
        match env.storage().persistent().get(&key) {
            Some(count) => {
                extend(&env, &key);
                count
            }
            None => 0,
        }
    }

    pub fn get_report_by_index(env: Env, query_id: BytesN<32>, index: u32) -> Option<OracleReport> {
        let key = DataKey::Report(query_id, index);
        let stored: Option<StoredReport> = env.storage().persistent().get(&key);
        if stored.is_some() {
            extend(&env, &key);
        }
        stored.map(|stored| stored.report)
    }

    pub fn get_reporter_by_index(env: Env, query_id: BytesN<32>, index: u32) -> Option<Address> {
        env.storage()
            .persistent()
            .get::<_, StoredReport>(&DataKey::Report(query_id, index))
            .map(|stored| stored.reporter)
    }
}

/// Keeps the store instance and a touched report entry live.
fn extend(env: &Env, key: &DataKey) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_AMOUNT);
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_AMOUNT);
}
