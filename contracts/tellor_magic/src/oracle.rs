use soroban_sdk::{contractclient, BytesN, Env};

use crate::types::OracleReport;

/// Read side of a Tellor-style oracle store. Reports for a query id are
/// append-only and addressed by index; the newest report has the highest
/// index.
#[contractclient(name = "TellorOracleClient")]
pub trait TellorOracle {
    fn get_new_value_count(env: Env, query_id: BytesN<32>) -> u32;

    fn get_report_by_index(env: Env, query_id: BytesN<32>, index: u32) -> Option<OracleReport>;
}
