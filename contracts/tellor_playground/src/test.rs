#![allow(clippy::unwrap_used)]

use crate::{Error, TellorPlayground, TellorPlaygroundClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, BytesN, Env,
};

fn setup(env: &Env) -> (TellorPlaygroundClient<'_>, Address) {
    env.mock_all_auths();
    let contract_id = env.register_contract(None, TellorPlayground);
    let client = TellorPlaygroundClient::new(env, &contract_id);
    (client, Address::generate(env))
}

#[test]
fn test_submissions_are_indexed_and_timestamped() {
    let env = Env::default();
    let (client, reporter) = setup(&env);
    let query_id = BytesN::from_array(&env, &[7u8; 32]);

    assert_eq!(client.get_new_value_count(&query_id), 0);
    assert!(client.get_report_by_index(&query_id, &0).is_none());

    env.ledger().with_mut(|l| l.timestamp = 1_000);
    let first = client.submit_value(&reporter, &query_id, &3_000_00000000i128, &8u32, &100i128);
    env.ledger().with_mut(|l| l.timestamp = 1_060);
    let second = client.submit_value(&reporter, &query_id, &3_010_00000000i128, &8u32, &100i128);

    assert_eq!(first, 0);
    assert_eq!(second, 1);
    assert_eq!(client.get_new_value_count(&query_id), 2);

    let latest = client.get_report_by_index(&query_id, &1).unwrap();
    assert_eq!(latest.value, 3_010_00000000);
    assert_eq!(latest.decimals, 8);
    assert_eq!(latest.reported_at, 1_060);
    assert!(!latest.disputed);
    assert_eq!(latest.reporter_stake, 100);
    assert_eq!(client.get_reporter_by_index(&query_id, &0), Some(reporter));
}

#[test]
fn test_query_ids_are_independent() {
    let env = Env::default();
    let (client, reporter) = setup(&env);
    let eth = BytesN::from_array(&env, &[1u8; 32]);
    let btc = BytesN::from_array(&env, &[2u8; 32]);

    client.submit_value(&reporter, &eth, &1i128, &18u32, &10i128);

    assert_eq!(client.get_new_value_count(&eth), 1);
    assert_eq!(client.get_new_value_count(&btc), 0);
}

#[test]
fn test_dispute_flags_report_once() {
    let env = Env::default();
    let (client, reporter) = setup(&env);
    let disputer = Address::generate(&env);
    let query_id = BytesN::from_array(&env, &[9u8; 32]);

    client.submit_value(&reporter, &query_id, &42i128, &0u32, &1i128);
    assert!(!client.is_in_dispute(&query_id, &0));

    client.begin_dispute(&disputer, &query_id, &0);
    assert!(client.is_in_dispute(&query_id, &0));
    assert!(client.get_report_by_index(&query_id, &0).unwrap().disputed);

    let again = client.try_begin_dispute(&disputer, &query_id, &0);
    assert_eq!(again, Err(Ok(Error::AlreadyDisputed)));

    let missing = client.try_begin_dispute(&disputer, &query_id, &5);
    assert_eq!(missing, Err(Ok(Error::ReportNotFound)));
}

#[test]
fn test_rejects_unstaked_or_overprecise_reports() {
    let env = Env::default();
    let (client, reporter) = setup(&env);
    let query_id = BytesN::from_array(&env, &[3u8; 32]);

    let unstaked = client.try_submit_value(&reporter, &query_id, &1i128, &8u32, &0i128);
    assert_eq!(unstaked, Err(Ok(Error::InvalidValue)));

    let overprecise = client.try_submit_value(&reporter, &query_id, &1i128, &39u32, &1i128);
    assert_eq!(overprecise, Err(Ok(Error::InvalidValue)));

    assert_eq!(client.get_new_value_count(&query_id), 0);
}

#[test]
fn test_reports_stay_readable_past_default_lifetime() {
    let env = Env::default();
    let (client, reporter) = setup(&env);
    let query_id = BytesN::from_array(&env, &[4u8; 32]);

    env.ledger().with_mut(|l| l.timestamp = 1_000);
    client.submit_value(&reporter, &query_id, &42i128, &8u32, &1i128);

    env.ledger().with_mut(|l| l.sequence_number += 50_000);
    assert_eq!(client.get_new_value_count(&query_id), 1);
    let report = client.get_report_by_index(&query_id, &0).unwrap();
    assert_eq!(report.value, 42);
    assert_eq!(report.reported_at, 1_000);
}
