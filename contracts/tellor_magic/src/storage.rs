use soroban_sdk::{Address, Env, String, Vec};

use crate::errors::Error;
use crate::types::{DataKey, FeeConfig, FeedMapping};

/// Ledgers in a day at a ~5 second close time.
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

const FEED_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const FEED_TTL_THRESHOLD: u32 = FEED_TTL_AMOUNT - 7 * DAY_IN_LEDGERS;

/// Keeps the singleton state (owner, fees, oracle, feed index) live.
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

fn extend_feed(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, FEED_TTL_THRESHOLD, FEED_TTL_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn get_fee_config(env: &Env) -> Result<FeeConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::FeeConfig)
        .ok_or(Error::NotInitialized)
}

pub fn set_fee_config(env: &Env, cfg: &FeeConfig) {
    env.storage().instance().set(&DataKey::FeeConfig, cfg);
}

pub fn get_oracle(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Oracle)
        .ok_or(Error::NotInitialized)
}

pub fn set_oracle(env: &Env, oracle: &Address) {
    env.storage().instance().set(&DataKey::Oracle, oracle);
}

pub fn get_feed(env: &Env, feed_id: &String) -> Option<FeedMapping> {
    let key = DataKey::Feed(feed_id.clone());
    let feed = env.storage().persistent().get(&key);
    if feed.is_some() {
        extend_feed(env, &key);
    }
    feed
}

pub fn set_feed(env: &Env, feed: &FeedMapping) {
    let key = DataKey::Feed(feed.feed_id.clone());
    env.storage().persistent().set(&key, feed);
    extend_feed(env, &key);
}

pub fn get_feed_ids(env: &Env) -> Vec<String> {
    env.storage()
        .instance()
        .get(&DataKey::FeedIds)
        .unwrap_or(Vec::new(env))
}

pub fn set_feed_ids(env: &Env, ids: &Vec<String>) {
    env.storage().instance().set(&DataKey::FeedIds, ids);
}
