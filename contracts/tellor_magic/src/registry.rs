//! Feed registry: human-readable feed ids mapped to oracle query ids and the
//! per-feed read policy.

use soroban_sdk::{log, BytesN, Env, String};

use crate::errors::Error;
use crate::events;
use crate::storage;
use crate::types::{FeedMapping, MAX_FEED_DECIMALS};

pub fn resolve(env: &Env, feed_id: &String) -> Result<FeedMapping, Error> {
    storage::get_feed(env, feed_id).ok_or(Error::UnknownFeed)
}

pub fn validate(env: &Env, feed: &FeedMapping) -> Result<(), Error> {
    if feed.feed_id.len() == 0 {
        return Err(Error::InvalidFeedId);
    }
    if feed.query_id == BytesN::from_array(env, &[0u8; 32]) {
        return Err(Error::InvalidQueryId);
    }
    if feed.decimals > MAX_FEED_DECIMALS {
        return Err(Error::InvalidDecimals);
    }
    // A buffer at or beyond the staleness bound leaves no window in which a
    // report is both final and fresh.
    if feed.dispute_buffer == 0 || feed.dispute_buffer >= feed.max_staleness {
        return Err(Error::InvalidWindow);
    }
    Ok(())
}

/// Inserts or overwrites a feed. Caller authorization is checked by the
/// contract entry point.
pub fn register(env: &Env, feed: FeedMapping) -> Result<(), Error> {
    validate(env, &feed)?;

    match storage::get_feed(env, &feed.feed_id) {
        Some(previous) => {
            storage::set_feed(env, &feed);
            log!(
                env,
                "feed remapped",
                feed.feed_id.clone(),
                previous.query_id.clone(),
                feed.query_id.clone()
            );
            events::feed_updated(env, &previous.query_id, &feed);
        }
        None => {
            let mut ids = storage::get_feed_ids(env);
            ids.push_back(feed.feed_id.clone());
            storage::set_feed_ids(env, &ids);
            storage::set_feed(env, &feed);
            log!(env, "feed registered", feed.feed_id.clone(), feed.query_id.clone());
            events::feed_registered(env, &feed);
        }
    }
    Ok(())
}
