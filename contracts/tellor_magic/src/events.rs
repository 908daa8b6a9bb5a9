use soroban_sdk::{symbol_short, Address, BytesN, Env, String};

use crate::types::FeedMapping;

pub fn feed_registered(env: &Env, feed: &FeedMapping) {
    env.events().publish(
        (symbol_short!("feed_new"), feed.feed_id.clone()),
        (
            feed.query_id.clone(),
            feed.decimals,
            feed.max_staleness,
            feed.dispute_buffer,
        ),
    );
}

/// Published when an existing feed is overwritten, so consumers can notice
/// a feed being re-pointed at a different query.
pub fn feed_updated(env: &Env, previous_query_id: &BytesN<32>, feed: &FeedMapping) {
    env.events().publish(
        (symbol_short!("feed_upd"), feed.feed_id.clone()),
        (
            previous_query_id.clone(),
            feed.query_id.clone(),
            feed.decimals,
            feed.max_staleness,
            feed.dispute_buffer,
        ),
    );
}

pub fn ownership_transferred(env: &Env, previous: &Address, new_owner: &Address) {
    env.events().publish(
        (symbol_short!("own_xfer"),),
        (previous.clone(), new_owner.clone()),
    );
}

pub fn paused(env: &Env, by: &Address) {
    env.events().publish((symbol_short!("paused"),), by.clone());
}

pub fn unpaused(env: &Env, by: &Address) {
    env.events().publish((symbol_short!("unpaused"),), by.clone());
}

pub fn fee_updated(env: &Env, fee_amount: i128, fee_receiver: &Address) {
    env.events().publish(
        (symbol_short!("fee_upd"),),
        (fee_amount, fee_receiver.clone()),
    );
}

pub fn fee_token_updated(env: &Env, fee_token: &Address) {
    env.events()
        .publish((symbol_short!("fee_tok"),), fee_token.clone());
}

pub fn oracle_updated(env: &Env, oracle: &Address) {
    env.events().publish((symbol_short!("oracle"),), oracle.clone());
}

pub fn fee_paid(env: &Env, feed_id: &String, payer: &Address, fee_amount: i128) {
    env.events().publish(
        (symbol_short!("fee_paid"), feed_id.clone()),
        (payer.clone(), fee_amount),
    );
}
