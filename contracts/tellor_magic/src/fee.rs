use soroban_sdk::{log, token, Address, Env, String};

use crate::errors::Error;
use crate::events;
use crate::types::FeeConfig;

/// Fails early when the payer's offer cannot cover the configured fee.
pub fn check(cfg: &FeeConfig, max_fee: i128) -> Result<(), Error> {
    if cfg.fee_amount > 0 && max_fee < cfg.fee_amount {
        return Err(Error::InsufficientFee);
    }
    Ok(())
}

/// Moves exactly `fee_amount` from the payer to the fee receiver.
///
/// Must be the last step of a read: nothing in the adapter is written after
/// the token call returns. Anything the payer offered above the fee is never
/// pulled, so there is nothing to refund.
pub fn collect(
    env: &Env,
    cfg: &FeeConfig,
    feed_id: &String,
    payer: &Address,
    max_fee: i128,
) -> Result<(), Error> {
    check(cfg, max_fee)?;
    if cfg.fee_amount == 0 {
        return Ok(());
    }

    payer.require_auth();
    events::fee_paid(env, feed_id, payer, cfg.fee_amount);
    log!(env, "fee collected", payer.clone(), cfg.fee_amount);

    token::Client::new(env, &cfg.fee_token).transfer(payer, &cfg.fee_receiver, &cfg.fee_amount);
    Ok(())
}
