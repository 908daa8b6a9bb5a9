//! Decides whether a raw oracle report may be exposed as a price.
//!
//! Checks run in a fixed order so callers always see the same error for the
//! same report: missing, stale, disputed, then still inside the dispute
//! window. Only a report that clears all four is rescaled and returned.

use soroban_sdk::{log, Env};

use crate::errors::Error;
use crate::types::{FeedMapping, NormalizedAnswer, OracleReport};

pub fn validate(
    env: &Env,
    feed: &FeedMapping,
    report: Option<OracleReport>,
    round: u64,
) -> Result<NormalizedAnswer, Error> {
    let report = report.ok_or(Error::NoData)?;

    // Reports stamped ahead of the ledger clock are treated as brand new.
    let age = env.ledger().timestamp().saturating_sub(report.reported_at);

    if age > feed.max_staleness {
        log!(env, "stale report", feed.feed_id.clone(), age);
        return Err(Error::StaleData);
    }
    if report.disputed {
        log!(env, "disputed report", feed.feed_id.clone(), report.reported_at);
        return Err(Error::DisputedData);
    }
    if age < feed.dispute_buffer {
        log!(env, "report not final", feed.feed_id.clone(), age);
        return Err(Error::PendingDispute);
    }

    Ok(NormalizedAnswer {
        value: scale(report.value, report.decimals, feed.decimals)?,
        updated_at: report.reported_at,
        answered_in_round: round,
    })
}

/// Rescales `value` from `from` decimals to `to` decimals.
///
/// Scaling down rounds toward zero, for negative values too. Scaling up is
/// exact or fails with `ScalingOverflow`.
pub fn scale(value: i128, from: u32, to: u32) -> Result<i128, Error> {
    if from == to {
        return Ok(value);
    }
    if from > to {
        return match 10i128.checked_pow(from - to) {
            Some(factor) => Ok(value / factor),
            // The divisor exceeds every representable value.
            None => Ok(0),
        };
    }
    10i128
        .checked_pow(to - from)
        .and_then(|factor| value.checked_mul(factor))
        .ok_or(Error::ScalingOverflow)
}
