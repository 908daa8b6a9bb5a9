use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, BytesN, Env, String, Vec};

use crate::access;
use crate::errors::Error;
use crate::events;
use crate::fee;
use crate::oracle::TellorOracleClient;
use crate::registry;
use crate::storage;
use crate::types::{FeeConfig, FeedMapping, NormalizedAnswer};
use crate::validator;

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Chainlink-compatible reads over a dispute-based oracle"
);

#[contract]
pub struct TellorMagic;

#[contractimpl]
impl TellorMagic {
    /// One-shot setup. The first caller becomes owner, so deploy the
    /// contract and call `initialize` in the same transaction.
    pub fn initialize(
        env: Env,
        owner: Address,
        fee_receiver: Address,
        fee_amount: i128,
        fee_token: Address,
        oracle: Address,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        access::require_non_zero(&env, &owner)?;
        access::require_non_zero(&env, &fee_receiver)?;
        if fee_amount < 0 {
            return Err(Error::InvalidFee);
        }

        storage::set_owner(&env, &owner);
        storage::set_paused(&env, false);
        storage::set_fee_config(
            &env,
            &FeeConfig {
                fee_amount,
                fee_receiver,
                fee_token,
            },
        );
        storage::set_oracle(&env, &oracle);
        storage::set_feed_ids(&env, &Vec::new(&env));
        storage::extend_instance(&env);

        log!(&env, "initialized", owner, fee_amount);
        Ok(())
    }

    // Reads

    /// Latest final, fresh and undisputed answer for `feed_id`, charged to
    /// `payer`. `max_fee` is the most the payer is willing to pay; only the
    /// configured fee is taken.
    pub fn latest_answer(
        env: Env,
        feed_id: String,
        payer: Address,
        max_fee: i128,
    ) -> Result<NormalizedAnswer, Error> {
        let cfg = Self::read_preflight(&env, max_fee)?;
        let feed = registry::resolve(&env, &feed_id)?;

        let oracle = TellorOracleClient::new(&env, &storage::get_oracle(&env)?);
        let count = oracle.get_new_value_count(&feed.query_id);
        let report = match count {
            0 => None,
            n => oracle.get_report_by_index(&feed.query_id, &(n - 1)),
        };

        let answer = validator::validate(&env, &feed, report, count as u64)?;
        fee::collect(&env, &cfg, &feed_id, &payer, max_fee)?;
        Ok(answer)
    }

    /// Answer for a specific round. Round `n` is the oracle's `n`-th report
    /// for the feed's query (1-based) and passes the same checks as the
    /// latest answer.
    pub fn get_round_data(
        env: Env,
        feed_id: String,
        round_id: u64,
        payer: Address,
        max_fee: i128,
    ) -> Result<NormalizedAnswer, Error> {
        let cfg = Self::read_preflight(&env, max_fee)?;
        let feed = registry::resolve(&env, &feed_id)?;

        let oracle = TellorOracleClient::new(&env, &storage::get_oracle(&env)?);
        let count = oracle.get_new_value_count(&feed.query_id) as u64;
        if round_id == 0 || round_id > count {
            return Err(Error::RoundNotFound);
        }
        let index = u32::try_from(round_id - 1).map_err(|_| Error::RoundNotFound)?;
        let report = oracle.get_report_by_index(&feed.query_id, &index);

        let answer = validator::validate(&env, &feed, report, round_id)?;
        fee::collect(&env, &cfg, &feed_id, &payer, max_fee)?;
        Ok(answer)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        storage::get_owner(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    pub fn resolve(env: Env, feed_id: String) -> Result<FeedMapping, Error> {
        registry::resolve(&env, &feed_id)
    }

    pub fn decimals(env: Env, feed_id: String) -> Result<u32, Error> {
        registry::resolve(&env, &feed_id).map(|feed| feed.decimals)
    }

    pub fn feed_ids(env: Env) -> Vec<String> {
        storage::get_feed_ids(&env)
    }

    pub fn fee_config(env: Env) -> Result<FeeConfig, Error> {
        storage::get_fee_config(&env)
    }

    pub fn oracle(env: Env) -> Result<Address, Error> {
        storage::get_oracle(&env)
    }

    // Admin

    pub fn register(
        env: Env,
        caller: Address,
        feed_id: String,
        query_id: BytesN<32>,
        decimals: u32,
        max_staleness: u64,
        dispute_buffer: u64,
    ) -> Result<(), Error> {
        access::require_owner(&env, &caller)?;
        registry::register(
            &env,
            FeedMapping {
                feed_id,
                query_id,
                decimals,
                max_staleness,
                dispute_buffer,
            },
        )
    }

    pub fn set_fee(
        env: Env,
        caller: Address,
        fee_amount: i128,
        fee_receiver: Address,
    ) -> Result<(), Error> {
        access::require_owner(&env, &caller)?;
        if fee_amount < 0 {
            return Err(Error::InvalidFee);
        }
        access::require_non_zero(&env, &fee_receiver)?;

        let mut cfg = storage::get_fee_config(&env)?;
        cfg.fee_amount = fee_amount;
        cfg.fee_receiver = fee_receiver;
        storage::set_fee_config(&env, &cfg);

        events::fee_updated(&env, cfg.fee_amount, &cfg.fee_receiver);
        Ok(())
    }

    pub fn set_fee_token(env: Env, caller: Address, fee_token: Address) -> Result<(), Error> {
        access::require_owner(&env, &caller)?;
        let mut cfg = storage::get_fee_config(&env)?;
        cfg.fee_token = fee_token;
        storage::set_fee_config(&env, &cfg);

        events::fee_token_updated(&env, &cfg.fee_token);
        Ok(())
    }

    pub fn set_oracle(env: Env, caller: Address, oracle: Address) -> Result<(), Error> {
        access::require_owner(&env, &caller)?;
        storage::set_oracle(&env, &oracle);
        events::oracle_updated(&env, &oracle);
        Ok(())
    }

    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        access::set_paused(&env, &caller, true)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        access::set_paused(&env, &caller, false)
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        access::transfer_ownership(&env, &caller, &new_owner)
    }
}

impl TellorMagic {
    fn read_preflight(env: &Env, max_fee: i128) -> Result<FeeConfig, Error> {
        let cfg = storage::get_fee_config(env)?;
        storage::extend_instance(env);
        access::require_not_paused(env)?;
        fee::check(&cfg, max_fee)?;
        Ok(cfg)
    }
}
