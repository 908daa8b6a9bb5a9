use soroban_sdk::{Address, Env, String};

use crate::errors::Error;
use crate::storage;
use crate::types::ZERO_ACCOUNT;

pub fn zero_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, ZERO_ACCOUNT))
}

pub fn require_non_zero(env: &Env, addr: &Address) -> Result<(), Error> {
    if *addr == zero_address(env) {
        return Err(Error::ZeroAddress);
    }
    Ok(())
}

/// Authenticates `caller` and checks it is the current owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<Address, Error> {
    caller.require_auth();
    let owner = storage::get_owner(env)?;
    if owner != *caller {
        return Err(Error::Unauthorized);
    }
    storage::extend_instance(env);
    Ok(owner)
}

pub fn require_not_paused(env: &Env) -> Result<(), Error> {
    if storage::is_paused(env) {
        return Err(Error::Paused);
    }
    Ok(())
}

pub fn transfer_ownership(env: &Env, caller: &Address, new_owner: &Address) -> Result<(), Error> {
    let previous = require_owner(env, caller)?;
    require_non_zero(env, new_owner)?;
    storage::set_owner(env, new_owner);
    crate::events::ownership_transferred(env, &previous, new_owner);
    Ok(())
}

pub fn set_paused(env: &Env, caller: &Address, paused: bool) -> Result<(), Error> {
    let owner = require_owner(env, caller)?;
    storage::set_paused(env, paused);
    if paused {
        crate::events::paused(env, &owner);
    } else {
        crate::events::unpaused(env, &owner);
    }
    Ok(())
}
