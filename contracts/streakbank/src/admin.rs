use soroban_sdk::{symbol_short, Address, Env};

use crate::errors::ContractError;
use crate::reserve::ReserveGateway;
use crate::storage;

fn require_admin(env: &Env, admin: &Address) -> Result<(), ContractError> {
    admin.require_auth();

    if *admin != storage::get_admin(env)? {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

pub fn pause(env: &Env, admin: Address) -> Result<(), ContractError> {
    require_admin(env, &admin)?;

    if storage::is_paused(env) {
        return Err(ContractError::AlreadyPaused);
    }

    storage::set_paused(env, true);

    env.events().publish((symbol_short!("paused"),), admin);

    Ok(())
}

pub fn unpause(env: &Env, admin: Address) -> Result<(), ContractError> {
    require_admin(env, &admin)?;

    if !storage::is_paused(env) {
        return Err(ContractError::NotPaused);
    }

    storage::set_paused(env, false);

    env.events().publish((symbol_short!("unpaused"),), admin);

    Ok(())
}

pub fn set_admin(
    env: &Env,
    current_admin: Address,
    new_admin: Address,
) -> Result<(), ContractError> {
    require_admin(env, &current_admin)?;

    storage::set_admin(env, &new_admin);
    // A pending renounce does not carry over to the new admin.
    storage::set_renounce_unlocked(env, false);

    env.events()
        .publish((symbol_short!("adm_chng"),), (current_admin, new_admin));

    Ok(())
}

/// First step of giving up the admin role for good.
pub fn unlock_renounce_admin(env: &Env, admin: Address) -> Result<(), ContractError> {
    require_admin(env, &admin)?;

    storage::set_renounce_unlocked(env, true);

    Ok(())
}

/// Removes the admin. The pause flag is frozen at its current value.
pub fn renounce_admin(env: &Env, admin: Address) -> Result<(), ContractError> {
    require_admin(env, &admin)?;

    if !storage::is_renounce_unlocked(env) {
        return Err(ContractError::RenounceLocked);
    }

    storage::remove_admin(env);

    env.events()
        .publish((symbol_short!("adm_renc"),), admin);

    Ok(())
}

/// Sends what is left in the reserve and the incentive source to `to` once
/// every player has withdrawn. Returns the reserve and incentive amounts.
///
/// Withheld yield from players below the reward threshold and rounding
/// residue otherwise stay in the reserve forever.
pub fn sweep(env: &Env, admin: Address, to: Address) -> Result<(i128, i128), ContractError> {
    require_admin(env, &admin)?;

    let totals = storage::get_totals(env);
    if totals.active_players_count > 0 || totals.total_game_principal > 0 {
        return Err(ContractError::PlayersRemaining);
    }

    let gateway = ReserveGateway::new(env, &storage::get_config(env));
    let leftover = gateway.custodied_balance()?;
    let incentive = gateway.incentive_balance()?;

    gateway.redeem(leftover, &to)?;
    gateway.claim_incentive(incentive, &to)?;

    env.events()
        .publish((symbol_short!("swept"),), (to, leftover, incentive));

    Ok((leftover, incentive))
}
