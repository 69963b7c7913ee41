use soroban_sdk::{Address, Env};

use crate::errors::ContractError;
use crate::types::{DataKey, GameConfig, Player, PoolTotals};

const INSTANCE_TTL_THRESHOLD: u32 = 100;
const INSTANCE_TTL_EXTEND: u32 = 500;
const PERSISTENT_TTL_THRESHOLD: u32 = 100;
const PERSISTENT_TTL_EXTEND: u32 = 1000;

// --- Admin ---

pub fn get_admin(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ContractError::NoAdmin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    extend_instance_ttl(env);
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn remove_admin(env: &Env) {
    env.storage().instance().remove(&DataKey::Admin);
    env.storage().instance().remove(&DataKey::RenounceUnlocked);
    extend_instance_ttl(env);
}

pub fn is_renounce_unlocked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::RenounceUnlocked)
        .unwrap_or(false)
}

pub fn set_renounce_unlocked(env: &Env, unlocked: bool) {
    env.storage()
        .instance()
        .set(&DataKey::RenounceUnlocked, &unlocked);
    extend_instance_ttl(env);
}

// --- Config ---

pub fn get_config(env: &Env) -> GameConfig {
    // Written by the constructor before any other entry point can run.
    env.storage().instance().get(&DataKey::Config).unwrap()
}

pub fn set_config(env: &Env, config: &GameConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// --- Pause ---

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
    extend_instance_ttl(env);
}

// --- Totals ---

pub fn get_totals(env: &Env) -> PoolTotals {
    env.storage()
        .instance()
        .get(&DataKey::Totals)
        .unwrap_or_default()
}

pub fn set_totals(env: &Env, totals: &PoolTotals) {
    env.storage().instance().set(&DataKey::Totals, totals);
    extend_instance_ttl(env);
}

// --- Player ---

pub fn get_player(env: &Env, player: &Address) -> Option<Player> {
    let key = DataKey::Player(player.clone());
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(env, &key);
    }
    result
}

pub fn set_player(env: &Env, player: &Address, record: &Player) {
    let key = DataKey::Player(player.clone());
    env.storage().persistent().set(&key, record);
    extend_persistent_ttl(env, &key);
}

/// Only used to unwind a join whose reserve deposit failed.
pub fn remove_player(env: &Env, player: &Address) {
    let key = DataKey::Player(player.clone());
    env.storage().persistent().remove(&key);
}

// --- TTL Management ---

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}
