#![no_std]

use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env};

mod accountant;
mod admin;
mod errors;
mod game;
mod ledger;
mod reserve;
mod segment;
mod storage;
mod types;

pub use errors::ContractError;
pub use reserve::{IncentiveClient, IncentiveSource, ReserveClient, YieldReserve};
pub use types::*;

#[contract]
pub struct StreakBankContract;

#[contractimpl]
impl StreakBankContract {
    /// Initialize the game. Segment 0 (the joining window) starts now.
    pub fn __constructor(
        env: Env,
        admin: Address,
        token: Address,
        reserve: Address,
        incentive: Option<Address>,
        segment_payment: i128,
        segment_length: u64,
        min_segment_for_reward: u64,
    ) {
        if storage::has_admin(&env) {
            panic!("already initialized");
        }
        if segment_payment <= 0 || segment_length == 0 || min_segment_for_reward < 1 {
            panic_with_error!(&env, ContractError::InvalidConfig);
        }

        storage::set_admin(&env, &admin);
        storage::set_config(
            &env,
            &GameConfig {
                token,
                reserve,
                incentive,
                segment_payment,
                segment_length,
                min_segment_for_reward,
                created_at: env.ledger().timestamp(),
            },
        );
        storage::set_totals(&env, &PoolTotals::default());
        storage::set_paused(&env, false);
    }

    // ─── Game ───────────────────────────────────────────────────────

    /// Join with the first segment payment, which must equal the configured one.
    pub fn join_game(env: Env, player: Address, amount: i128) -> Result<(), ContractError> {
        game::join_game(&env, player, amount)
    }

    /// Pay the current segment. Fails once a segment has been skipped.
    pub fn make_deposit(env: Env, player: Address) -> Result<(), ContractError> {
        game::make_deposit(&env, player)
    }

    /// Leave the game with principal, plus yield and incentives if eligible.
    pub fn withdraw(env: Env, player: Address) -> Result<WithdrawalShares, ContractError> {
        game::withdraw(&env, player)
    }

    pub fn get_current_segment(env: Env) -> u64 {
        game::get_current_segment(&env)
    }

    // ─── Queries ────────────────────────────────────────────────────

    pub fn get_player(env: Env, player: Address) -> Result<Player, ContractError> {
        game::get_player(&env, player)
    }

    pub fn total_game_principal(env: Env) -> i128 {
        storage::get_totals(&env).total_game_principal
    }

    pub fn active_players_count(env: Env) -> u32 {
        storage::get_totals(&env).active_players_count
    }

    pub fn get_config(env: Env) -> GameConfig {
        storage::get_config(&env)
    }

    /// Value the reserve currently holds for the pool, yield included.
    pub fn custodied_balance(env: Env) -> Result<i128, ContractError> {
        reserve::ReserveGateway::new(&env, &storage::get_config(&env)).custodied_balance()
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    // ─── Admin ──────────────────────────────────────────────────────

    /// Stop joins, deposits and withdrawals.
    pub fn pause(env: Env, admin: Address) -> Result<(), ContractError> {
        admin::pause(&env, admin)
    }

    pub fn unpause(env: Env, admin: Address) -> Result<(), ContractError> {
        admin::unpause(&env, admin)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        storage::get_admin(&env)
    }

    /// Transfer the admin role.
    pub fn set_admin(
        env: Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        admin::set_admin(&env, current_admin, new_admin)
    }

    /// Allow a later `renounce_admin` call.
    pub fn unlock_renounce_admin(env: Env, admin: Address) -> Result<(), ContractError> {
        admin::unlock_renounce_admin(&env, admin)
    }

    /// Send funds no player can claim to `to` once every player has withdrawn.
    pub fn sweep(env: Env, admin: Address, to: Address) -> Result<(i128, i128), ContractError> {
        admin::sweep(&env, admin, to)
    }

    /// Drop the admin role permanently. Requires `unlock_renounce_admin` first.
    pub fn renounce_admin(env: Env, admin: Address) -> Result<(), ContractError> {
        admin::renounce_admin(&env, admin)
    }
}
