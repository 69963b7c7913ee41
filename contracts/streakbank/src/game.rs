use soroban_sdk::{log, symbol_short, Address, Env};

use crate::accountant;
use crate::errors::ContractError;
use crate::ledger;
use crate::reserve::ReserveGateway;
use crate::segment;
use crate::storage;
use crate::types::{Player, PoolTotals, WithdrawalShares};

/// Prior player record and pool totals, captured before a staged mutation.
///
/// Ledger and accounting writes land in storage before any external call is
/// made. If that call fails, `restore` puts both back as they were.
struct Checkpoint {
    player: Address,
    record: Option<Player>,
    totals: PoolTotals,
}

impl Checkpoint {
    fn begin(env: &Env, player: &Address) -> Self {
        Checkpoint {
            player: player.clone(),
            record: storage::get_player(env, player),
            totals: storage::get_totals(env),
        }
    }

    fn stage(&self, env: &Env, record: &Player, totals: &PoolTotals) {
        storage::set_player(env, &self.player, record);
        storage::set_totals(env, totals);
    }

    fn restore(self, env: &Env) {
        match &self.record {
            Some(record) => storage::set_player(env, &self.player, record),
            None => storage::remove_player(env, &self.player),
        }
        storage::set_totals(env, &self.totals);
    }

    /// Runs the external step, keeping the staged state only if it succeeds.
    fn commit_with<T>(
        self,
        env: &Env,
        external: impl FnOnce() -> Result<T, ContractError>,
    ) -> Result<T, ContractError> {
        match external() {
            Ok(value) => Ok(value),
            Err(err) => {
                self.restore(env);
                Err(err)
            }
        }
    }
}

fn require_not_paused(env: &Env) -> Result<(), ContractError> {
    if storage::is_paused(env) {
        return Err(ContractError::Paused);
    }
    Ok(())
}

pub fn get_current_segment(env: &Env) -> u64 {
    let config = storage::get_config(env);
    segment::current_segment(
        config.created_at,
        config.segment_length,
        env.ledger().timestamp(),
    )
}

pub fn join_game(env: &Env, player: Address, amount: i128) -> Result<(), ContractError> {
    require_not_paused(env)?;
    player.require_auth();

    let config = storage::get_config(env);
    if amount != config.segment_payment {
        return Err(ContractError::InvalidAmount);
    }

    let current_segment = get_current_segment(env);
    let checkpoint = Checkpoint::begin(env, &player);

    let record = ledger::join(checkpoint.record.as_ref(), amount, current_segment)?;
    let mut totals = checkpoint.totals.clone();
    accountant::on_join(&mut totals, amount);

    if current_segment > 0 {
        log!(env, "late join counted as segment 0", player, current_segment);
    }

    checkpoint.stage(env, &record, &totals);
    let gateway = ReserveGateway::new(env, &config);
    checkpoint.commit_with(env, || gateway.deposit(&player, amount))?;

    env.events()
        .publish((symbol_short!("joined"),), (player, amount));

    Ok(())
}

pub fn make_deposit(env: &Env, player: Address) -> Result<(), ContractError> {
    require_not_paused(env)?;
    player.require_auth();

    let config = storage::get_config(env);
    let current_segment = get_current_segment(env);
    let checkpoint = Checkpoint::begin(env, &player);

    let record = ledger::record_deposit(
        checkpoint.record.as_ref(),
        config.segment_payment,
        current_segment,
    )?;
    let mut totals = checkpoint.totals.clone();
    accountant::on_deposit(&mut totals, config.segment_payment);

    checkpoint.stage(env, &record, &totals);
    let gateway = ReserveGateway::new(env, &config);
    checkpoint.commit_with(env, || gateway.deposit(&player, config.segment_payment))?;

    log!(env, "deposit recorded", player, current_segment, record.amount_paid);

    env.events().publish(
        (symbol_short!("deposit"),),
        (player, current_segment, config.segment_payment),
    );

    Ok(())
}

pub fn withdraw(env: &Env, player: Address) -> Result<WithdrawalShares, ContractError> {
    require_not_paused(env)?;
    player.require_auth();

    let config = storage::get_config(env);
    let current_segment = get_current_segment(env);
    let checkpoint = Checkpoint::begin(env, &player);

    let record = ledger::mark_withdrawn(checkpoint.record.as_ref())?;

    let gateway = ReserveGateway::new(env, &config);
    let custodied = gateway.custodied_balance()?;
    let incentive_balance = gateway.incentive_balance()?;

    let mut totals = checkpoint.totals.clone();
    let shares = accountant::compute_withdrawal_shares(
        &record,
        custodied,
        totals.total_game_principal,
        config.min_segment_for_reward,
        incentive_balance,
        totals.active_players_count,
    );
    accountant::on_withdraw(&mut totals, record.amount_paid);

    log!(
        env,
        "withdrawal shares",
        player,
        current_segment,
        shares.principal,
        shares.yield_share,
        shares.incentive_share
    );

    checkpoint.stage(env, &record, &totals);
    checkpoint.commit_with(env, || {
        gateway.claim_incentive(shares.incentive_share, &player)?;
        gateway.redeem(shares.principal + shares.yield_share, &player)
    })?;

    env.events().publish(
        (symbol_short!("withdraw"),),
        (player, shares.yield_share, shares.incentive_share),
    );

    Ok(shares)
}

pub fn get_player(env: &Env, player: Address) -> Result<Player, ContractError> {
    storage::get_player(env, &player).ok_or(ContractError::NotAPlayer)
}
