use soroban_sdk::{contractclient, log, token, Address, Env};

use crate::errors::ContractError;
use crate::types::GameConfig;

/// Yield-bearing reserve that custodies the pool's funds.
///
/// `deposit` pulls `amount` of the pool token from `from`, which must have
/// approved the reserve beforehand. `redeem` releases `amount` of `owner`'s
/// position to `to`.
#[contractclient(name = "ReserveClient")]
pub trait YieldReserve {
    fn deposit(env: Env, from: Address, amount: i128);
    fn redeem(env: Env, owner: Address, amount: i128, to: Address);
    fn balance_of(env: Env, account: Address) -> i128;
}

/// Optional reward program paying incentives on top of the reserve yield.
#[contractclient(name = "IncentiveClient")]
pub trait IncentiveSource {
    fn balance_available(env: Env, account: Address) -> i128;
    fn claim(env: Env, account: Address, amount: i128, to: Address);
}

/// Moves value between players, the pool and its external reserve.
///
/// Every method either completes or leaves balances untouched and returns
/// `ReserveUnavailable`.
pub struct ReserveGateway<'a> {
    env: &'a Env,
    pool: Address,
    reserve_address: Address,
    token: token::Client<'a>,
    reserve: ReserveClient<'a>,
    incentive: Option<IncentiveClient<'a>>,
}

impl<'a> ReserveGateway<'a> {
    pub fn new(env: &'a Env, config: &GameConfig) -> Self {
        ReserveGateway {
            env,
            pool: env.current_contract_address(),
            reserve_address: config.reserve.clone(),
            token: token::Client::new(env, &config.token),
            reserve: ReserveClient::new(env, &config.reserve),
            incentive: config
                .incentive
                .as_ref()
                .map(|address| IncentiveClient::new(env, address)),
        }
    }

    /// Collects `amount` from `from` and places it into the reserve.
    pub fn deposit(&self, from: &Address, amount: i128) -> Result<(), ContractError> {
        if !matches!(self.token.try_transfer(from, &self.pool, &amount), Ok(Ok(()))) {
            log!(self.env, "transfer from player failed", from.clone(), amount);
            return Err(ContractError::ReserveUnavailable);
        }
        self.token.approve(
            &self.pool,
            &self.reserve_address,
            &amount,
            &self.env.ledger().sequence(),
        );

        match self.reserve.try_deposit(&self.pool, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(self.env, "reserve rejected deposit", from.clone(), amount);
                self.token.approve(
                    &self.pool,
                    &self.reserve_address,
                    &0,
                    &self.env.ledger().sequence(),
                );
                self.token.transfer(&self.pool, from, &amount);
                Err(ContractError::ReserveUnavailable)
            }
        }
    }

    /// Releases `amount` of the pool's position straight to `recipient`.
    pub fn redeem(&self, amount: i128, recipient: &Address) -> Result<(), ContractError> {
        if amount == 0 {
            return Ok(());
        }
        match self.reserve.try_redeem(&self.pool, &amount, recipient) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(self.env, "reserve rejected redeem", recipient.clone(), amount);
                Err(ContractError::ReserveUnavailable)
            }
        }
    }

    /// Principal plus the yield accrued so far, as reported by the reserve.
    pub fn custodied_balance(&self) -> Result<i128, ContractError> {
        match self.reserve.try_balance_of(&self.pool) {
            Ok(Ok(balance)) => Ok(balance),
            _ => Err(ContractError::ReserveUnavailable),
        }
    }

    /// Incentives available to the pool; zero when no source is configured.
    pub fn incentive_balance(&self) -> Result<i128, ContractError> {
        let Some(incentive) = &self.incentive else {
            return Ok(0);
        };
        match incentive.try_balance_available(&self.pool) {
            Ok(Ok(balance)) => Ok(balance),
            _ => Err(ContractError::ReserveUnavailable),
        }
    }

    pub fn claim_incentive(&self, amount: i128, recipient: &Address) -> Result<(), ContractError> {
        let Some(incentive) = &self.incentive else {
            return Ok(());
        };
        if amount == 0 {
            return Ok(());
        }
        match incentive.try_claim(&self.pool, &amount, recipient) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(self.env, "incentive claim failed", recipient.clone(), amount);
                Err(ContractError::ReserveUnavailable)
            }
        }
    }
}
