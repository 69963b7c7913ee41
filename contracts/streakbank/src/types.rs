use soroban_sdk::{contracttype, Address};

/// Immutable game configuration, written once by the constructor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameConfig {
    /// Inbound asset collected from players.
    pub token: Address,
    /// Yield reserve that custodies every payment.
    pub reserve: Address,
    /// Optional source of incentive rewards split among players at payout.
    pub incentive: Option<Address>,
    /// Fixed amount due for every segment, including the joining one.
    pub segment_payment: i128,
    /// Length of a segment, in seconds.
    pub segment_length: u64,
    /// Segments a player must have paid to share the yield and incentives.
    pub min_segment_for_reward: u64,
    pub created_at: u64,
}

/// Pool-wide accounting, updated on every join, deposit and withdrawal.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolTotals {
    pub total_game_principal: i128,
    pub active_players_count: u32,
}

/// A participant's compliance and accounting record. Never removed once created.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Player {
    pub most_recent_segment_paid: u64,
    pub amount_paid: i128,
    pub withdrawn: bool,
}

/// What a withdrawing player receives, split by origin.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WithdrawalShares {
    pub principal: i128,
    pub yield_share: i128,
    pub incentive_share: i128,
}

/// Storage keys for all contract data.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Config,
    Totals,
    Paused,
    RenounceUnlocked,
    Player(Address),
}
