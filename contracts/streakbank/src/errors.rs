use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    Paused = 1,
    AlreadyJoined = 2,
    NotAPlayer = 3,
    SegmentAlreadyPaid = 4,
    MissedSegment = 5,
    AlreadyWithdrawn = 6,
    ReserveUnavailable = 7,
    InvalidAmount = 8,
    InvalidConfig = 9,
    Unauthorized = 10,
    NoAdmin = 11,
    RenounceLocked = 12,
    AlreadyPaused = 13,
    NotPaused = 14,
    PlayersRemaining = 15,
}
