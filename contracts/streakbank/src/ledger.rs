use crate::errors::ContractError;
use crate::types::Player;

/// Opens a record for a new player. Joining always covers segment 0, even
/// when it happens after the joining window has closed.
pub fn join(
    existing: Option<&Player>,
    amount: i128,
    _current_segment: u64,
) -> Result<Player, ContractError> {
    if existing.is_some() {
        return Err(ContractError::AlreadyJoined);
    }

    Ok(Player {
        most_recent_segment_paid: 0,
        amount_paid: amount,
        withdrawn: false,
    })
}

pub fn record_deposit(
    existing: Option<&Player>,
    amount: i128,
    current_segment: u64,
) -> Result<Player, ContractError> {
    let mut record = existing.cloned().ok_or(ContractError::NotAPlayer)?;

    if record.withdrawn {
        return Err(ContractError::AlreadyWithdrawn);
    }
    if current_segment == record.most_recent_segment_paid {
        return Err(ContractError::SegmentAlreadyPaid);
    }
    // Skipping a segment ends the streak; only withdraw remains.
    if current_segment > record.most_recent_segment_paid + 1 {
        return Err(ContractError::MissedSegment);
    }

    record.most_recent_segment_paid = current_segment;
    record.amount_paid += amount;
    Ok(record)
}

pub fn mark_withdrawn(existing: Option<&Player>) -> Result<Player, ContractError> {
    let mut record = existing.cloned().ok_or(ContractError::NotAPlayer)?;

    if record.withdrawn {
        return Err(ContractError::AlreadyWithdrawn);
    }

    record.withdrawn = true;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYMENT: i128 = 10;

    fn joined() -> Player {
        join(None, PAYMENT, 0).unwrap()
    }

    #[test]
    fn test_join_creates_record() {
        let record = joined();
        assert_eq!(record.most_recent_segment_paid, 0);
        assert_eq!(record.amount_paid, PAYMENT);
        assert!(!record.withdrawn);
    }

    #[test]
    fn test_join_twice_fails() {
        let record = joined();
        assert_eq!(
            join(Some(&record), PAYMENT, 0),
            Err(ContractError::AlreadyJoined)
        );
    }

    #[test]
    fn test_late_join_still_covers_segment_zero() {
        let record = join(None, PAYMENT, 2).unwrap();
        assert_eq!(record.most_recent_segment_paid, 0);
    }

    #[test]
    fn test_deposit_advances_streak() {
        let record = record_deposit(Some(&joined()), PAYMENT, 1).unwrap();
        assert_eq!(record.most_recent_segment_paid, 1);
        assert_eq!(record.amount_paid, 2 * PAYMENT);

        let record = record_deposit(Some(&record), PAYMENT, 2).unwrap();
        assert_eq!(record.most_recent_segment_paid, 2);
        assert_eq!(record.amount_paid, 3 * PAYMENT);
    }

    #[test]
    fn test_deposit_without_joining_fails() {
        assert_eq!(
            record_deposit(None, PAYMENT, 1),
            Err(ContractError::NotAPlayer)
        );
    }

    #[test]
    fn test_deposit_same_segment_fails() {
        assert_eq!(
            record_deposit(Some(&joined()), PAYMENT, 0),
            Err(ContractError::SegmentAlreadyPaid)
        );
    }

    #[test]
    fn test_deposit_after_gap_fails() {
        assert_eq!(
            record_deposit(Some(&joined()), PAYMENT, 2),
            Err(ContractError::MissedSegment)
        );
        assert_eq!(
            record_deposit(Some(&joined()), PAYMENT, 7),
            Err(ContractError::MissedSegment)
        );
    }

    #[test]
    fn test_deposit_after_withdrawal_fails() {
        let record = mark_withdrawn(Some(&joined())).unwrap();
        assert_eq!(
            record_deposit(Some(&record), PAYMENT, 1),
            Err(ContractError::AlreadyWithdrawn)
        );
    }

    #[test]
    fn test_withdraw_once() {
        let record = mark_withdrawn(Some(&joined())).unwrap();
        assert!(record.withdrawn);
        assert_eq!(record.amount_paid, PAYMENT);
        assert_eq!(
            mark_withdrawn(Some(&record)),
            Err(ContractError::AlreadyWithdrawn)
        );
        assert_eq!(mark_withdrawn(None), Err(ContractError::NotAPlayer));
    }
}
