use crate::types::{Player, PoolTotals, WithdrawalShares};

pub fn on_join(totals: &mut PoolTotals, amount: i128) {
    totals.total_game_principal += amount;
    totals.active_players_count += 1;
}

pub fn on_deposit(totals: &mut PoolTotals, amount: i128) {
    totals.total_game_principal += amount;
}

/// Releases a withdrawn player's principal from the pool totals.
pub fn on_withdraw(totals: &mut PoolTotals, amount_paid: i128) {
    totals.total_game_principal -= amount_paid;
    totals.active_players_count = totals.active_players_count.saturating_sub(1);
}

/// Splits a withdrawal into principal, yield and incentive.
///
/// Principal is always returned in full. Yield is shared pro-rata to each
/// player's contribution and incentives equally among the players still in
/// the pool; both are withheld from players who paid fewer than
/// `min_segment_for_reward` segments. Divisions truncate, so rounding
/// residue stays in the pool for whoever withdraws last.
pub fn compute_withdrawal_shares(
    record: &Player,
    total_custodied_value: i128,
    total_game_principal: i128,
    min_segment_for_reward: u64,
    incentive_balance: i128,
    active_players_count_at_payout: u32,
) -> WithdrawalShares {
    let mut shares = WithdrawalShares {
        principal: record.amount_paid,
        ..Default::default()
    };

    if record.most_recent_segment_paid + 1 < min_segment_for_reward {
        return shares;
    }

    let total_yield = (total_custodied_value - total_game_principal).max(0);
    if total_game_principal > 0 {
        shares.yield_share = total_yield * record.amount_paid / total_game_principal;
    }

    if incentive_balance > 0 && active_players_count_at_payout > 0 {
        shares.incentive_share = incentive_balance / active_players_count_at_payout as i128;
    }

    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYMENT: i128 = 10;

    fn player(segments_paid: u64) -> Player {
        Player {
            most_recent_segment_paid: segments_paid - 1,
            amount_paid: PAYMENT * segments_paid as i128,
            withdrawn: true,
        }
    }

    #[test]
    fn test_totals_follow_joins_deposits_and_withdrawals() {
        let mut totals = PoolTotals::default();
        on_join(&mut totals, PAYMENT);
        on_join(&mut totals, PAYMENT);
        on_deposit(&mut totals, PAYMENT);
        assert_eq!(totals.total_game_principal, 3 * PAYMENT);
        assert_eq!(totals.active_players_count, 2);

        on_withdraw(&mut totals, 2 * PAYMENT);
        assert_eq!(totals.total_game_principal, PAYMENT);
        assert_eq!(totals.active_players_count, 1);
    }

    #[test]
    fn test_non_compliant_player_gets_principal_only() {
        let shares = compute_withdrawal_shares(&player(2), 1_000, 50, 3, 900, 2);
        assert_eq!(
            shares,
            WithdrawalShares {
                principal: 20,
                yield_share: 0,
                incentive_share: 0,
            }
        );
    }

    #[test]
    fn test_eligible_at_exactly_min_segment() {
        // 30 of 60 principal, 12 of yield, 3 players left.
        let shares = compute_withdrawal_shares(&player(3), 72, 60, 3, 90, 3);
        assert_eq!(shares.principal, 30);
        assert_eq!(shares.yield_share, 6);
        assert_eq!(shares.incentive_share, 30);
    }

    #[test]
    fn test_yield_division_truncates() {
        // 30 * 10 / 90 = 3.33..
        let shares = compute_withdrawal_shares(&player(3), 100, 90, 3, 0, 3);
        assert_eq!(shares.yield_share, 3);
    }

    #[test]
    fn test_reserve_loss_means_no_yield() {
        let shares = compute_withdrawal_shares(&player(3), 50, 60, 3, 0, 2);
        assert_eq!(shares.principal, 30);
        assert_eq!(shares.yield_share, 0);
    }

    #[test]
    fn test_no_incentive_without_balance() {
        let shares = compute_withdrawal_shares(&player(4), 40, 40, 3, 0, 1);
        assert_eq!(shares.incentive_share, 0);
        assert_eq!(shares.yield_share, 0);
    }
}
