/// Index of the segment `now` falls into. Segment 0 is the joining window.
///
/// A clock reading earlier than `created_at` is treated as segment 0.
pub fn current_segment(created_at: u64, segment_length: u64, now: u64) -> u64 {
    // Kept total for any input; a validated config never has a zero length.
    if segment_length == 0 {
        return 0;
    }
    now.saturating_sub(created_at) / segment_length
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEEK: u64 = 604_800;

    #[test]
    fn test_starts_at_segment_zero() {
        assert_eq!(current_segment(1_000, WEEK, 1_000), 0);
        assert_eq!(current_segment(1_000, WEEK, 1_000 + WEEK - 1), 0);
    }

    #[test]
    fn test_segment_boundaries() {
        assert_eq!(current_segment(1_000, WEEK, 1_000 + WEEK), 1);
        assert_eq!(current_segment(1_000, WEEK, 1_000 + 2 * WEEK), 2);
        assert_eq!(current_segment(1_000, WEEK, 1_000 + 4 * WEEK + 5), 4);
    }

    #[test]
    fn test_zero_length_stays_at_segment_zero() {
        assert_eq!(current_segment(1_000, 0, 1_000 + 10 * WEEK), 0);
    }

    #[test]
    fn test_clock_before_creation() {
        assert_eq!(current_segment(1_000, WEEK, 10), 0);
    }

    #[test]
    fn test_monotonic_as_time_advances() {
        let mut last = 0;
        for step in 0..50u64 {
            let segment = current_segment(7, WEEK, 7 + step * 86_400);
            assert!(segment >= last);
            last = segment;
        }
        assert_eq!(last, 49 * 86_400 / WEEK);
    }
}
