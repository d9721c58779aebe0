// crates/ujuzi-validators/src/reputation.rs
//
// Accuracy reputation for validators.
//
// Reputation is a rolling accuracy percentage, not an additive score:
//   reputation = floor(100 * correct_validations / validation_count)
// A validator with no recorded validations holds INITIAL_REPUTATION.

/// Reputation assigned on joining, before any outcome is recorded.
pub const INITIAL_REPUTATION: u32 = 100;

/// Compute the accuracy reputation from the two counters.
///
/// `correct` is clamped to `count`.
pub fn accuracy_reputation(correct: u64, count: u64) -> u32 {
    if count == 0 {
        return INITIAL_REPUTATION;
    }
    let correct = correct.min(count) as u128;
    (100 * correct / count as u128) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_history_is_initial() {
        assert_eq!(accuracy_reputation(0, 0), INITIAL_REPUTATION);
    }

    #[test]
    fn test_floor_division() {
        assert_eq!(accuracy_reputation(1, 1), 100);
        assert_eq!(accuracy_reputation(1, 2), 50);
        assert_eq!(accuracy_reputation(2, 3), 66);
        assert_eq!(accuracy_reputation(1, 3), 33);
        assert_eq!(accuracy_reputation(0, 7), 0);
    }

    #[test]
    fn test_correct_clamped_to_count() {
        assert_eq!(accuracy_reputation(5, 2), 100);
    }

    #[test]
    fn test_large_counters_do_not_overflow() {
        assert_eq!(accuracy_reputation(u64::MAX / 2, u64::MAX), 49);
    }
}
