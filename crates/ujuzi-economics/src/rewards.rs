// crates/ujuzi-economics/src/rewards.rs
//
// Reward amounts paid by the knowledge registry, in whole reputation points.
//
//   - submission: seed credit minted to the author on every accepted submission
//   - author:     minted to the author when an entry is Validated
//   - validator:  minted to every validator who voted with the final outcome
//   - rejection penalty: burned from the author when an entry is Rejected,
//     clamped to the author's current balance

use serde::{Deserialize, Serialize};

/// Number of wei in one native currency unit.
pub const WEI_PER_NATIVE: u128 = 1_000_000_000_000_000_000;

pub const SUBMISSION_REWARD: u64 = 10;
pub const AUTHOR_REWARD: u64 = 50;
pub const VALIDATOR_REWARD: u64 = 5;
pub const REJECTION_PENALTY: u64 = SUBMISSION_REWARD;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardSchedule {
    #[serde(default = "default_submission_reward")]
    pub submission_reward: u64,
    #[serde(default = "default_author_reward")]
    pub author_reward: u64,
    #[serde(default = "default_validator_reward")]
    pub validator_reward: u64,
    /// Zero disables the clawback.
    #[serde(default = "default_rejection_penalty")]
    pub rejection_penalty: u64,
}

fn default_submission_reward() -> u64 {
    SUBMISSION_REWARD
}

fn default_author_reward() -> u64 {
    AUTHOR_REWARD
}

fn default_validator_reward() -> u64 {
    VALIDATOR_REWARD
}

fn default_rejection_penalty() -> u64 {
    REJECTION_PENALTY
}

impl Default for RewardSchedule {
    fn default() -> Self {
        Self {
            submission_reward: SUBMISSION_REWARD,
            author_reward: AUTHOR_REWARD,
            validator_reward: VALIDATOR_REWARD,
            rejection_penalty: REJECTION_PENALTY,
        }
    }
}

impl RewardSchedule {
    /// Penalty actually burnable from an author holding `balance`.
    pub fn clamped_penalty(&self, balance: u64) -> u64 {
        self.rejection_penalty.min(balance)
    }
}

/// Format a wei amount in native units, trimming trailing zeros.
pub fn format_native(wei: u128) -> String {
    let whole = wei / WEI_PER_NATIVE;
    let frac = wei % WEI_PER_NATIVE;
    if frac == 0 {
        format!("{}", whole)
    } else {
        let frac_str = format!("{:018}", frac);
        format!("{}.{}", whole, frac_str.trim_end_matches('0'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let schedule = RewardSchedule::default();
        assert_eq!(schedule.submission_reward, 10);
        assert_eq!(schedule.author_reward, 50);
        assert_eq!(schedule.validator_reward, 5);
        assert_eq!(schedule.rejection_penalty, 10);
    }

    #[test]
    fn test_clamped_penalty() {
        let schedule = RewardSchedule::default();
        assert_eq!(schedule.clamped_penalty(100), 10);
        assert_eq!(schedule.clamped_penalty(4), 4);
        assert_eq!(schedule.clamped_penalty(0), 0);
    }

    #[test]
    fn test_partial_schedule_uses_defaults() {
        let schedule: RewardSchedule = serde_json::from_str(r#"{"author_reward": 80}"#).unwrap();
        assert_eq!(schedule.author_reward, 80);
        assert_eq!(schedule.validator_reward, VALIDATOR_REWARD);
    }

    #[test]
    fn test_format_native() {
        assert_eq!(format_native(WEI_PER_NATIVE), "1");
        assert_eq!(format_native(WEI_PER_NATIVE / 100), "0.01");
        assert_eq!(format_native(0), "0");
        assert_eq!(format_native(WEI_PER_NATIVE * 3 / 2), "1.5");
    }
}
