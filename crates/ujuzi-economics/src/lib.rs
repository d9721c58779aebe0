// crates/ujuzi-economics/src/lib.rs
//
// ujuzi-economics: the cultural reputation token, validator stake escrow,
// native-currency balances, and the reward schedule for the Ujuzi registry.
//
// Reputation balances are whole points (u64). Native-currency amounts are
// tracked in wei (u128). 1 native unit = 10^18 wei.

pub mod bank;
pub mod rewards;
pub mod staking;
pub mod token;

// Re-export key types for ergonomic access from downstream crates.
pub use bank::NativeBank;
pub use rewards::{
    format_native, RewardSchedule, AUTHOR_REWARD, REJECTION_PENALTY, SUBMISSION_REWARD,
    VALIDATOR_REWARD, WEI_PER_NATIVE,
};
pub use staking::{StakeEntry, StakeEscrow, DEFAULT_VALIDATOR_STAKE};
pub use token::{ReputationToken, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL};
