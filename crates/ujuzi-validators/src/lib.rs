// crates/ujuzi-validators/src/lib.rs
//
// ujuzi-validators: the staked validator set for the Ujuzi registry.
//
// Membership is gated behind a refundable stake held in escrow. Each
// validator carries an accuracy reputation (percentage of validations that
// matched the final outcome). The registry also owns the global approval
// threshold used by the knowledge registry.

pub mod registry;
pub mod reputation;

pub use registry::{Validator, ValidatorRegistry, DEFAULT_VALIDATION_THRESHOLD};
pub use reputation::{accuracy_reputation, INITIAL_REPUTATION};
