// crates/ujuzi-core/src/traits.rs

use crate::error::UjuziError;
use crate::event::Event;
use crate::identity::Principal;

/// Read/update access to the validator set, as seen by the knowledge
/// registry.
///
/// Implemented by ujuzi-validators (`ValidatorRegistry`).
pub trait ValidatorDirectory {
    /// Whether `who` holds an active validator record.
    fn is_validator(&self, who: &Principal) -> bool;

    /// Whether `who` may perform administrative overrides.
    fn is_admin(&self, who: &Principal) -> bool;

    /// Number of same-decision votes that finalizes an entry.
    fn validation_threshold(&self) -> u32;

    /// Record one validation outcome for `validator`, on behalf of `caller`.
    fn update_validator_reputation(
        &mut self,
        caller: &Principal,
        validator: &Principal,
        was_correct: bool,
        events: &mut Vec<Event>,
    ) -> Result<(), UjuziError>;
}

/// Mint/burn access to the reputation token, as seen by the knowledge
/// registry.
///
/// Implemented by ujuzi-economics (`ReputationToken`).
pub trait RewardLedger {
    /// Current balance; 0 for unknown principals.
    fn balance_of(&self, who: &Principal) -> u64;

    fn mint(
        &mut self,
        caller: &Principal,
        to: &Principal,
        amount: u64,
        events: &mut Vec<Event>,
    ) -> Result<(), UjuziError>;

    fn burn(
        &mut self,
        caller: &Principal,
        from: &Principal,
        amount: u64,
        events: &mut Vec<Event>,
    ) -> Result<(), UjuziError>;
}
