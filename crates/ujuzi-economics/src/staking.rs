// crates/ujuzi-economics/src/staking.rs
//
// Validator stake escrow.
//
// A validator's stake is locked here for as long as the validator is active.
// Release is the only unlock path; the validator registry calls it in the
// same operation that deactivates the record, and the host credits the
// returned amount to the validator's native balance.
//
// All amounts are in wei (1 native unit = 10^18 wei).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rewards::WEI_PER_NATIVE;
use ujuzi_core::error::UjuziError;
use ujuzi_core::identity::Principal;

/// Default stake required to join the validator set: 0.01 native unit.
pub const DEFAULT_VALIDATOR_STAKE: u128 = WEI_PER_NATIVE / 100;

/// A single locked stake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeEntry {
    /// The validator whose stake this is.
    pub staker: Principal,
    /// Amount locked, in wei.
    pub amount: u128,
    /// Block time at which the stake was deposited.
    pub locked_at: DateTime<Utc>,
}

/// Holds every active validator's stake.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StakeEscrow {
    entries: BTreeMap<Principal, StakeEntry>,
}

impl StakeEscrow {
    /// Create a new empty escrow.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Lock `amount` for `staker`. Whether `amount` is enough to join is
    /// the validator registry's call, not the escrow's.
    ///
    /// # Errors
    /// Returns `AlreadyValidator` if `staker` already has a locked stake.
    pub fn lock(
        &mut self,
        staker: Principal,
        amount: u128,
        now: DateTime<Utc>,
    ) -> Result<(), UjuziError> {
        if self.entries.contains_key(&staker) {
            return Err(UjuziError::AlreadyValidator(staker));
        }
        self.entries.insert(
            staker,
            StakeEntry {
                staker,
                amount,
                locked_at: now,
            },
        );
        Ok(())
    }

    /// Unlock and return the stake of `staker`.
    ///
    /// # Errors
    /// Returns `NotFound` if nothing is locked for `staker`.
    pub fn release(&mut self, staker: &Principal) -> Result<StakeEntry, UjuziError> {
        self.entries.remove(staker).ok_or_else(|| {
            UjuziError::NotFound(format!("no stake locked for {}", staker))
        })
    }

    /// Stake currently locked for `staker` (0 if none).
    pub fn stake_of(&self, staker: &Principal) -> u128 {
        self.entries.get(staker).map(|e| e.amount).unwrap_or(0)
    }

    /// Total wei held in escrow.
    pub fn total_locked(&self) -> u128 {
        self.entries.values().map(|e| e.amount).sum()
    }

    /// All locked stakes (for inspection/debugging).
    pub fn entries(&self) -> impl Iterator<Item = &StakeEntry> {
        self.entries.values()
    }
}
