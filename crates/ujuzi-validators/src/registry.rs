// crates/ujuzi-validators/src/registry.rs
//
// Validator registry: admission by stake, removal with refund, accuracy
// reputation, and the admin-settable threshold/stake configuration.
//
// Every operation checks its capability and preconditions before mutating
// anything, so a failed call leaves the registry untouched.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reputation::{accuracy_reputation, INITIAL_REPUTATION};
use ujuzi_core::access::{AccessControl, Role};
use ujuzi_core::error::UjuziError;
use ujuzi_core::event::{Component, Event};
use ujuzi_core::identity::Principal;
use ujuzi_core::traits::ValidatorDirectory;
use ujuzi_economics::staking::{StakeEscrow, DEFAULT_VALIDATOR_STAKE};

/// Same-decision votes needed to finalize an entry, unless reconfigured.
pub const DEFAULT_VALIDATION_THRESHOLD: u32 = 3;

/// A validator record. Kept after removal with `is_active = false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    pub address: Principal,
    /// Stake currently in escrow, in wei. Zero once removed.
    pub stake: u128,
    pub reputation: u32,
    pub validation_count: u64,
    pub correct_validations: u64,
    pub is_active: bool,
    pub join_date: DateTime<Utc>,
    pub removed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorRegistry {
    access: AccessControl,
    validators: BTreeMap<Principal, Validator>,
    /// First-join order, for stable enumeration.
    join_order: Vec<Principal>,
    escrow: StakeEscrow,
    validation_threshold: u32,
    validator_stake: u128,
}

impl ValidatorRegistry {
    /// Deploy a registry with `deployer` as DefaultAdmin and Admin.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if `threshold` or `stake` is zero.
    pub fn new(deployer: Principal, threshold: u32, stake: u128) -> Result<Self, UjuziError> {
        check_threshold(threshold)?;
        check_stake(stake)?;
        Ok(Self::build(deployer, threshold, stake))
    }

    /// Deploy with the default threshold (3) and stake (0.01 native unit).
    pub fn with_defaults(deployer: Principal) -> Self {
        Self::build(deployer, DEFAULT_VALIDATION_THRESHOLD, DEFAULT_VALIDATOR_STAKE)
    }

    fn build(deployer: Principal, threshold: u32, stake: u128) -> Self {
        let access =
            AccessControl::with_roles(Component::ValidatorRegistry, deployer, &[(Role::Admin, deployer)]);
        Self {
            access,
            validators: BTreeMap::new(),
            join_order: Vec::new(),
            escrow: StakeEscrow::new(),
            validation_threshold: threshold,
            validator_stake: stake,
        }
    }

    // -----------------------------------------------------------------
    // Membership
    // -----------------------------------------------------------------

    /// Join the validator set, escrowing the attached `stake`.
    ///
    /// A previously removed principal may apply again; its record is
    /// reactivated with fresh counters.
    ///
    /// # Errors
    /// - `InsufficientStake` if `stake` is below the configured stake.
    /// - `AlreadyValidator` if `caller` is already active.
    pub fn apply_as_validator(
        &mut self,
        caller: &Principal,
        stake: u128,
        now: DateTime<Utc>,
        events: &mut Vec<Event>,
    ) -> Result<(), UjuziError> {
        if stake < self.validator_stake {
            return Err(UjuziError::InsufficientStake {
                required: self.validator_stake,
                attached: stake,
            });
        }
        if self.is_validator(caller) {
            return Err(UjuziError::AlreadyValidator(*caller));
        }

        self.escrow.lock(*caller, stake, now)?;
        if !self.validators.contains_key(caller) {
            self.join_order.push(*caller);
        }
        self.validators.insert(
            *caller,
            Validator {
                address: *caller,
                stake,
                reputation: INITIAL_REPUTATION,
                validation_count: 0,
                correct_validations: 0,
                is_active: true,
                join_date: now,
                removed_at: None,
            },
        );

        tracing::info!(validator = %caller.short(), stake, "Validator added");
        events.push(Event::ValidatorAdded {
            validator: *caller,
            stake,
        });
        Ok(())
    }

    /// Deactivate `validator` and release its stake.
    ///
    /// Returns the refunded amount; the host credits it to the validator in
    /// the same call.
    ///
    /// # Errors
    /// - `Unauthorized` unless `caller` holds Admin.
    /// - `NotFound` if `validator` is not active.
    pub fn remove_validator(
        &mut self,
        caller: &Principal,
        validator: &Principal,
        now: DateTime<Utc>,
        events: &mut Vec<Event>,
    ) -> Result<u128, UjuziError> {
        self.access.require(Role::Admin, caller)?;
        if !self.is_validator(validator) {
            return Err(UjuziError::NotFound(format!(
                "{} is not an active validator",
                validator
            )));
        }

        let released = self.escrow.release(validator)?;
        if let Some(record) = self.validators.get_mut(validator) {
            record.is_active = false;
            record.stake = 0;
            record.removed_at = Some(now);
        }

        tracing::info!(validator = %validator.short(), refund = released.amount, "Validator removed");
        events.push(Event::ValidatorRemoved {
            validator: *validator,
        });
        Ok(released.amount)
    }

    // -----------------------------------------------------------------
    // Reputation
    // -----------------------------------------------------------------

    /// Record one validation outcome and recompute accuracy reputation.
    ///
    /// # Errors
    /// - `Unauthorized` unless `caller` holds Admin or Registrar.
    /// - `NotFound` if `validator` has never been registered.
    pub fn update_validator_reputation(
        &mut self,
        caller: &Principal,
        validator: &Principal,
        was_correct: bool,
        events: &mut Vec<Event>,
    ) -> Result<(), UjuziError> {
        self.access
            .require_any(&[Role::Admin, Role::Registrar], caller)?;
        let record = self.validators.get_mut(validator).ok_or_else(|| {
            UjuziError::NotFound(format!("no validator record for {}", validator))
        })?;

        record.validation_count += 1;
        if was_correct {
            record.correct_validations += 1;
        }
        record.reputation =
            accuracy_reputation(record.correct_validations, record.validation_count);

        tracing::debug!(
            validator = %validator.short(),
            was_correct,
            reputation = record.reputation,
            "Validator reputation updated"
        );
        events.push(Event::ValidatorReputationUpdated {
            validator: *validator,
            reputation: record.reputation,
        });
        Ok(())
    }

    // -----------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------

    /// # Errors
    /// - `Unauthorized` unless `caller` holds Admin.
    /// - `InvalidConfig` if `threshold` is zero; the threshold is unchanged.
    pub fn set_validation_threshold(
        &mut self,
        caller: &Principal,
        threshold: u32,
        events: &mut Vec<Event>,
    ) -> Result<(), UjuziError> {
        self.access.require(Role::Admin, caller)?;
        check_threshold(threshold)?;
        self.validation_threshold = threshold;
        tracing::info!(threshold, "Validation threshold updated");
        events.push(Event::ValidationThresholdUpdated { threshold });
        Ok(())
    }

    /// Change the stake required of future applicants. Existing stakes are
    /// not touched.
    ///
    /// # Errors
    /// - `Unauthorized` unless `caller` holds Admin.
    /// - `InvalidConfig` if `stake` is zero.
    pub fn set_validator_stake(
        &mut self,
        caller: &Principal,
        stake: u128,
        events: &mut Vec<Event>,
    ) -> Result<(), UjuziError> {
        self.access.require(Role::Admin, caller)?;
        check_stake(stake)?;
        self.validator_stake = stake;
        tracing::info!(stake, "Validator stake updated");
        events.push(Event::ValidatorStakeUpdated { stake });
        Ok(())
    }

    pub fn grant_role(
        &mut self,
        sender: &Principal,
        role: Role,
        account: Principal,
        events: &mut Vec<Event>,
    ) -> Result<(), UjuziError> {
        self.access.grant_role(sender, role, account, events)
    }

    pub fn revoke_role(
        &mut self,
        sender: &Principal,
        role: Role,
        account: Principal,
        events: &mut Vec<Event>,
    ) -> Result<(), UjuziError> {
        self.access.revoke_role(sender, role, account, events)
    }

    // -----------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------

    pub fn is_validator(&self, who: &Principal) -> bool {
        self.validators
            .get(who)
            .map(|v| v.is_active)
            .unwrap_or(false)
    }

    pub fn is_admin(&self, who: &Principal) -> bool {
        self.access.has_role(Role::Admin, who)
    }

    pub fn has_role(&self, role: Role, who: &Principal) -> bool {
        self.access.has_role(role, who)
    }

    pub fn access(&self) -> &AccessControl {
        &self.access
    }

    /// # Errors
    /// Returns `NotFound` if `who` has never been registered.
    pub fn get_validator_info(&self, who: &Principal) -> Result<&Validator, UjuziError> {
        self.validators
            .get(who)
            .ok_or_else(|| UjuziError::NotFound(format!("no validator record for {}", who)))
    }

    /// Active validators in first-join order.
    pub fn get_all_validators(&self) -> Vec<Principal> {
        self.join_order
            .iter()
            .filter(|p| self.is_validator(p))
            .copied()
            .collect()
    }

    /// Every record ever created, active or not, in first-join order.
    pub fn records(&self) -> impl Iterator<Item = &Validator> {
        self.join_order.iter().filter_map(|p| self.validators.get(p))
    }

    /// Number of active validators.
    pub fn get_validator_count(&self) -> usize {
        self.validators.values().filter(|v| v.is_active).count()
    }

    pub fn get_validation_threshold(&self) -> u32 {
        self.validation_threshold
    }

    /// Stake required of new applicants, in wei.
    pub fn validator_stake(&self) -> u128 {
        self.validator_stake
    }

    /// Total stake held in escrow, in wei.
    pub fn total_escrowed(&self) -> u128 {
        self.escrow.total_locked()
    }
}

fn check_threshold(threshold: u32) -> Result<(), UjuziError> {
    if threshold == 0 {
        return Err(UjuziError::InvalidConfig(
            "Threshold must be positive".to_string(),
        ));
    }
    Ok(())
}

fn check_stake(stake: u128) -> Result<(), UjuziError> {
    if stake == 0 {
        return Err(UjuziError::InvalidConfig(
            "Validator stake must be positive".to_string(),
        ));
    }
    Ok(())
}

impl ValidatorDirectory for ValidatorRegistry {
    fn is_validator(&self, who: &Principal) -> bool {
        ValidatorRegistry::is_validator(self, who)
    }

    fn is_admin(&self, who: &Principal) -> bool {
        ValidatorRegistry::is_admin(self, who)
    }

    fn validation_threshold(&self) -> u32 {
        self.validation_threshold
    }

    fn update_validator_reputation(
        &mut self,
        caller: &Principal,
        validator: &Principal,
        was_correct: bool,
        events: &mut Vec<Event>,
    ) -> Result<(), UjuziError> {
        ValidatorRegistry::update_validator_reputation(self, caller, validator, was_correct, events)
    }
}
