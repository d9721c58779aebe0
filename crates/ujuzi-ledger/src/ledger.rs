// crates/ujuzi-ledger/src/ledger.rs
//
// The serialized hosting environment for the three registry components.
//
// Calls are applied one at a time, in submission order. Each call runs
// against a copy of the world state; the copy replaces the live state only
// if every step succeeded, so a failing call has no effect at all, including
// effects it already had on other components through sub-calls.
//
//   execute(call)
//     1. debit the attached value from the caller's native balance
//     2. dispatch the transaction to its component
//     3. on success: advance the block, swap in the new state, log events

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{LedgerConfig, MAX_BLOCK_INTERVAL_SECS, REGISTRY_ACCOUNT_LABEL};
use crate::log::{EventLog, Receipt};
use crate::transaction::{Call, Transaction};
use ujuzi_core::access::Role;
use ujuzi_core::error::UjuziError;
use ujuzi_core::event::{Component, Event};
use ujuzi_core::identity::Principal;
use ujuzi_economics::bank::NativeBank;
use ujuzi_economics::token::ReputationToken;
use ujuzi_registry::KnowledgeRegistry;
use ujuzi_validators::ValidatorRegistry;

/// Everything a call can change, apart from the event log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    pub block: u64,
    pub time: DateTime<Utc>,
    pub token: ReputationToken,
    pub validators: ValidatorRegistry,
    pub registry: KnowledgeRegistry,
    pub bank: NativeBank,
}

impl WorldState {
    /// Deploy and wire the three components.
    ///
    /// # Errors
    /// Returns `InvalidConfig` for a zero threshold or stake.
    pub fn genesis(config: &LedgerConfig) -> Result<Self, UjuziError> {
        let deployer = Principal::from_label(&config.deployer);
        let account = Principal::from_label(REGISTRY_ACCOUNT_LABEL);
        let mut events = Vec::new();

        let mut token = ReputationToken::new(deployer);
        let mut validators = ValidatorRegistry::new(
            deployer,
            config.validation_threshold,
            config.validator_stake_wei,
        )?;
        let registry = KnowledgeRegistry::new(account, config.rewards);

        token.grant_role(&deployer, Role::Minter, account, &mut events)?;
        token.grant_role(&deployer, Role::Burner, account, &mut events)?;
        validators.grant_role(&deployer, Role::Registrar, account, &mut events)?;

        let mut bank = NativeBank::new();
        for (label, wei) in &config.genesis_balances {
            bank.deposit(Principal::from_label(label), *wei);
        }

        tracing::info!(
            deployer = %deployer.short(),
            registry = %account.short(),
            threshold = config.validation_threshold,
            funded_accounts = config.genesis_balances.len(),
            "Genesis state created"
        );
        Ok(Self {
            block: 0,
            time: config.genesis_time,
            token,
            validators,
            registry,
            bank,
        })
    }

    /// Apply one call at block time `now`. Leaves `self` partially updated
    /// on error; callers discard the copy in that case.
    fn apply(&mut self, call: &Call, now: DateTime<Utc>, events: &mut Vec<Event>) -> Result<(), UjuziError> {
        if call.value > 0 && !call.tx.is_payable() {
            return Err(UjuziError::InvalidAmount(format!(
                "{} does not accept attached value",
                call.tx.name()
            )));
        }
        self.bank.withdraw(&call.caller, call.value)?;

        let caller = &call.caller;
        match &call.tx {
            Transaction::MintCulturalTokens { to, amount } => {
                self.token.mint_cultural_tokens(caller, to, *amount, events)
            }
            Transaction::BurnCulturalTokens { from, amount } => {
                self.token.burn_cultural_tokens(caller, from, *amount, events)
            }
            Transaction::Transfer { to, amount } => self.token.transfer(caller, to, *amount),
            Transaction::TransferFrom { from, to, amount } => {
                self.token.transfer_from(caller, from, to, *amount)
            }
            Transaction::Approve { spender, amount } => {
                self.token.approve(caller, spender, *amount)
            }
            Transaction::ApplyAsValidator => {
                self.validators
                    .apply_as_validator(caller, call.value, now, events)
            }
            Transaction::RemoveValidator { validator } => {
                let refund = self
                    .validators
                    .remove_validator(caller, validator, now, events)?;
                self.bank.deposit(*validator, refund);
                Ok(())
            }
            Transaction::UpdateValidatorReputation {
                validator,
                was_correct,
            } => self
                .validators
                .update_validator_reputation(caller, validator, *was_correct, events),
            Transaction::SetValidationThreshold { threshold } => {
                self.validators
                    .set_validation_threshold(caller, *threshold, events)
            }
            Transaction::SetValidatorStake { stake } => {
                self.validators.set_validator_stake(caller, *stake, events)
            }
            Transaction::SubmitEntry(fields) => self
                .registry
                .submit_entry(caller, fields.clone(), now, &mut self.token, events)
                .map(|_| ()),
            Transaction::ValidateEntry {
                entry_id,
                approve,
                notes,
            } => self
                .registry
                .validate_entry(
                    caller,
                    *entry_id,
                    *approve,
                    notes,
                    now,
                    &mut self.validators,
                    &mut self.token,
                    events,
                )
                .map(|_| ()),
            Transaction::UpdateEntryStatus { entry_id, status } => self
                .registry
                .update_entry_status(caller, *entry_id, *status, now, &self.validators, events),
            Transaction::GrantRole {
                component,
                role,
                account,
            } => match component {
                Component::ReputationToken => {
                    self.token.grant_role(caller, *role, *account, events)
                }
                Component::ValidatorRegistry => {
                    self.validators.grant_role(caller, *role, *account, events)
                }
            },
            Transaction::RevokeRole {
                component,
                role,
                account,
            } => match component {
                Component::ReputationToken => {
                    self.token.revoke_role(caller, *role, *account, events)
                }
                Component::ValidatorRegistry => {
                    self.validators.revoke_role(caller, *role, *account, events)
                }
            },
        }
    }
}

/// The ledger: world state, event log, and the fixed genesis parameters.
#[derive(Debug, Clone)]
pub struct Ledger {
    state: WorldState,
    log: EventLog,
    block_interval: Duration,
    deployer: Principal,
}

impl Ledger {
    /// Create a ledger at block 0 from `config`.
    ///
    /// # Errors
    /// Returns `InvalidConfig` for a zero threshold or stake, or a block
    /// interval outside `1..=MAX_BLOCK_INTERVAL_SECS`.
    pub fn genesis(config: &LedgerConfig) -> Result<Self, UjuziError> {
        let state = WorldState::genesis(config)?;
        Self::from_state(state, config)
    }

    /// Resume from previously exported state.
    pub(crate) fn from_state(state: WorldState, config: &LedgerConfig) -> Result<Self, UjuziError> {
        Ok(Self {
            state,
            log: EventLog::new(),
            block_interval: block_interval(config)?,
            deployer: Principal::from_label(&config.deployer),
        })
    }

    /// Apply `call` atomically.
    ///
    /// On success the block height advances by one and the call's events are
    /// appended to the log. On error nothing changes.
    ///
    /// # Errors
    /// Any error of the dispatched operation, or `InvalidConfig` once the
    /// next block time would leave the representable date range.
    pub fn execute(&mut self, call: &Call) -> Result<Receipt, UjuziError> {
        let now = self
            .state
            .time
            .checked_add_signed(self.block_interval)
            .ok_or_else(|| {
                UjuziError::InvalidConfig(format!(
                    "block time {} cannot advance by {}s",
                    self.state.time.to_rfc3339(),
                    self.block_interval.num_seconds()
                ))
            })?;
        let mut next = self.state.clone();
        let mut events = Vec::new();

        if let Err(e) = next.apply(call, now, &mut events) {
            tracing::warn!(
                op = call.tx.name(),
                caller = %call.caller.short(),
                error = %e,
                "Call rejected"
            );
            return Err(e);
        }

        next.block += 1;
        next.time = now;
        self.state = next;
        self.log.append(self.state.block, now, &events);
        tracing::debug!(
            block = self.state.block,
            op = call.tx.name(),
            events = events.len(),
            "Call committed"
        );
        Ok(Receipt {
            block: self.state.block,
            timestamp: now,
            events,
        })
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    pub fn token(&self) -> &ReputationToken {
        &self.state.token
    }

    pub fn validators(&self) -> &ValidatorRegistry {
        &self.state.validators
    }

    pub fn registry(&self) -> &KnowledgeRegistry {
        &self.state.registry
    }

    pub fn bank(&self) -> &NativeBank {
        &self.state.bank
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn block(&self) -> u64 {
        self.state.block
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.state.time
    }

    pub fn deployer(&self) -> &Principal {
        &self.deployer
    }

    /// The knowledge registry's own account.
    pub fn registry_account(&self) -> &Principal {
        self.state.registry.account()
    }
}

fn block_interval(config: &LedgerConfig) -> Result<Duration, UjuziError> {
    let secs = config.block_interval_secs;
    if secs == 0 || secs > MAX_BLOCK_INTERVAL_SECS {
        return Err(UjuziError::InvalidConfig(format!(
            "block_interval_secs must be between 1 and {}, got {}",
            MAX_BLOCK_INTERVAL_SECS, secs
        )));
    }
    // Bounded above, so the cast is lossless.
    Ok(Duration::seconds(secs as i64))
}
