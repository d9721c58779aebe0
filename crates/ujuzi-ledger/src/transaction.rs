// crates/ujuzi-ledger/src/transaction.rs
//
// Calls submitted to the ledger. A `Call` carries the authenticated caller,
// the native value attached to it, and one `Transaction`.

use serde::{Deserialize, Serialize};

use ujuzi_core::access::Role;
use ujuzi_core::entry::EntryStatus;
use ujuzi_core::event::Component;
use ujuzi_core::identity::Principal;
use ujuzi_registry::NewEntry;

/// One mutating operation on one component.
///
/// Serialized externally tagged, e.g. `{"validate_entry": {"entry_id": 0,
/// "approve": true}}` or `"apply_as_validator"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transaction {
    // Reputation token
    MintCulturalTokens {
        to: Principal,
        amount: u64,
    },
    BurnCulturalTokens {
        from: Principal,
        amount: u64,
    },
    Transfer {
        to: Principal,
        amount: u64,
    },
    TransferFrom {
        from: Principal,
        to: Principal,
        amount: u64,
    },
    Approve {
        spender: Principal,
        amount: u64,
    },

    // Validator registry
    ApplyAsValidator,
    RemoveValidator {
        validator: Principal,
    },
    UpdateValidatorReputation {
        validator: Principal,
        was_correct: bool,
    },
    SetValidationThreshold {
        threshold: u32,
    },
    SetValidatorStake {
        stake: u128,
    },

    // Knowledge registry
    SubmitEntry(NewEntry),
    ValidateEntry {
        entry_id: u64,
        approve: bool,
        #[serde(default)]
        notes: String,
    },
    UpdateEntryStatus {
        entry_id: u64,
        status: EntryStatus,
    },

    // Capability tables
    GrantRole {
        component: Component,
        role: Role,
        account: Principal,
    },
    RevokeRole {
        component: Component,
        role: Role,
        account: Principal,
    },
}

impl Transaction {
    /// Operation name, for logs and tables.
    pub fn name(&self) -> &'static str {
        match self {
            Transaction::MintCulturalTokens { .. } => "mintCulturalTokens",
            Transaction::BurnCulturalTokens { .. } => "burnCulturalTokens",
            Transaction::Transfer { .. } => "transfer",
            Transaction::TransferFrom { .. } => "transferFrom",
            Transaction::Approve { .. } => "approve",
            Transaction::ApplyAsValidator => "applyAsValidator",
            Transaction::RemoveValidator { .. } => "removeValidator",
            Transaction::UpdateValidatorReputation { .. } => "updateValidatorReputation",
            Transaction::SetValidationThreshold { .. } => "setValidationThreshold",
            Transaction::SetValidatorStake { .. } => "setValidatorStake",
            Transaction::SubmitEntry(_) => "submitEntry",
            Transaction::ValidateEntry { .. } => "validateEntry",
            Transaction::UpdateEntryStatus { .. } => "updateEntryStatus",
            Transaction::GrantRole { .. } => "grantRole",
            Transaction::RevokeRole { .. } => "revokeRole",
        }
    }

    /// Whether the operation accepts attached native value.
    pub fn is_payable(&self) -> bool {
        matches!(self, Transaction::ApplyAsValidator)
    }
}

/// A transaction together with its authenticated sender and attached value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    pub caller: Principal,
    /// Attached native value, in wei.
    #[serde(default)]
    pub value: u128,
    pub tx: Transaction,
}

impl Call {
    pub fn new(caller: Principal, tx: Transaction) -> Self {
        Self {
            caller,
            value: 0,
            tx,
        }
    }

    /// Attach `value` wei.
    pub fn with_value(mut self, value: u128) -> Self {
        self.value = value;
        self
    }
}
