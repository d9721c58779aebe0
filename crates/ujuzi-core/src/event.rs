// crates/ujuzi-core/src/event.rs
//
// Events emitted for external indexers and UIs. The core appends them to a
// buffer supplied by the caller and never reads them back.

use serde::{Deserialize, Serialize};

use crate::access::Role;
use crate::crypto::ContentHash;
use crate::entry::EntryStatus;
use crate::identity::Principal;

/// Which component's capability table a role change applies to. The
/// knowledge registry has none; it defers to the validator registry's admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    ReputationToken,
    ValidatorRegistry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    ValidatorAdded {
        validator: Principal,
        stake: u128,
    },
    ValidatorRemoved {
        validator: Principal,
    },
    ValidatorReputationUpdated {
        validator: Principal,
        reputation: u32,
    },
    ValidationThresholdUpdated {
        threshold: u32,
    },
    ValidatorStakeUpdated {
        stake: u128,
    },
    EntrySubmitted {
        entry_id: u64,
        content_hash: ContentHash,
        author: Principal,
    },
    EntryValidated {
        entry_id: u64,
        approved: bool,
        validator: Principal,
    },
    EntryStatusChanged {
        entry_id: u64,
        status: EntryStatus,
    },
    CulturalTokensMinted {
        account: Principal,
        amount: u64,
    },
    CulturalTokensBurned {
        account: Principal,
        amount: u64,
    },
    RoleGranted {
        component: Component,
        role: Role,
        account: Principal,
        sender: Principal,
    },
    RoleRevoked {
        component: Component,
        role: Role,
        account: Principal,
        sender: Principal,
    },
}

impl Event {
    /// Short event name, matching the external event signature.
    pub fn name(&self) -> &'static str {
        match self {
            Event::ValidatorAdded { .. } => "ValidatorAdded",
            Event::ValidatorRemoved { .. } => "ValidatorRemoved",
            Event::ValidatorReputationUpdated { .. } => "ValidatorReputationUpdated",
            Event::ValidationThresholdUpdated { .. } => "ValidationThresholdUpdated",
            Event::ValidatorStakeUpdated { .. } => "ValidatorStakeUpdated",
            Event::EntrySubmitted { .. } => "EntrySubmitted",
            Event::EntryValidated { .. } => "EntryValidated",
            Event::EntryStatusChanged { .. } => "EntryStatusChanged",
            Event::CulturalTokensMinted { .. } => "CulturalTokensMinted",
            Event::CulturalTokensBurned { .. } => "CulturalTokensBurned",
            Event::RoleGranted { .. } => "RoleGranted",
            Event::RoleRevoked { .. } => "RoleRevoked",
        }
    }
}
