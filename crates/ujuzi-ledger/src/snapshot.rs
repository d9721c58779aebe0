// crates/ujuzi-ledger/src/snapshot.rs
//
// Versioned JSON export/import of the world state. The event log is not
// part of a snapshot.
//
// The layout of `WorldState` is tied to `SCHEMA_VERSION`. A snapshot with any
// other version is refused rather than decoded on a best-effort basis; a
// layout change must bump the version and add an explicit migration here.

use serde::{Deserialize, Serialize};

use crate::config::LedgerConfig;
use crate::ledger::{Ledger, WorldState};
use ujuzi_core::error::UjuziError;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub schema_version: u32,
    pub state: WorldState,
}

#[derive(Deserialize)]
struct SnapshotHeader {
    schema_version: u32,
}

impl LedgerSnapshot {
    pub fn to_json(&self) -> Result<String, UjuziError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// # Errors
    /// Returns `Serialization` for malformed JSON or an unknown schema
    /// version.
    pub fn from_json(json: &str) -> Result<Self, UjuziError> {
        let header: SnapshotHeader = serde_json::from_str(json)?;
        if header.schema_version != SCHEMA_VERSION {
            return Err(UjuziError::Serialization(format!(
                "unsupported snapshot schema version {} (expected {})",
                header.schema_version, SCHEMA_VERSION
            )));
        }
        Ok(serde_json::from_str(json)?)
    }
}

impl Ledger {
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            schema_version: SCHEMA_VERSION,
            state: self.state().clone(),
        }
    }

    /// Resume from `snapshot` with a fresh event log. `config` supplies the
    /// block interval and deployer label; its genesis fields are ignored.
    ///
    /// # Errors
    /// Returns `Serialization` if the snapshot has an unknown schema version,
    /// or `InvalidConfig` for an out-of-range block interval.
    pub fn restore(snapshot: LedgerSnapshot, config: &LedgerConfig) -> Result<Self, UjuziError> {
        if snapshot.schema_version != SCHEMA_VERSION {
            return Err(UjuziError::Serialization(format!(
                "unsupported snapshot schema version {}",
                snapshot.schema_version
            )));
        }
        tracing::info!(block = snapshot.state.block, "Ledger restored from snapshot");
        Ledger::from_state(snapshot.state, config)
    }
}
