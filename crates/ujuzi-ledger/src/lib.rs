// crates/ujuzi-ledger/src/lib.rs
//
// ujuzi-ledger: the serialized, atomic hosting environment for the Ujuzi
// registry.
//
// Deploys the reputation token, validator registry and knowledge registry at
// genesis, wires the registry's capabilities, and applies calls one at a
// time with all-or-nothing semantics. Native-currency balances, block
// height/time, the event log and state snapshots live here too.

pub mod config;
pub mod ledger;
pub mod log;
pub mod shared;
pub mod snapshot;
pub mod transaction;

pub use config::{LedgerConfig, MAX_BLOCK_INTERVAL_SECS, REGISTRY_ACCOUNT_LABEL};
pub use ledger::{Ledger, WorldState};
pub use log::{EventLog, EventRecord, Receipt};
pub use shared::SharedLedger;
pub use snapshot::{LedgerSnapshot, SCHEMA_VERSION};
pub use transaction::{Call, Transaction};
