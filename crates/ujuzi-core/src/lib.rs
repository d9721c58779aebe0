// crates/ujuzi-core/src/lib.rs
//
// ujuzi-core: Core types, traits, and hashing primitives for the Ujuzi
// cultural-knowledge registry.
//
// This is the leaf crate that all other crates in the workspace depend on.
// It defines account identities, content hashes, the per-component capability
// table, the event taxonomy, the protocol error type, and the trait seams
// through which the knowledge registry reaches the validator registry and the
// reputation token.

pub mod access;
pub mod crypto;
pub mod entry;
pub mod error;
pub mod event;
pub mod identity;
pub mod traits;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use ujuzi_core::Principal;`

pub use access::{AccessControl, Role};
pub use crypto::ContentHash;
pub use entry::{EntryStatus, LicenseType};
pub use error::{ErrorKind, UjuziError};
pub use event::{Component, Event};
pub use identity::Principal;
pub use traits::{RewardLedger, ValidatorDirectory};
