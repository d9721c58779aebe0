// crates/ujuzi-registry/src/lib.rs
//
// ujuzi-registry: cultural knowledge entries and their approval lifecycle.
//
// Entries are submitted Pending, collect at most one vote per validator, and
// finalize as Validated or Rejected once either counter reaches the
// validator registry's threshold. Finalization pays out through the
// reputation token.

pub mod entry;
pub mod registry;

pub use entry::{Entry, NewEntry, Vote};
pub use registry::KnowledgeRegistry;
