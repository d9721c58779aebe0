// crates/ujuzi-cli/src/commands/mod.rs
//
// Command module declarations for the Ujuzi CLI.

pub mod config;
pub mod hash;
pub mod principal;
pub mod replay;
