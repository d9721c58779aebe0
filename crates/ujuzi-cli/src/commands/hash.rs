// crates/ujuzi-cli/src/commands/hash.rs
//
// `ujuzi hash <path>`: content hash of a local file, as used in
// `submit_entry` calls.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use ujuzi_core::crypto::ContentHash;

#[derive(Debug, Args)]
pub struct HashCmd {
    /// File to hash.
    pub path: PathBuf,
}

/// Run the hash command.
pub async fn run(cmd: &HashCmd) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = fs::read(&cmd.path)?;
    println!("{}", ContentHash::of(&bytes));
    Ok(())
}
