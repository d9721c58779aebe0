// crates/ujuzi-cli/src/commands/principal.rs
//
// `ujuzi principal <label>`: print the principal an account label maps to.

use clap::Args;
use ujuzi_core::identity::Principal;

#[derive(Debug, Args)]
pub struct PrincipalCmd {
    /// Account label (e.g. "validator1") or 0x-prefixed principal.
    pub label: String,
}

/// Run the principal command.
pub async fn run(cmd: &PrincipalCmd) -> Result<(), Box<dyn std::error::Error>> {
    let principal: Principal = cmd.label.parse()?;
    println!("{}", principal);
    Ok(())
}
