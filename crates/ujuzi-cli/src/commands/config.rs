// crates/ujuzi-cli/src/commands/config.rs
//
// `ujuzi config`: print the effective ledger configuration as TOML.

use ujuzi_ledger::LedgerConfig;

/// Run the config command.
pub async fn run(config: &LedgerConfig) -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", config.to_toml()?);
    Ok(())
}
