// crates/ujuzi-cli/src/main.rs
//
// CLI entrypoint for the Ujuzi registry developer tools.
//
// Provides subcommands for replaying call scripts against a fresh ledger,
// deriving account principals, hashing content, and printing the effective
// configuration.

mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use commands::hash::HashCmd;
use commands::principal::PrincipalCmd;
use commands::replay::ReplayCmd;
use output::OutputFormat;
use ujuzi_ledger::LedgerConfig;

/// Ujuzi CLI: developer tools for the cultural knowledge registry.
#[derive(Parser, Debug)]
#[command(
    name = "ujuzi",
    version = "0.1.0",
    about = "Ujuzi CLI: validation and reputation engine for a cultural knowledge registry"
)]
struct Cli {
    /// Ledger configuration file (TOML). Defaults to ~/.ujuzi/config.toml
    /// when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value = "table")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Replay a JSON call script against a fresh ledger.
    Replay(ReplayCmd),

    /// Print the principal derived from an account label.
    Principal(PrincipalCmd),

    /// Print the content hash of a file.
    Hash(HashCmd),

    /// Print the effective configuration as TOML.
    Config,
}

/// Resolve the configuration. A missing file falls back to the defaults;
/// the returned note is logged once tracing is up.
fn load_config(explicit: Option<&PathBuf>) -> (LedgerConfig, Option<String>) {
    let path = match explicit {
        Some(path) => path.clone(),
        None => match dirs::home_dir() {
            Some(home) => {
                let path = home.join(".ujuzi").join("config.toml");
                if !path.exists() {
                    return (LedgerConfig::default(), None);
                }
                path
            }
            None => return (LedgerConfig::default(), None),
        },
    };

    match LedgerConfig::load(&path.to_string_lossy()) {
        Ok(config) => (config, None),
        Err(e) => (
            LedgerConfig::default(),
            Some(format!(
                "Could not load config from {}: {}; using defaults",
                path.display(),
                e
            )),
        ),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let (config, warning) = load_config(cli.config.as_ref());

    // Logs go to stderr so table and JSON output stay clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(warning) = warning {
        tracing::warn!("{}", warning);
    }

    match &cli.command {
        Commands::Replay(cmd) => commands::replay::run(cmd, &config, cli.output).await?,
        Commands::Principal(cmd) => commands::principal::run(cmd).await?,
        Commands::Hash(cmd) => commands::hash::run(cmd).await?,
        Commands::Config => commands::config::run(&config).await?,
    }

    Ok(())
}
