// crates/ujuzi-cli/src/commands/replay.rs
//
// `ujuzi replay --script <file.json>`: run a call script against a fresh
// ledger and show the resulting state.
//
// Script format:
//
//   {
//     "genesis_balances": { "validator1": 20000000000000000 },
//     "calls": [
//       { "caller": "validator1", "value": 10000000000000000, "tx": "apply_as_validator" },
//       { "caller": "alice", "tx": { "submit_entry": { ... } } }
//     ]
//   }
//
// A failing call is reported and the replay continues with the next one.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::output::{format_json, print_section, OutputFormat};
use ujuzi_core::identity::Principal;
use ujuzi_economics::rewards::format_native;
use ujuzi_ledger::{Call, Ledger, LedgerConfig, SharedLedger};
use ujuzi_registry::Entry;

#[derive(Debug, Args)]
pub struct ReplayCmd {
    /// JSON call script.
    #[arg(long)]
    pub script: PathBuf,

    /// Write a state snapshot (JSON) here after the replay.
    #[arg(long)]
    pub snapshot_out: Option<PathBuf>,
}

/// A call script.
#[derive(Debug, Deserialize)]
pub struct ReplayScript {
    /// Extra genesis funding: account label -> wei. Merged over the config.
    #[serde(default)]
    pub genesis_balances: BTreeMap<String, u128>,
    pub calls: Vec<Call>,
}

/// Outcome of one scripted call.
#[derive(Debug, Serialize, Tabled)]
struct CallRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Op")]
    op: String,
    #[tabled(rename = "Caller")]
    caller: String,
    #[tabled(rename = "Block")]
    block: String,
    #[tabled(rename = "Result")]
    result: String,
}

#[derive(Debug, Serialize, Tabled)]
struct EntryRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Language")]
    language: String,
    #[tabled(rename = "Community")]
    community: String,
    #[tabled(rename = "License")]
    license: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Score")]
    score: i64,
    #[tabled(rename = "Votes")]
    votes: usize,
}

#[derive(Debug, Serialize, Tabled)]
struct ValidatorRow {
    #[tabled(rename = "Validator")]
    address: String,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Reputation")]
    reputation: u32,
    #[tabled(rename = "Correct")]
    correct: String,
    #[tabled(rename = "Active")]
    active: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct BalanceRow {
    #[tabled(rename = "Account")]
    account: String,
    #[tabled(rename = "Reputation")]
    reputation: u64,
    #[tabled(rename = "Native")]
    native: String,
}

#[derive(Serialize)]
struct ReplayReport<'a> {
    block: u64,
    calls: &'a [CallRow],
    entries: &'a [Entry],
    validators: &'a [ValidatorRow],
    balances: &'a [BalanceRow],
}

/// Run the replay command.
pub async fn run(
    cmd: &ReplayCmd,
    config: &LedgerConfig,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let script: ReplayScript = serde_json::from_str(&fs::read_to_string(&cmd.script)?)?;

    let mut config = config.clone();
    config.genesis_balances.extend(script.genesis_balances);
    let shared = SharedLedger::new(Ledger::genesis(&config)?);

    let mut calls = Vec::with_capacity(script.calls.len());
    let mut failures = 0usize;
    for (index, call) in script.calls.into_iter().enumerate() {
        let op = call.tx.name().to_string();
        let caller = call.caller.short();
        let row = match shared.submit(call).await {
            Ok(receipt) => CallRow {
                index,
                op,
                caller,
                block: receipt.block.to_string(),
                result: format!("ok ({} events)", receipt.events.len()),
            },
            Err(e) => {
                failures += 1;
                CallRow {
                    index,
                    op,
                    caller,
                    block: "-".to_string(),
                    result: e.to_string(),
                }
            }
        };
        calls.push(row);
    }
    tracing::info!(calls = calls.len(), failures, "Replay finished");

    let ledger = shared.current().await;
    if let Some(path) = &cmd.snapshot_out {
        fs::write(path, ledger.snapshot().to_json()?)?;
        tracing::info!(path = %path.display(), "Snapshot written");
    }

    let entries = ledger.registry().entries();
    let validators = validator_rows(&ledger);
    let balances = balance_rows(&ledger);

    match format {
        OutputFormat::Json => {
            let report = ReplayReport {
                block: ledger.block(),
                calls: &calls,
                entries,
                validators: &validators,
                balances: &balances,
            };
            println!("{}", format_json(&report));
        }
        OutputFormat::Table => {
            println!(
                "Replayed {} calls ({} failed)  |  Block: {}  |  Time: {}",
                calls.len(),
                failures,
                ledger.block(),
                ledger.time().to_rfc3339()
            );
            println!();
            print_section("Calls", &calls);
            let entry_rows: Vec<EntryRow> = entries.iter().map(entry_row).collect();
            print_section("Entries", &entry_rows);
            print_section("Validators", &validators);
            print_section("Balances", &balances);
        }
    }

    Ok(())
}

fn entry_row(entry: &Entry) -> EntryRow {
    EntryRow {
        id: entry.id,
        author: entry.author.short(),
        language: entry.language.clone(),
        community: entry.community.clone(),
        license: entry.license.to_string(),
        status: entry.status.to_string(),
        score: entry.validation_score,
        votes: entry.votes.len(),
    }
}

fn validator_rows(ledger: &Ledger) -> Vec<ValidatorRow> {
    ledger
        .validators()
        .records()
        .map(|v| ValidatorRow {
            address: v.address.short(),
            stake: format_native(v.stake),
            reputation: v.reputation,
            correct: format!("{}/{}", v.correct_validations, v.validation_count),
            active: v.is_active,
        })
        .collect()
}

/// Every account holding reputation or native currency.
fn balance_rows(ledger: &Ledger) -> Vec<BalanceRow> {
    let mut accounts: BTreeMap<Principal, (u64, u128)> = BTreeMap::new();
    for (account, score) in ledger.token().holders() {
        accounts.entry(*account).or_default().0 = score;
    }
    for (account, wei) in ledger.bank().accounts() {
        accounts.entry(*account).or_default().1 = wei;
    }
    accounts
        .into_iter()
        .map(|(account, (reputation, wei))| BalanceRow {
            account: account.short(),
            reputation,
            native: format_native(wei),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_parses() {
        let script: ReplayScript = serde_json::from_str(
            r#"{
                "genesis_balances": {"validator1": 20000000000000000},
                "calls": [
                    {"caller": "validator1", "value": 10000000000000000, "tx": "apply_as_validator"},
                    {"caller": "alice", "tx": {"submit_entry": {
                        "content_hash": "QmSampleCID123456789",
                        "license": "cc_by",
                        "language": "Yoruba",
                        "community": "Ife"
                    }}},
                    {"caller": "validator1", "tx": {"validate_entry": {"entry_id": 0, "approve": true, "notes": "verified with elders"}}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(script.calls.len(), 3);
        assert_eq!(script.genesis_balances["validator1"], 20_000_000_000_000_000);
    }

    #[test]
    fn test_balance_rows_merge_token_and_bank() {
        let mut config = LedgerConfig::default();
        config
            .genesis_balances
            .insert("validator1".to_string(), config.validator_stake_wei);
        let mut ledger = Ledger::genesis(&config).unwrap();
        let alice = Principal::from_label("alice");
        ledger
            .execute(&Call::new(
                alice,
                ujuzi_ledger::Transaction::SubmitEntry(ujuzi_registry::NewEntry {
                    content_hash: "cid".parse().unwrap(),
                    license: ujuzi_core::entry::LicenseType::CcBy,
                    language: "Yoruba".to_string(),
                    community: "Ife".to_string(),
                    atom_hashes: Vec::new(),
                }),
            ))
            .unwrap();

        let rows = balance_rows(&ledger);
        assert_eq!(rows.len(), 2);
        let alice_row = rows.iter().find(|r| r.account == alice.short()).unwrap();
        assert_eq!(alice_row.reputation, 10);
        assert_eq!(alice_row.native, "0");
        let v1 = Principal::from_label("validator1").short();
        let v1_row = rows.iter().find(|r| r.account == v1).unwrap();
        assert_eq!(v1_row.native, "0.01");
    }
}
