// crates/ujuzi-ledger/src/config.rs
//
// Genesis and runtime configuration for the Ujuzi ledger.
// Loaded from a TOML file or populated with the protocol defaults.

use std::collections::BTreeMap;
use std::fs;

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use ujuzi_economics::rewards::RewardSchedule;
use ujuzi_economics::staking::DEFAULT_VALIDATOR_STAKE;
use ujuzi_validators::DEFAULT_VALIDATION_THRESHOLD;

/// Label of the knowledge registry's own account.
pub const REGISTRY_ACCOUNT_LABEL: &str = "ujuzi-knowledge-registry";

/// Ledger configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Same-decision votes needed to finalize an entry.
    #[serde(default = "default_validation_threshold")]
    pub validation_threshold: u32,

    /// Stake required to join the validator set, in wei.
    #[serde(
        default = "default_validator_stake_wei",
        serialize_with = "serialize_wei",
        deserialize_with = "deserialize_wei"
    )]
    pub validator_stake_wei: u128,

    /// Block time advance per successful call. Must be in
    /// `1..=MAX_BLOCK_INTERVAL_SECS`.
    #[serde(default = "default_block_interval_secs")]
    pub block_interval_secs: u64,

    /// Time of block 0 (RFC 3339).
    #[serde(default = "default_genesis_time")]
    pub genesis_time: DateTime<Utc>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Account label of the deployer, who administers every component.
    #[serde(default = "default_deployer")]
    pub deployer: String,

    /// Reputation amounts paid by the knowledge registry.
    #[serde(default)]
    pub rewards: RewardSchedule,

    /// Native balances funded at genesis: account label -> wei.
    #[serde(
        default,
        serialize_with = "serialize_wei_map",
        deserialize_with = "deserialize_wei_map"
    )]
    pub genesis_balances: BTreeMap<String, u128>,
}

fn default_validation_threshold() -> u32 {
    DEFAULT_VALIDATION_THRESHOLD
}

fn default_validator_stake_wei() -> u128 {
    DEFAULT_VALIDATOR_STAKE
}

/// Upper bound on `block_interval_secs`: one day.
pub const MAX_BLOCK_INTERVAL_SECS: u64 = 86_400;

fn default_block_interval_secs() -> u64 {
    12
}

fn default_genesis_time() -> DateTime<Utc> {
    // 2024-01-01T00:00:00Z
    DateTime::from_timestamp(1_704_067_200, 0).unwrap_or_default()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_deployer() -> String {
    "deployer".to_string()
}

// TOML integers stop at i64, so wei amounts above that are written as
// decimal strings. Both forms are accepted on input.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WeiValue {
    Int(u64),
    Text(String),
}

impl WeiValue {
    fn from_wei(wei: u128) -> Self {
        match i64::try_from(wei) {
            Ok(n) => WeiValue::Int(n as u64),
            Err(_) => WeiValue::Text(wei.to_string()),
        }
    }

    fn into_wei(self) -> Result<u128, String> {
        match self {
            WeiValue::Int(n) => Ok(u128::from(n)),
            WeiValue::Text(s) => s.trim().parse::<u128>().map_err(|e| e.to_string()),
        }
    }
}

fn serialize_wei<S: Serializer>(wei: &u128, serializer: S) -> Result<S::Ok, S::Error> {
    WeiValue::from_wei(*wei).serialize(serializer)
}

fn deserialize_wei<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
    WeiValue::deserialize(deserializer)?
        .into_wei()
        .map_err(serde::de::Error::custom)
}

fn serialize_wei_map<S: Serializer>(
    balances: &BTreeMap<String, u128>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(balances.len()))?;
    for (label, wei) in balances {
        map.serialize_entry(label, &WeiValue::from_wei(*wei))?;
    }
    map.end()
}

fn deserialize_wei_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, u128>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, WeiValue>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(label, value)| {
            let wei = value.into_wei().map_err(|e| {
                serde::de::Error::custom(format!("balance of '{}': {}", label, e))
            })?;
            Ok((label, wei))
        })
        .collect()
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            validation_threshold: default_validation_threshold(),
            validator_stake_wei: default_validator_stake_wei(),
            block_interval_secs: default_block_interval_secs(),
            genesis_time: default_genesis_time(),
            log_level: default_log_level(),
            deployer: default_deployer(),
            rewards: RewardSchedule::default(),
            genesis_balances: BTreeMap::new(),
        }
    }
}

impl LedgerConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: LedgerConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Render as TOML, e.g. to print the defaults.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
