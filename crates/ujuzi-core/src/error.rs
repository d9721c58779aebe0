// crates/ujuzi-core/src/error.rs

use thiserror::Error;

use crate::crypto::ContentHash;
use crate::entry::EntryStatus;
use crate::identity::Principal;

/// Protocol-wide error types for the Ujuzi registry.
///
/// Every failed operation aborts with exactly one of these; no state is
/// mutated on the failing path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UjuziError {
    /// Caller lacks the capability or role the operation requires.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Referenced entry or principal record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The content hash is already registered.
    #[error("CID already exists: {0}")]
    DuplicateContent(ContentHash),

    /// The caller already holds an active validator record.
    #[error("Already a validator: {0}")]
    AlreadyValidator(Principal),

    /// The validator already voted on this entry.
    #[error("Already validated: validator {validator} on entry {entry_id}")]
    AlreadyValidated { entry_id: u64, validator: Principal },

    /// Attached stake is below the required validator stake.
    #[error("Insufficient stake: required {required} wei, attached {attached} wei")]
    InsufficientStake { required: u128, attached: u128 },

    /// Burn amount exceeds the account's reputation balance.
    #[error("Insufficient balance: {account} holds {balance}, requested {requested}")]
    InsufficientBalance {
        account: Principal,
        balance: u64,
        requested: u64,
    },

    /// The entry is no longer Pending and cannot receive votes.
    #[error("Entry {entry_id} is finalized ({status})")]
    EntryFinalized { entry_id: u64, status: EntryStatus },

    /// Administrative configuration value rejected.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Reputation tokens cannot change hands.
    #[error("Cultural tokens are non-transferable")]
    NonTransferable,

    /// Zero or otherwise meaningless token amount.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The caller's native balance cannot cover the value attached to a call.
    #[error("Insufficient funds: {account} holds {balance} wei, attached {attached} wei")]
    InsufficientFunds {
        account: Principal,
        balance: u128,
        attached: u128,
    },

    /// Serialization/deserialization error (snapshots, scripts).
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration file could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),
}

/// Stable discriminant of [`UjuziError`], for asserting on the exact
/// failure condition without matching payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Unauthorized,
    NotFound,
    DuplicateContent,
    AlreadyValidator,
    AlreadyValidated,
    InsufficientStake,
    InsufficientBalance,
    EntryFinalized,
    InvalidConfig,
    NonTransferable,
    InvalidAmount,
    InsufficientFunds,
    Serialization,
    Config,
}

impl UjuziError {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            UjuziError::Unauthorized(_) => ErrorKind::Unauthorized,
            UjuziError::NotFound(_) => ErrorKind::NotFound,
            UjuziError::DuplicateContent(_) => ErrorKind::DuplicateContent,
            UjuziError::AlreadyValidator(_) => ErrorKind::AlreadyValidator,
            UjuziError::AlreadyValidated { .. } => ErrorKind::AlreadyValidated,
            UjuziError::InsufficientStake { .. } => ErrorKind::InsufficientStake,
            UjuziError::InsufficientBalance { .. } => ErrorKind::InsufficientBalance,
            UjuziError::EntryFinalized { .. } => ErrorKind::EntryFinalized,
            UjuziError::InvalidConfig(_) => ErrorKind::InvalidConfig,
            UjuziError::NonTransferable => ErrorKind::NonTransferable,
            UjuziError::InvalidAmount(_) => ErrorKind::InvalidAmount,
            UjuziError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            UjuziError::Serialization(_) => ErrorKind::Serialization,
            UjuziError::Config(_) => ErrorKind::Config,
        }
    }
}

impl From<serde_json::Error> for UjuziError {
    fn from(e: serde_json::Error) -> Self {
        UjuziError::Serialization(e.to_string())
    }
}
