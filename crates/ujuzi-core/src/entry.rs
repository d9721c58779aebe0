// crates/ujuzi-core/src/entry.rs
//
// Enumerations shared between the knowledge registry and its callers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::UjuziError;

/// License under which a knowledge entry is published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseType {
    CcBy,
    CcByNc,
    CcBySa,
    CommunityOnly,
    ResearchOnly,
}

impl LicenseType {
    /// Wire code, in declaration order.
    pub fn code(self) -> u8 {
        match self {
            LicenseType::CcBy => 0,
            LicenseType::CcByNc => 1,
            LicenseType::CcBySa => 2,
            LicenseType::CommunityOnly => 3,
            LicenseType::ResearchOnly => 4,
        }
    }

    pub fn from_code(code: u8) -> Result<Self, UjuziError> {
        match code {
            0 => Ok(LicenseType::CcBy),
            1 => Ok(LicenseType::CcByNc),
            2 => Ok(LicenseType::CcBySa),
            3 => Ok(LicenseType::CommunityOnly),
            4 => Ok(LicenseType::ResearchOnly),
            other => Err(UjuziError::Serialization(format!(
                "unknown license code {}",
                other
            ))),
        }
    }
}

impl fmt::Display for LicenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LicenseType::CcBy => "CC_BY",
            LicenseType::CcByNc => "CC_BY_NC",
            LicenseType::CcBySa => "CC_BY_SA",
            LicenseType::CommunityOnly => "CommunityOnly",
            LicenseType::ResearchOnly => "ResearchOnly",
        };
        f.write_str(s)
    }
}

/// Lifecycle of a knowledge entry.
///
///   Pending --> Validated
///      |
///      +-----> Rejected
///
///   any state --> Archived   (admin override only)
///
/// Validated and Rejected are terminal for voting; Archived is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    Pending,
    Validated,
    Rejected,
    Archived,
}

impl EntryStatus {
    /// Wire code: Pending=0, Validated=1, Rejected=2, Archived=3.
    pub fn code(self) -> u8 {
        match self {
            EntryStatus::Pending => 0,
            EntryStatus::Validated => 1,
            EntryStatus::Rejected => 2,
            EntryStatus::Archived => 3,
        }
    }

    pub fn from_code(code: u8) -> Result<Self, UjuziError> {
        match code {
            0 => Ok(EntryStatus::Pending),
            1 => Ok(EntryStatus::Validated),
            2 => Ok(EntryStatus::Rejected),
            3 => Ok(EntryStatus::Archived),
            other => Err(UjuziError::Serialization(format!(
                "unknown entry status code {}",
                other
            ))),
        }
    }

    /// Whether the entry still accepts validator votes.
    pub fn is_open_for_votes(self) -> bool {
        self == EntryStatus::Pending
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntryStatus::Pending => "Pending",
            EntryStatus::Validated => "Validated",
            EntryStatus::Rejected => "Rejected",
            EntryStatus::Archived => "Archived",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(EntryStatus::Pending.code(), 0);
        assert_eq!(EntryStatus::Validated.code(), 1);
        assert_eq!(EntryStatus::Rejected.code(), 2);
        assert_eq!(EntryStatus::Archived.code(), 3);
        assert_eq!(EntryStatus::from_code(3).unwrap(), EntryStatus::Archived);
        assert!(EntryStatus::from_code(4).is_err());
    }

    #[test]
    fn test_only_pending_is_open() {
        assert!(EntryStatus::Pending.is_open_for_votes());
        assert!(!EntryStatus::Validated.is_open_for_votes());
        assert!(!EntryStatus::Rejected.is_open_for_votes());
        assert!(!EntryStatus::Archived.is_open_for_votes());
    }

    #[test]
    fn test_license_codes() {
        assert_eq!(LicenseType::from_code(1).unwrap(), LicenseType::CcByNc);
        assert_eq!(LicenseType::ResearchOnly.code(), 4);
        assert!(LicenseType::from_code(9).is_err());
        assert_eq!(LicenseType::CcByNc.to_string(), "CC_BY_NC");
    }
}
