// crates/ujuzi-registry/src/entry.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ujuzi_core::crypto::ContentHash;
use ujuzi_core::entry::{EntryStatus, LicenseType};
use ujuzi_core::identity::Principal;

/// Caller-supplied fields of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    /// Content-addressed identifier produced by the external pinning step.
    pub content_hash: ContentHash,
    pub license: LicenseType,
    pub language: String,
    pub community: String,
    /// Ordered references to structured knowledge fragments.
    #[serde(default)]
    pub atom_hashes: Vec<ContentHash>,
}

/// One validator's decision on one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub validator: Principal,
    pub approve: bool,
    pub notes: String,
    pub cast_at: DateTime<Utc>,
}

/// A submitted knowledge entry. Entries are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Sequential, never reused.
    pub id: u64,
    pub content_hash: ContentHash,
    pub author: Principal,
    pub license: LicenseType,
    pub language: String,
    pub community: String,
    pub atom_hashes: Vec<ContentHash>,
    pub status: EntryStatus,
    /// approvals - rejections.
    pub validation_score: i64,
    pub approvals: u32,
    pub rejections: u32,
    /// Votes in the order they were cast; at most one per validator.
    pub votes: Vec<Vote>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    pub(crate) fn new(id: u64, author: Principal, fields: NewEntry, now: DateTime<Utc>) -> Self {
        Self {
            id,
            content_hash: fields.content_hash,
            author,
            license: fields.license,
            language: fields.language,
            community: fields.community,
            atom_hashes: fields.atom_hashes,
            status: EntryStatus::Pending,
            validation_score: 0,
            approvals: 0,
            rejections: 0,
            votes: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_voted(&self, validator: &Principal) -> bool {
        self.votes.iter().any(|v| v.validator == *validator)
    }

    pub fn vote_of(&self, validator: &Principal) -> Option<&Vote> {
        self.votes.iter().find(|v| v.validator == *validator)
    }

    /// Append a vote and move the counters. The caller has already checked
    /// that `vote.validator` has not voted.
    pub(crate) fn record_vote(&mut self, vote: Vote) {
        if vote.approve {
            self.approvals += 1;
            self.validation_score += 1;
        } else {
            self.rejections += 1;
            self.validation_score -= 1;
        }
        self.updated_at = vote.cast_at;
        self.votes.push(vote);
    }

    /// The outcome reached under `threshold`, if any. Approvals are checked
    /// first; a single vote can only push one counter over the line, so the
    /// order only matters if the threshold was lowered mid-vote.
    pub fn outcome(&self, threshold: u32) -> Option<EntryStatus> {
        if self.approvals >= threshold {
            Some(EntryStatus::Validated)
        } else if self.rejections >= threshold {
            Some(EntryStatus::Rejected)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> Entry {
        Entry::new(
            0,
            Principal::from_label("author"),
            NewEntry {
                content_hash: ContentHash::of(b"QmSample"),
                license: LicenseType::CcByNc,
                language: "Swahili".to_string(),
                community: "Kikuyu".to_string(),
                atom_hashes: vec![ContentHash::of(b"atom1")],
            },
            Utc::now(),
        )
    }

    fn vote(label: &str, approve: bool) -> Vote {
        Vote {
            validator: Principal::from_label(label),
            approve,
            notes: String::new(),
            cast_at: Utc::now(),
        }
    }

    #[test]
    fn test_counters_track_votes() {
        let mut e = entry();
        e.record_vote(vote("v1", true));
        e.record_vote(vote("v2", false));
        e.record_vote(vote("v3", true));
        assert_eq!(e.approvals, 2);
        assert_eq!(e.rejections, 1);
        assert_eq!(e.validation_score, 1);
        assert!(e.has_voted(&Principal::from_label("v2")));
        assert!(!e.has_voted(&Principal::from_label("v4")));
        assert_eq!(e.vote_of(&Principal::from_label("v2")).map(|v| v.approve), Some(false));
    }

    #[test]
    fn test_outcome_thresholds_are_independent() {
        let mut e = entry();
        e.record_vote(vote("v1", false));
        e.record_vote(vote("v2", true));
        assert_eq!(e.outcome(2), None);
        e.record_vote(vote("v3", false));
        assert_eq!(e.outcome(2), Some(EntryStatus::Rejected));
        assert_eq!(e.outcome(1), Some(EntryStatus::Validated));
    }

    #[test]
    fn test_new_entry_is_pending() {
        let e = entry();
        assert_eq!(e.status, EntryStatus::Pending);
        assert_eq!(e.validation_score, 0);
        assert!(e.votes.is_empty());
    }
}
