// crates/ujuzi-registry/src/registry.rs
//
// The knowledge registry: entry submission and the threshold-based
// multi-validator approval state machine.
//
//   submit_entry    -> Pending, seed credit minted to the author
//   validate_entry  -> one vote per validator; approve/reject counters are
//                      compared against the same threshold and whichever
//                      reaches it first finalizes the entry
//   update_entry_status -> admin override (used for Archived)
//
// The registry reaches the validator set and the reputation token only
// through the `ValidatorDirectory` and `RewardLedger` seams, acting as its
// own account. Its own state is written last in every operation, so a failed
// sub-call leaves the registry untouched; rolling back effects already
// applied to the other components is the host's job (see ujuzi-ledger).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entry::{Entry, NewEntry, Vote};
use ujuzi_core::crypto::ContentHash;
use ujuzi_core::entry::EntryStatus;
use ujuzi_core::error::UjuziError;
use ujuzi_core::event::Event;
use ujuzi_core::identity::Principal;
use ujuzi_core::traits::{RewardLedger, ValidatorDirectory};
use ujuzi_economics::rewards::RewardSchedule;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeRegistry {
    /// The registry's own principal, used as the caller of sub-calls.
    account: Principal,
    rewards: RewardSchedule,
    entries: Vec<Entry>,
    by_content: BTreeMap<ContentHash, u64>,
    by_author: BTreeMap<Principal, Vec<u64>>,
}

impl KnowledgeRegistry {
    /// Deploy a registry acting as `account`.
    ///
    /// `account` must be granted Minter and Burner on the token and
    /// Registrar on the validator registry before entries can be settled.
    pub fn new(account: Principal, rewards: RewardSchedule) -> Self {
        Self {
            account,
            rewards,
            entries: Vec::new(),
            by_content: BTreeMap::new(),
            by_author: BTreeMap::new(),
        }
    }

    pub fn account(&self) -> &Principal {
        &self.account
    }

    pub fn rewards(&self) -> &RewardSchedule {
        &self.rewards
    }

    // -----------------------------------------------------------------
    // Submission
    // -----------------------------------------------------------------

    /// Register a new entry authored by `caller` and mint its seed credit.
    ///
    /// Returns the new entry id.
    ///
    /// # Errors
    /// - `DuplicateContent` if the content hash is already registered.
    /// - any error of the seed mint (e.g. `Unauthorized` if the registry
    ///   lacks Minter).
    pub fn submit_entry<R: RewardLedger>(
        &mut self,
        caller: &Principal,
        fields: NewEntry,
        now: DateTime<Utc>,
        token: &mut R,
        events: &mut Vec<Event>,
    ) -> Result<u64, UjuziError> {
        if self.by_content.contains_key(&fields.content_hash) {
            return Err(UjuziError::DuplicateContent(fields.content_hash));
        }

        let id = self.entries.len() as u64;
        if self.rewards.submission_reward > 0 {
            token.mint(&self.account, caller, self.rewards.submission_reward, events)?;
        }

        let content_hash = fields.content_hash;
        self.entries.push(Entry::new(id, *caller, fields, now));
        self.by_content.insert(content_hash, id);
        self.by_author.entry(*caller).or_default().push(id);

        tracing::info!(entry_id = id, author = %caller.short(), %content_hash, "Entry submitted");
        events.push(Event::EntrySubmitted {
            entry_id: id,
            content_hash,
            author: *caller,
        });
        Ok(id)
    }

    // -----------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------

    /// Cast `caller`'s vote on `entry_id`.
    ///
    /// Returns the entry status after the vote (Pending unless this vote
    /// reached the threshold).
    ///
    /// # Errors
    /// - `NotFound` if the entry does not exist.
    /// - `Unauthorized` if `caller` is not an active validator.
    /// - `AlreadyValidated` if `caller` already voted on this entry.
    /// - `EntryFinalized` if the entry is no longer Pending.
    /// - any error of the settlement sub-calls.
    #[allow(clippy::too_many_arguments)]
    pub fn validate_entry<D: ValidatorDirectory, R: RewardLedger>(
        &mut self,
        caller: &Principal,
        entry_id: u64,
        approve: bool,
        notes: &str,
        now: DateTime<Utc>,
        directory: &mut D,
        token: &mut R,
        events: &mut Vec<Event>,
    ) -> Result<EntryStatus, UjuziError> {
        let current = self.get_entry(entry_id)?;
        if !directory.is_validator(caller) {
            return Err(UjuziError::Unauthorized("Not a validator".to_string()));
        }
        if current.has_voted(caller) {
            return Err(UjuziError::AlreadyValidated {
                entry_id,
                validator: *caller,
            });
        }
        if !current.status.is_open_for_votes() {
            return Err(UjuziError::EntryFinalized {
                entry_id,
                status: current.status,
            });
        }

        // Work on a copy; it replaces the stored entry only once every
        // sub-call has succeeded.
        let mut entry = current.clone();
        entry.record_vote(Vote {
            validator: *caller,
            approve,
            notes: notes.to_string(),
            cast_at: now,
        });
        tracing::debug!(entry_id, validator = %caller.short(), approve, "Vote recorded");
        events.push(Event::EntryValidated {
            entry_id,
            approved: approve,
            validator: *caller,
        });

        if let Some(outcome) = entry.outcome(directory.validation_threshold()) {
            self.settle(&mut entry, outcome, now, directory, token, events)?;
        }

        let status = entry.status;
        self.entries[entry_id as usize] = entry;
        Ok(status)
    }

    /// Finalize `entry` as `outcome` and pay out.
    ///
    /// Validated: the author receives the author reward.
    /// Rejected: the author's seed credit is clawed back, clamped to the
    /// author's current balance.
    /// Either way every voter's reputation records whether its vote matched
    /// the outcome, and those that matched receive the validator reward.
    fn settle<D: ValidatorDirectory, R: RewardLedger>(
        &self,
        entry: &mut Entry,
        outcome: EntryStatus,
        now: DateTime<Utc>,
        directory: &mut D,
        token: &mut R,
        events: &mut Vec<Event>,
    ) -> Result<(), UjuziError> {
        match outcome {
            EntryStatus::Validated => {
                if self.rewards.author_reward > 0 {
                    token.mint(&self.account, &entry.author, self.rewards.author_reward, events)?;
                }
            }
            EntryStatus::Rejected => {
                let penalty = self.rewards.clamped_penalty(token.balance_of(&entry.author));
                if penalty > 0 {
                    token.burn(&self.account, &entry.author, penalty, events)?;
                }
            }
            EntryStatus::Pending | EntryStatus::Archived => {}
        }

        let approved = outcome == EntryStatus::Validated;
        for vote in &entry.votes {
            let was_correct = vote.approve == approved;
            directory.update_validator_reputation(&self.account, &vote.validator, was_correct, events)?;
            if was_correct && self.rewards.validator_reward > 0 {
                token.mint(&self.account, &vote.validator, self.rewards.validator_reward, events)?;
            }
        }

        entry.status = outcome;
        entry.updated_at = now;
        tracing::info!(
            entry_id = entry.id,
            status = %outcome,
            approvals = entry.approvals,
            rejections = entry.rejections,
            "Entry finalized"
        );
        events.push(Event::EntryStatusChanged {
            entry_id: entry.id,
            status: outcome,
        });
        Ok(())
    }

    // -----------------------------------------------------------------
    // Administration
    // -----------------------------------------------------------------

    /// Overwrite the status of `entry_id`. No rewards move.
    ///
    /// # Errors
    /// - `Unauthorized` unless `caller` is an admin of the validator registry.
    /// - `NotFound` if the entry does not exist.
    pub fn update_entry_status<D: ValidatorDirectory>(
        &mut self,
        caller: &Principal,
        entry_id: u64,
        status: EntryStatus,
        now: DateTime<Utc>,
        directory: &D,
        events: &mut Vec<Event>,
    ) -> Result<(), UjuziError> {
        if !directory.is_admin(caller) {
            return Err(UjuziError::Unauthorized(
                "Only admin can update status".to_string(),
            ));
        }
        let entry = self
            .entries
            .get_mut(entry_id as usize)
            .ok_or_else(|| UjuziError::NotFound(format!("entry {} does not exist", entry_id)))?;

        let previous = entry.status;
        entry.status = status;
        entry.updated_at = now;
        tracing::info!(entry_id, from = %previous, to = %status, "Entry status overridden");
        events.push(Event::EntryStatusChanged { entry_id, status });
        Ok(())
    }

    // -----------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------

    /// # Errors
    /// Returns `NotFound` if the entry does not exist.
    pub fn get_entry(&self, entry_id: u64) -> Result<&Entry, UjuziError> {
        usize::try_from(entry_id)
            .ok()
            .and_then(|i| self.entries.get(i))
            .ok_or_else(|| UjuziError::NotFound(format!("entry {} does not exist", entry_id)))
    }

    pub fn get_total_entries(&self) -> u64 {
        self.entries.len() as u64
    }

    /// Entry ids submitted by `author`, in submission order.
    pub fn get_author_entries(&self, author: &Principal) -> &[u64] {
        self.by_author
            .get(author)
            .map(|ids| ids.as_slice())
            .unwrap_or(&[])
    }

    pub fn entry_by_content_hash(&self, hash: &ContentHash) -> Option<&Entry> {
        self.by_content
            .get(hash)
            .and_then(|id| self.entries.get(*id as usize))
    }

    /// # Errors
    /// Returns `NotFound` if the entry does not exist.
    pub fn votes(&self, entry_id: u64) -> Result<&[Vote], UjuziError> {
        self.get_entry(entry_id).map(|e| e.votes.as_slice())
    }

    pub fn entries_with_status(&self, status: EntryStatus) -> Vec<&Entry> {
        self.entries.iter().filter(|e| e.status == status).collect()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ujuzi_core::access::Role;
    use ujuzi_core::entry::LicenseType;
    use ujuzi_core::error::ErrorKind;
    use ujuzi_economics::token::ReputationToken;
    use ujuzi_validators::ValidatorRegistry;

    struct Fixture {
        registry: KnowledgeRegistry,
        validators: ValidatorRegistry,
        token: ReputationToken,
        owner: Principal,
        validator1: Principal,
        validator2: Principal,
        contributor1: Principal,
        contributor2: Principal,
        events: Vec<Event>,
    }

    fn sample_entry(cid: &str) -> NewEntry {
        NewEntry {
            content_hash: cid.parse().unwrap(),
            license: LicenseType::CcByNc,
            language: "Swahili".to_string(),
            community: "Kikuyu".to_string(),
            atom_hashes: vec![ContentHash::of(b"atom1"), ContentHash::of(b"atom2")],
        }
    }

    fn setup() -> Fixture {
        let owner = Principal::from_label("owner");
        let account = Principal::from_label("ujuzi-registry");
        let mut events = Vec::new();

        let mut token = ReputationToken::new(owner);
        token.grant_role(&owner, Role::Minter, account, &mut events).unwrap();
        token.grant_role(&owner, Role::Burner, account, &mut events).unwrap();

        let mut validators = ValidatorRegistry::with_defaults(owner);
        validators
            .grant_role(&owner, Role::Registrar, account, &mut events)
            .unwrap();

        let validator1 = Principal::from_label("validator1");
        let validator2 = Principal::from_label("validator2");
        let stake = validators.validator_stake();
        for v in [validator1, validator2] {
            validators
                .apply_as_validator(&v, stake, Utc::now(), &mut events)
                .unwrap();
        }

        Fixture {
            registry: KnowledgeRegistry::new(account, RewardSchedule::default()),
            validators,
            token,
            owner,
            validator1,
            validator2,
            contributor1: Principal::from_label("contributor1"),
            contributor2: Principal::from_label("contributor2"),
            events: Vec::new(),
        }
    }

    fn submit(f: &mut Fixture, author: Principal, cid: &str) -> Result<u64, UjuziError> {
        f.registry
            .submit_entry(&author, sample_entry(cid), Utc::now(), &mut f.token, &mut f.events)
    }

    fn vote(f: &mut Fixture, who: Principal, id: u64, approve: bool) -> Result<EntryStatus, UjuziError> {
        f.registry.validate_entry(
            &who,
            id,
            approve,
            "notes",
            Utc::now(),
            &mut f.validators,
            &mut f.token,
            &mut f.events,
        )
    }

    fn set_threshold(f: &mut Fixture, n: u32) {
        f.validators
            .set_validation_threshold(&f.owner, n, &mut f.events)
            .unwrap();
    }

    #[test]
    fn test_starts_empty() {
        let f = setup();
        assert_eq!(f.registry.get_total_entries(), 0);
    }

    #[test]
    fn test_submit_entry() {
        let mut f = setup();
        let c1 = f.contributor1;
        let id = submit(&mut f, c1, "QmSampleCID123456789").unwrap();
        assert_eq!(id, 0);
        assert_eq!(f.registry.get_total_entries(), 1);

        let entry = f.registry.get_entry(0).unwrap();
        assert_eq!(entry.author, c1);
        assert_eq!(entry.language, "Swahili");
        assert_eq!(entry.community, "Kikuyu");
        assert_eq!(entry.license, LicenseType::CcByNc);
        assert_eq!(entry.atom_hashes.len(), 2);
        assert_eq!(entry.status, EntryStatus::Pending);
        assert!(matches!(
            f.events.last(),
            Some(Event::EntrySubmitted { entry_id: 0, .. })
        ));
    }

    #[test]
    fn test_submission_mints_seed_credit() {
        let mut f = setup();
        let c1 = f.contributor1;
        submit(&mut f, c1, "QmSampleCID123456789").unwrap();
        assert_eq!(f.token.cultural_score(&c1), 10);
    }

    #[test]
    fn test_duplicate_content_rejected_for_any_author() {
        let mut f = setup();
        let (c1, c2) = (f.contributor1, f.contributor2);
        submit(&mut f, c1, "QmSampleCID123456789").unwrap();
        let err = submit(&mut f, c2, "QmSampleCID123456789").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateContent);
        let err = submit(&mut f, c1, "QmSampleCID123456789").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateContent);
        assert_eq!(f.registry.get_total_entries(), 1);
        assert_eq!(f.token.balance_of(&c2), 0);
    }

    #[test]
    fn test_author_index_and_lookup() {
        let mut f = setup();
        let (c1, c2) = (f.contributor1, f.contributor2);
        submit(&mut f, c1, "cid-a").unwrap();
        submit(&mut f, c2, "cid-b").unwrap();
        submit(&mut f, c1, "cid-c").unwrap();
        assert_eq!(f.registry.get_author_entries(&c1), &[0, 2]);
        assert_eq!(f.registry.get_author_entries(&c2), &[1]);
        assert!(f.registry.get_author_entries(&f.owner).is_empty());

        let hash: ContentHash = "cid-b".parse().unwrap();
        assert_eq!(f.registry.entry_by_content_hash(&hash).map(|e| e.id), Some(1));
    }

    #[test]
    fn test_submit_without_minter_leaves_registry_untouched() {
        let mut f = setup();
        let account = *f.registry.account();
        f.token
            .revoke_role(&f.owner, Role::Minter, account, &mut f.events)
            .unwrap();
        let c1 = f.contributor1;
        let err = submit(&mut f, c1, "cid-a").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert_eq!(f.registry.get_total_entries(), 0);
        assert!(f.registry.entry_by_content_hash(&"cid-a".parse().unwrap()).is_none());
    }

    #[test]
    fn test_validator_vote_moves_score() {
        let mut f = setup();
        let (c1, v1) = (f.contributor1, f.validator1);
        submit(&mut f, c1, "cid-a").unwrap();
        let status = vote(&mut f, v1, 0, true).unwrap();
        assert_eq!(status, EntryStatus::Pending);
        let entry = f.registry.get_entry(0).unwrap();
        assert_eq!(entry.validation_score, 1);
        assert_eq!(entry.votes[0].notes, "notes");
        assert!(f
            .events
            .iter()
            .any(|e| matches!(e, Event::EntryValidated { approved: true, .. })));
    }

    #[test]
    fn test_second_vote_by_same_validator_rejected() {
        let mut f = setup();
        let (c1, v1) = (f.contributor1, f.validator1);
        submit(&mut f, c1, "cid-a").unwrap();
        vote(&mut f, v1, 0, true).unwrap();
        let err = vote(&mut f, v1, 0, true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyValidated);
        let err = vote(&mut f, v1, 0, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyValidated);
        assert_eq!(f.registry.get_entry(0).unwrap().validation_score, 1);
    }

    #[test]
    fn test_non_validator_cannot_vote() {
        let mut f = setup();
        let (c1, c2) = (f.contributor1, f.contributor2);
        submit(&mut f, c1, "cid-a").unwrap();
        let err = vote(&mut f, c2, 0, true).unwrap_err();
        assert_eq!(err, UjuziError::Unauthorized("Not a validator".to_string()));
    }

    #[test]
    fn test_vote_on_unknown_entry() {
        let mut f = setup();
        let v1 = f.validator1;
        assert_eq!(vote(&mut f, v1, 7, true).unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_threshold_reached_validates() {
        let mut f = setup();
        set_threshold(&mut f, 2);
        let (c1, v1, v2) = (f.contributor1, f.validator1, f.validator2);
        submit(&mut f, c1, "cid-a").unwrap();
        vote(&mut f, v1, 0, true).unwrap();
        let status = vote(&mut f, v2, 0, true).unwrap();
        assert_eq!(status, EntryStatus::Validated);
        assert_eq!(f.registry.get_entry(0).unwrap().status, EntryStatus::Validated);
    }

    #[test]
    fn test_validation_rewards() {
        let mut f = setup();
        set_threshold(&mut f, 1);
        let (c1, v1) = (f.contributor1, f.validator1);
        submit(&mut f, c1, "cid-a").unwrap();
        let author_before = f.token.cultural_score(&c1);
        let validator_before = f.token.cultural_score(&v1);

        vote(&mut f, v1, 0, true).unwrap();

        assert_eq!(f.token.cultural_score(&c1), author_before + 50);
        assert_eq!(f.token.cultural_score(&v1), validator_before + 5);
        let info = f.validators.get_validator_info(&v1).unwrap();
        assert_eq!(info.validation_count, 1);
        assert_eq!(info.correct_validations, 1);
    }

    #[test]
    fn test_rejection_claws_back_seed_and_rewards_rejecters() {
        let mut f = setup();
        set_threshold(&mut f, 2);
        let (c1, v1, v2) = (f.contributor1, f.validator1, f.validator2);
        submit(&mut f, c1, "cid-a").unwrap();
        assert_eq!(f.token.balance_of(&c1), 10);

        vote(&mut f, v1, 0, false).unwrap();
        let status = vote(&mut f, v2, 0, false).unwrap();
        assert_eq!(status, EntryStatus::Rejected);
        assert_eq!(f.token.balance_of(&c1), 0);
        assert_eq!(f.token.balance_of(&v1), 5);
        assert_eq!(f.token.balance_of(&v2), 5);
        assert_eq!(f.registry.get_entry(0).unwrap().validation_score, -2);
    }

    #[test]
    fn test_dissenting_vote_lowers_reputation() {
        let mut f = setup();
        set_threshold(&mut f, 2);
        let v3 = Principal::from_label("validator3");
        let stake = f.validators.validator_stake();
        f.validators
            .apply_as_validator(&v3, stake, Utc::now(), &mut f.events)
            .unwrap();

        let (c1, v1, v2) = (f.contributor1, f.validator1, f.validator2);
        submit(&mut f, c1, "cid-a").unwrap();
        vote(&mut f, v1, 0, true).unwrap();
        vote(&mut f, v3, 0, false).unwrap();
        vote(&mut f, v2, 0, true).unwrap();

        let dissenter = f.validators.get_validator_info(&v3).unwrap();
        assert_eq!(dissenter.validation_count, 1);
        assert_eq!(dissenter.reputation, 0);
        assert_eq!(f.token.balance_of(&v3), 0);
        assert_eq!(f.validators.get_validator_info(&v1).unwrap().reputation, 100);
    }

    #[test]
    fn test_finalized_entry_refuses_votes() {
        let mut f = setup();
        set_threshold(&mut f, 1);
        let (c1, v1, v2) = (f.contributor1, f.validator1, f.validator2);
        submit(&mut f, c1, "cid-a").unwrap();
        vote(&mut f, v1, 0, true).unwrap();

        let err = vote(&mut f, v2, 0, false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EntryFinalized);
        let entry = f.registry.get_entry(0).unwrap();
        assert_eq!(entry.votes.len(), 1);
        assert_eq!(entry.status, EntryStatus::Validated);
    }

    #[test]
    fn test_admin_archives_entry() {
        let mut f = setup();
        set_threshold(&mut f, 1);
        let (c1, v1, v2, owner) = (f.contributor1, f.validator1, f.validator2, f.owner);
        submit(&mut f, c1, "cid-a").unwrap();
        vote(&mut f, v1, 0, true).unwrap();

        f.registry
            .update_entry_status(&owner, 0, EntryStatus::Archived, Utc::now(), &f.validators, &mut f.events)
            .unwrap();
        assert_eq!(f.registry.get_entry(0).unwrap().status, EntryStatus::Archived);
        assert!(matches!(
            f.events.last(),
            Some(Event::EntryStatusChanged { status: EntryStatus::Archived, .. })
        ));

        let err = vote(&mut f, v2, 0, true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EntryFinalized);
    }

    #[test]
    fn test_non_admin_cannot_update_status() {
        let mut f = setup();
        let (c1, c2) = (f.contributor1, f.contributor2);
        submit(&mut f, c1, "cid-a").unwrap();
        let err = f
            .registry
            .update_entry_status(&c2, 0, EntryStatus::Archived, Utc::now(), &f.validators, &mut f.events)
            .unwrap_err();
        assert_eq!(
            err,
            UjuziError::Unauthorized("Only admin can update status".to_string())
        );
        assert_eq!(f.registry.get_entry(0).unwrap().status, EntryStatus::Pending);
    }

    #[test]
    fn test_update_status_unknown_entry() {
        let mut f = setup();
        let owner = f.owner;
        let err = f
            .registry
            .update_entry_status(&owner, 3, EntryStatus::Archived, Utc::now(), &f.validators, &mut f.events)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_failed_settlement_keeps_entry_pending() {
        let mut f = setup();
        set_threshold(&mut f, 1);
        let account = *f.registry.account();
        let (c1, v1) = (f.contributor1, f.validator1);
        submit(&mut f, c1, "cid-a").unwrap();
        f.validators
            .revoke_role(&f.owner, Role::Registrar, account, &mut f.events)
            .unwrap();

        let err = vote(&mut f, v1, 0, true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        let entry = f.registry.get_entry(0).unwrap();
        assert_eq!(entry.status, EntryStatus::Pending);
        assert!(entry.votes.is_empty());
        assert_eq!(entry.validation_score, 0);
    }

    #[test]
    fn test_entries_with_status() {
        let mut f = setup();
        set_threshold(&mut f, 1);
        let (c1, v1) = (f.contributor1, f.validator1);
        submit(&mut f, c1, "cid-a").unwrap();
        submit(&mut f, c1, "cid-b").unwrap();
        vote(&mut f, v1, 1, true).unwrap();
        let pending = f.registry.entries_with_status(EntryStatus::Pending);
        let validated = f.registry.entries_with_status(EntryStatus::Validated);
        assert_eq!(pending.len(), 1);
        assert_eq!(validated[0].id, 1);
        assert_eq!(f.registry.votes(1).unwrap().len(), 1);
    }

    #[test]
    fn test_registry_survives_json() {
        let mut f = setup();
        let c1 = f.contributor1;
        submit(&mut f, c1, "cid-a").unwrap();
        let json = serde_json::to_string(&f.registry).unwrap();
        let back: KnowledgeRegistry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get_total_entries(), 1);
        assert_eq!(back.get_author_entries(&c1), &[0]);
        assert!(back.entry_by_content_hash(&"cid-a".parse().unwrap()).is_some());
    }
}
