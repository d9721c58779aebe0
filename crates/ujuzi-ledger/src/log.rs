// crates/ujuzi-ledger/src/log.rs
//
// Append-only event log and call receipts. Written by the ledger after each
// committed call; nothing in the registry reads it back.

use chrono::{DateTime, Utc};
use serde::Serialize;

use ujuzi_core::event::Event;

/// An event as recorded on the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    /// Position in the log, starting at 0.
    pub sequence: u64,
    pub block: u64,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub event: Event,
}

/// Result of a committed call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub block: u64,
    pub timestamp: DateTime<Utc>,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Default)]
pub struct EventLog {
    records: Vec<EventRecord>,
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record the events of one committed call.
    pub(crate) fn append(&mut self, block: u64, timestamp: DateTime<Utc>, events: &[Event]) {
        for event in events {
            let sequence = self.records.len() as u64;
            self.records.push(EventRecord {
                sequence,
                block,
                timestamp,
                event: event.clone(),
            });
        }
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records with the given event name (e.g. "EntrySubmitted").
    pub fn named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a EventRecord> + 'a {
        self.records.iter().filter(move |r| r.event.name() == name)
    }
}
