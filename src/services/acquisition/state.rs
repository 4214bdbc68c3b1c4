//! Acquisition State Machine
//!
//! `Idle -> Loading -> {Success, Error}` guarded by a generation counter.
//! Only the ticket handed out by the most recent `begin` may resolve; older
//! tickets are discarded silently.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use prompt_feed_core::Prompt;

use crate::services::tag_index::TagIndex;

/// Acquisition status exposed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AcquisitionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error { message: String },
}

impl AcquisitionStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Generation token identifying one acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Whether a resolution was applied or dropped as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Discarded,
}

/// Full record set, its tag index and the acquisition status.
#[derive(Debug, Default)]
pub struct AcquisitionState {
    status: AcquisitionStatus,
    generation: u64,
    records: Arc<Vec<Prompt>>,
    tags: Arc<TagIndex>,
}

impl AcquisitionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new acquisition. Clears any error and empties the record set
    /// so nothing from the previous acquisition is shown while loading.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.status = AcquisitionStatus::Loading;
        self.records = Arc::new(Vec::new());
        self.tags = Arc::new(TagIndex::default());
        Ticket(self.generation)
    }

    /// Whether `ticket` belongs to the latest acquisition.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    pub fn resolve_success(&mut self, ticket: Ticket, records: Vec<Prompt>) -> Resolution {
        if !self.is_current(ticket) {
            return Resolution::Discarded;
        }
        self.replace_records(records);
        self.status = AcquisitionStatus::Success;
        Resolution::Applied
    }

    /// Error resolution. The record set is cleared so no stale records are
    /// shown next to the error.
    pub fn resolve_error(&mut self, ticket: Ticket, message: impl Into<String>) -> Resolution {
        if !self.is_current(ticket) {
            return Resolution::Discarded;
        }
        self.replace_records(Vec::new());
        self.status = AcquisitionStatus::Error {
            message: message.into(),
        };
        Resolution::Applied
    }

    fn replace_records(&mut self, records: Vec<Prompt>) {
        self.tags = Arc::new(TagIndex::derive(&records));
        self.records = Arc::new(records);
    }

    pub fn status(&self) -> &AcquisitionStatus {
        &self.status
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The full record set (cheap clone).
    pub fn records(&self) -> Arc<Vec<Prompt>> {
        Arc::clone(&self.records)
    }

    pub fn tag_index(&self) -> Arc<TagIndex> {
        Arc::clone(&self.tags)
    }
}
