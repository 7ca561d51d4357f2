//! Cross-entity reporting status and the measurement seam.
//!
//! Every entity type keeps its own closed status enum; the aggregate
//! metrics only ever count the pending/in-progress/completed triple.
//! `WorkStatus` is that reporting triple, and `Measurable` is the trait
//! the metrics functions consume. Statuses outside the triple (message
//! delivery states, decision approval states, conflict active/resolved)
//! map to `None` and are ignored by distributions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Timestamp;

/// The reporting triple shared by tasks, decisions, conflicts, and feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    Pending,
    InProgress,
    Completed,
}

impl WorkStatus {
    /// Returns the wire-format name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkStatus::Pending => "pending",
            WorkStatus::InProgress => "in_progress",
            WorkStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The seam between domain records and the aggregate metrics.
///
/// Implementations never expose mutable state; the metrics are pure
/// reductions over snapshots.
pub trait Measurable {
    /// When the record was created.
    fn created_at(&self) -> Timestamp;

    /// When the record was last replaced in its collection.
    fn updated_at(&self) -> Timestamp;

    /// The record's position in the reporting triple, if it has one.
    fn work_status(&self) -> Option<WorkStatus>;

    /// The record's impact rating, for types that carry one.
    fn impact(&self) -> Option<u8> {
        None
    }
}
