//! Domain records - the five tracked collections.
//!
//! Records are immutable values; a status change produces a replacement
//! record and the owning store swaps it into a fresh collection snapshot.
//! Each record type keeps its own closed status enum (see
//! `foundation::WorkStatus` for the cross-entity reporting triple).

mod conflict;
mod decision;
mod feedback;
mod message;
mod task;

pub use conflict::{Conflict, ConflictStatus};
pub use decision::{Decision, DecisionCriterion, DecisionOption, DecisionStatus};
pub use feedback::{Feedback, FeedbackPriority, FeedbackStatus, FeedbackType};
pub use message::{Message, MessageStatus};
pub use task::{Task, TaskStatus};

use serde::{Deserialize, Serialize};

/// An owned point-in-time copy of every collection in the workspace.
///
/// Read-side queries (analytics, reports, timeline) operate on snapshots
/// so scoring never observes a half-applied mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSnapshot {
    pub tasks: Vec<Task>,
    pub messages: Vec<Message>,
    pub decisions: Vec<Decision>,
    pub conflicts: Vec<Conflict>,
    pub feedbacks: Vec<Feedback>,
}

impl WorkspaceSnapshot {
    /// Total number of records across all five collections.
    pub fn total_items(&self) -> usize {
        self.tasks.len()
            + self.messages.len()
            + self.decisions.len()
            + self.conflicts.len()
            + self.feedbacks.len()
    }

    /// True when every collection is empty.
    pub fn is_empty(&self) -> bool {
        self.total_items() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;

    #[test]
    fn empty_snapshot_reports_empty() {
        let snapshot = WorkspaceSnapshot::default();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.total_items(), 0);
    }

    #[test]
    fn total_items_sums_collections() {
        let now = Timestamp::from_unix_secs(1_705_276_800);
        let snapshot = WorkspaceSnapshot {
            tasks: vec![Task::new("t", "d", 3, 3, now).unwrap()],
            messages: vec![Message::new("m", "c", 5, 5, 5, now).unwrap()],
            ..Default::default()
        };
        assert_eq!(snapshot.total_items(), 2);
        assert!(!snapshot.is_empty());
    }
}
