//! Task record and lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Measurable, TaskId, Timestamp, ValidationError, WorkStatus};

/// Lifecycle status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Returns the wire-format name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A unit of work with an impact/effort rating.
///
/// Immutable once created; status changes produce a replacement record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    /// Expected benefit, 1-5.
    pub impact: u8,
    /// Expected cost, 1-5. Never zero, so impact/effort ratios are defined.
    pub effort: u8,
    pub status: TaskStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Task {
    /// Creates a new pending task, validating title and rating ranges.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        impact: u8,
        effort: u8,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if !(1..=5).contains(&impact) {
            return Err(ValidationError::out_of_range("impact", 1, 5, impact as i32));
        }
        if !(1..=5).contains(&effort) {
            return Err(ValidationError::out_of_range("effort", 1, 5, effort as i32));
        }

        Ok(Self {
            id: TaskId::new(),
            title,
            description: description.into(),
            impact,
            effort,
            status: TaskStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns a copy with the given status and refreshed update time.
    pub fn with_status(&self, status: TaskStatus, now: Timestamp) -> Self {
        Self {
            status,
            updated_at: now,
            ..self.clone()
        }
    }
}

impl Measurable for Task {
    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    fn work_status(&self) -> Option<WorkStatus> {
        Some(match self.status {
            TaskStatus::Pending => WorkStatus::Pending,
            TaskStatus::InProgress => WorkStatus::InProgress,
            TaskStatus::Completed => WorkStatus::Completed,
        })
    }

    fn impact(&self) -> Option<u8> {
        Some(self.impact)
    }
}
