//! Conflict record and resolution status.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ConflictId, Measurable, Timestamp, ValidationError, WorkStatus};

/// Lifecycle status of a conflict.
///
/// Carries both the pending/in-progress/completed triple and the
/// active/resolved pair; the two vocabularies coexist in the workflow and
/// are not reconciled. Only the triple is counted by aggregate
/// distributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConflictStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Active,
    Resolved,
}

impl ConflictStatus {
    /// Returns the wire-format name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictStatus::Pending => "pending",
            ConflictStatus::InProgress => "in_progress",
            ConflictStatus::Completed => "completed",
            ConflictStatus::Active => "active",
            ConflictStatus::Resolved => "resolved",
        }
    }
}

impl fmt::Display for ConflictStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A tracked disagreement between named parties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub id: ConflictId,
    pub title: String,
    pub description: String,
    /// The people or groups involved, in the order they were named.
    pub parties: Vec<String>,
    pub root_causes: Vec<String>,
    pub resolution_steps: Vec<String>,
    pub status: ConflictStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Conflict {
    /// Creates a new pending conflict; at least one party is required.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        parties: Vec<String>,
        root_causes: Vec<String>,
        resolution_steps: Vec<String>,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if parties.iter().all(|p| p.trim().is_empty()) {
            return Err(ValidationError::empty_field("parties"));
        }

        Ok(Self {
            id: ConflictId::new(),
            title,
            description: description.into(),
            parties,
            root_causes,
            resolution_steps,
            status: ConflictStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns a copy with the given status and refreshed update time.
    pub fn with_status(&self, status: ConflictStatus, now: Timestamp) -> Self {
        Self {
            status,
            updated_at: now,
            ..self.clone()
        }
    }
}

impl Measurable for Conflict {
    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    fn work_status(&self) -> Option<WorkStatus> {
        match self.status {
            ConflictStatus::Pending => Some(WorkStatus::Pending),
            ConflictStatus::InProgress => Some(WorkStatus::InProgress),
            ConflictStatus::Completed => Some(WorkStatus::Completed),
            ConflictStatus::Active | ConflictStatus::Resolved => None,
        }
    }
}
