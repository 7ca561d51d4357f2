//! Feedback record with type, priority, and action items.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{FeedbackId, Measurable, Timestamp, ValidationError, WorkStatus};

/// Category of a feedback entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackType {
    Improvement,
    Praise,
    Concern,
    Suggestion,
}

impl FeedbackType {
    /// Returns the wire-format name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackType::Improvement => "improvement",
            FeedbackType::Praise => "praise",
            FeedbackType::Concern => "concern",
            FeedbackType::Suggestion => "suggestion",
        }
    }
}

impl fmt::Display for FeedbackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Urgency of acting on a feedback entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackPriority {
    Low,
    Medium,
    High,
}

impl FeedbackPriority {
    /// Returns the wire-format name of this priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackPriority::Low => "low",
            FeedbackPriority::Medium => "medium",
            FeedbackPriority::High => "high",
        }
    }
}

impl fmt::Display for FeedbackPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a feedback entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl FeedbackStatus {
    /// Returns the wire-format name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackStatus::Pending => "pending",
            FeedbackStatus::InProgress => "in_progress",
            FeedbackStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A tracked piece of team feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: FeedbackId,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: FeedbackType,
    pub priority: FeedbackPriority,
    pub action_items: Vec<String>,
    pub status: FeedbackStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Feedback {
    /// Creates a new pending feedback entry.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        kind: FeedbackType,
        priority: FeedbackPriority,
        action_items: Vec<String>,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }

        Ok(Self {
            id: FeedbackId::new(),
            title,
            description: description.into(),
            kind,
            priority,
            action_items,
            status: FeedbackStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns a copy with the given status and refreshed update time.
    pub fn with_status(&self, status: FeedbackStatus, now: Timestamp) -> Self {
        Self {
            status,
            updated_at: now,
            ..self.clone()
        }
    }
}

impl Measurable for Feedback {
    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    fn work_status(&self) -> Option<WorkStatus> {
        Some(match self.status {
            FeedbackStatus::Pending => WorkStatus::Pending,
            FeedbackStatus::InProgress => WorkStatus::InProgress,
            FeedbackStatus::Completed => WorkStatus::Completed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> Timestamp {
        Timestamp::from_unix_secs(1_705_276_800)
    }

    #[test]
    fn new_creates_pending_feedback() {
        let feedback = Feedback::new(
            "Retro note",
            "Demos ran long",
            FeedbackType::Improvement,
            FeedbackPriority::Medium,
            vec!["Timebox demos".to_string()],
            now(),
        )
        .unwrap();

        assert_eq!(feedback.status, FeedbackStatus::Pending);
        assert_eq!(feedback.kind, FeedbackType::Improvement);
        assert_eq!(feedback.action_items.len(), 1);
    }

    #[test]
    fn new_rejects_empty_title() {
        let result = Feedback::new(
            "",
            "d",
            FeedbackType::Praise,
            FeedbackPriority::Low,
            vec![],
            now(),
        );
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn kind_serializes_under_type_key() {
        let feedback = Feedback::new(
            "t",
            "d",
            FeedbackType::Suggestion,
            FeedbackPriority::High,
            vec![],
            now(),
        )
        .unwrap();

        let json = serde_json::to_string(&feedback).unwrap();
        assert!(json.contains("\"type\":\"suggestion\""));
        assert!(json.contains("\"priority\":\"high\""));
    }

    #[test]
    fn priority_ordering_works() {
        assert!(FeedbackPriority::Low < FeedbackPriority::Medium);
        assert!(FeedbackPriority::Medium < FeedbackPriority::High);
    }
}
