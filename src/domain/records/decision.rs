//! Decision record with weighted criteria and scored options.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::{
    DecisionId, Measurable, Timestamp, ValidationError, Weight, WorkStatus,
};

/// Lifecycle status of a decision.
///
/// `Approved` and `Rejected` sit outside the reporting triple and are
/// ignored by aggregate distributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Approved,
    Rejected,
}

impl DecisionStatus {
    /// Returns the wire-format name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionStatus::Pending => "pending",
            DecisionStatus::InProgress => "in_progress",
            DecisionStatus::Completed => "completed",
            DecisionStatus::Approved => "approved",
            DecisionStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One candidate answer to a decision.
///
/// `scores` maps criterion ids to ratings. Any subset of the decision's
/// criteria may be present; a missing entry reads as 0. Ordered keys keep
/// report serialization byte-stable across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionOption {
    pub id: String,
    pub title: String,
    pub description: String,
    pub scores: BTreeMap<String, f64>,
}

impl DecisionOption {
    /// Creates an option with no scores yet.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            scores: BTreeMap::new(),
        }
    }

    /// Returns a copy with a score set for the given criterion.
    pub fn with_score(mut self, criterion_id: impl Into<String>, score: f64) -> Self {
        self.scores.insert(criterion_id.into(), score);
        self
    }

    /// The score recorded against a criterion, or 0 when absent.
    pub fn score_for(&self, criterion_id: &str) -> f64 {
        self.scores.get(criterion_id).copied().unwrap_or(0.0)
    }
}

/// A weighted criterion against which options are scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionCriterion {
    pub id: String,
    pub title: String,
    pub weight: Weight,
}

impl DecisionCriterion {
    /// Creates a criterion, validating the weight range.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        weight: u8,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: id.into(),
            title: title.into(),
            weight: Weight::try_new(weight)?,
        })
    }
}

/// A tracked decision with ordered options and weighted criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub id: DecisionId,
    pub title: String,
    pub description: String,
    pub options: Vec<DecisionOption>,
    pub criteria: Vec<DecisionCriterion>,
    pub status: DecisionStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Decision {
    /// Creates a new pending decision.
    ///
    /// Options and criteria may be empty; the composite score of a
    /// criteria-less decision is defined as 0.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        options: Vec<DecisionOption>,
        criteria: Vec<DecisionCriterion>,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }

        Ok(Self {
            id: DecisionId::new(),
            title,
            description: description.into(),
            options,
            criteria,
            status: DecisionStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }
}

impl Measurable for Decision {
    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    fn work_status(&self) -> Option<WorkStatus> {
        match self.status {
            DecisionStatus::Pending => Some(WorkStatus::Pending),
            DecisionStatus::InProgress => Some(WorkStatus::InProgress),
            DecisionStatus::Completed => Some(WorkStatus::Completed),
            DecisionStatus::Approved | DecisionStatus::Rejected => None,
        }
    }
}
