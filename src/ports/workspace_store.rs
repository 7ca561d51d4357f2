//! Workspace store port - the application-state container contract.
//!
//! The store owns the five collections. Views read owned snapshots and
//! issue typed mutation commands; nothing else holds collection state.
//! Implementations must follow the replace-never-mutate discipline: every
//! mutation produces a fresh collection from the old one, so a snapshot
//! taken concurrently never observes a half-applied change.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{ConflictId, DecisionId, FeedbackId, MessageId, TaskId, Timestamp};
use crate::domain::records::{
    Conflict, ConflictStatus, Decision, Feedback, FeedbackStatus, Message, Task, TaskStatus,
    WorkspaceSnapshot,
};

/// Errors returned by store mutations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("Message not found: {0}")]
    MessageNotFound(MessageId),

    #[error("Decision not found: {0}")]
    DecisionNotFound(DecisionId),

    #[error("Conflict not found: {0}")]
    ConflictNotFound(ConflictId),

    #[error("Feedback not found: {0}")]
    FeedbackNotFound(FeedbackId),
}

/// Port for the process-wide workspace state container.
///
/// Mirrors the view-facing command set exactly: every collection supports
/// add and delete; status updates exist only where a view issues them
/// (tasks, conflicts, feedback). Messages and decisions are replaced by
/// delete-and-recreate in the views, so the port carries no update for
/// them.
#[async_trait]
pub trait WorkspaceStore: Send + Sync {
    /// Returns an owned point-in-time copy of all collections.
    async fn snapshot(&self) -> WorkspaceSnapshot;

    // Tasks

    async fn tasks(&self) -> Vec<Task>;

    async fn add_task(&self, task: Task) -> Result<(), StoreError>;

    /// Replaces the task's status, refreshing its update time to `now`.
    async fn update_task_status(
        &self,
        id: TaskId,
        status: TaskStatus,
        now: Timestamp,
    ) -> Result<(), StoreError>;

    async fn delete_task(&self, id: TaskId) -> Result<(), StoreError>;

    // Messages

    async fn messages(&self) -> Vec<Message>;

    async fn add_message(&self, message: Message) -> Result<(), StoreError>;

    async fn delete_message(&self, id: MessageId) -> Result<(), StoreError>;

    // Decisions

    async fn decisions(&self) -> Vec<Decision>;

    async fn add_decision(&self, decision: Decision) -> Result<(), StoreError>;

    async fn delete_decision(&self, id: DecisionId) -> Result<(), StoreError>;

    // Conflicts

    async fn conflicts(&self) -> Vec<Conflict>;

    async fn add_conflict(&self, conflict: Conflict) -> Result<(), StoreError>;

    /// Replaces the conflict's status, refreshing its update time to `now`.
    async fn update_conflict_status(
        &self,
        id: ConflictId,
        status: ConflictStatus,
        now: Timestamp,
    ) -> Result<(), StoreError>;

    async fn delete_conflict(&self, id: ConflictId) -> Result<(), StoreError>;

    // Feedback

    async fn feedbacks(&self) -> Vec<Feedback>;

    async fn add_feedback(&self, feedback: Feedback) -> Result<(), StoreError>;

    /// Replaces the feedback's status, refreshing its update time to `now`.
    async fn update_feedback_status(
        &self,
        id: FeedbackId,
        status: FeedbackStatus,
        now: Timestamp,
    ) -> Result<(), StoreError>;

    async fn delete_feedback(&self, id: FeedbackId) -> Result<(), StoreError>;
}
