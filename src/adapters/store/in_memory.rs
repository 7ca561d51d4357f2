//! In-Memory Workspace Adapter
//!
//! Holds all five collections in memory behind RwLocks. Every mutation
//! builds a fresh collection from the old one and swaps it in, so
//! snapshots taken at any point see a consistent state. Data lives only
//! for the process lifetime.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::foundation::{ConflictId, DecisionId, FeedbackId, MessageId, TaskId, Timestamp};
use crate::domain::records::{
    Conflict, ConflictStatus, Decision, Feedback, FeedbackStatus, Message, Task, TaskStatus,
    WorkspaceSnapshot,
};
use crate::ports::{StoreError, WorkspaceStore};

/// In-memory store for the workspace collections.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkspace {
    tasks: Arc<RwLock<Vec<Task>>>,
    messages: Arc<RwLock<Vec<Message>>>,
    decisions: Arc<RwLock<Vec<Decision>>>,
    conflicts: Arc<RwLock<Vec<Conflict>>>,
    feedbacks: Arc<RwLock<Vec<Feedback>>>,
}

impl InMemoryWorkspace {
    /// Create an empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all collections (useful for tests).
    pub async fn clear(&self) {
        *self.tasks.write().await = Vec::new();
        *self.messages.write().await = Vec::new();
        *self.decisions.write().await = Vec::new();
        *self.conflicts.write().await = Vec::new();
        *self.feedbacks.write().await = Vec::new();
    }

    /// Total number of records across all collections.
    pub async fn total_items(&self) -> usize {
        self.snapshot().await.total_items()
    }
}

#[async_trait]
impl WorkspaceStore for InMemoryWorkspace {
    async fn snapshot(&self) -> WorkspaceSnapshot {
        WorkspaceSnapshot {
            tasks: self.tasks.read().await.clone(),
            messages: self.messages.read().await.clone(),
            decisions: self.decisions.read().await.clone(),
            conflicts: self.conflicts.read().await.clone(),
            feedbacks: self.feedbacks.read().await.clone(),
        }
    }

    // Tasks

    async fn tasks(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }

    async fn add_task(&self, task: Task) -> Result<(), StoreError> {
        let mut guard = self.tasks.write().await;
        let mut next = guard.clone();
        debug!(task_id = %task.id, "Adding task");
        next.push(task);
        *guard = next;
        Ok(())
    }

    async fn update_task_status(
        &self,
        id: TaskId,
        status: TaskStatus,
        now: Timestamp,
    ) -> Result<(), StoreError> {
        let mut guard = self.tasks.write().await;
        if !guard.iter().any(|t| t.id == id) {
            return Err(StoreError::TaskNotFound(id));
        }
        let next: Vec<Task> = guard
            .iter()
            .map(|t| {
                if t.id == id {
                    t.with_status(status, now)
                } else {
                    t.clone()
                }
            })
            .collect();
        *guard = next;
        Ok(())
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), StoreError> {
        let mut guard = self.tasks.write().await;
        let next: Vec<Task> = guard.iter().filter(|t| t.id != id).cloned().collect();
        if next.len() == guard.len() {
            return Err(StoreError::TaskNotFound(id));
        }
        *guard = next;
        Ok(())
    }

    // Messages

    async fn messages(&self) -> Vec<Message> {
        self.messages.read().await.clone()
    }

    async fn add_message(&self, message: Message) -> Result<(), StoreError> {
        let mut guard = self.messages.write().await;
        let mut next = guard.clone();
        debug!(message_id = %message.id, "Adding message");
        next.push(message);
        *guard = next;
        Ok(())
    }

    async fn delete_message(&self, id: MessageId) -> Result<(), StoreError> {
        let mut guard = self.messages.write().await;
        let next: Vec<Message> = guard.iter().filter(|m| m.id != id).cloned().collect();
        if next.len() == guard.len() {
            return Err(StoreError::MessageNotFound(id));
        }
        *guard = next;
        Ok(())
    }

    // Decisions

    async fn decisions(&self) -> Vec<Decision> {
        self.decisions.read().await.clone()
    }

    async fn add_decision(&self, decision: Decision) -> Result<(), StoreError> {
        let mut guard = self.decisions.write().await;
        let mut next = guard.clone();
        debug!(decision_id = %decision.id, "Adding decision");
        next.push(decision);
        *guard = next;
        Ok(())
    }

    async fn delete_decision(&self, id: DecisionId) -> Result<(), StoreError> {
        let mut guard = self.decisions.write().await;
        let next: Vec<Decision> = guard.iter().filter(|d| d.id != id).cloned().collect();
        if next.len() == guard.len() {
            return Err(StoreError::DecisionNotFound(id));
        }
        *guard = next;
        Ok(())
    }

    // Conflicts

    async fn conflicts(&self) -> Vec<Conflict> {
        self.conflicts.read().await.clone()
    }

    async fn add_conflict(&self, conflict: Conflict) -> Result<(), StoreError> {
        let mut guard = self.conflicts.write().await;
        let mut next = guard.clone();
        debug!(conflict_id = %conflict.id, "Adding conflict");
        next.push(conflict);
        *guard = next;
        Ok(())
    }

    async fn update_conflict_status(
        &self,
        id: ConflictId,
        status: ConflictStatus,
        now: Timestamp,
    ) -> Result<(), StoreError> {
        let mut guard = self.conflicts.write().await;
        if !guard.iter().any(|c| c.id == id) {
            return Err(StoreError::ConflictNotFound(id));
        }
        let next: Vec<Conflict> = guard
            .iter()
            .map(|c| {
                if c.id == id {
                    c.with_status(status, now)
                } else {
                    c.clone()
                }
            })
            .collect();
        *guard = next;
        Ok(())
    }

    async fn delete_conflict(&self, id: ConflictId) -> Result<(), StoreError> {
        let mut guard = self.conflicts.write().await;
        let next: Vec<Conflict> = guard.iter().filter(|c| c.id != id).cloned().collect();
        if next.len() == guard.len() {
            return Err(StoreError::ConflictNotFound(id));
        }
        *guard = next;
        Ok(())
    }

    // Feedback

    async fn feedbacks(&self) -> Vec<Feedback> {
        self.feedbacks.read().await.clone()
    }

    async fn add_feedback(&self, feedback: Feedback) -> Result<(), StoreError> {
        let mut guard = self.feedbacks.write().await;
        let mut next = guard.clone();
        debug!(feedback_id = %feedback.id, "Adding feedback");
        next.push(feedback);
        *guard = next;
        Ok(())
    }

    async fn update_feedback_status(
        &self,
        id: FeedbackId,
        status: FeedbackStatus,
        now: Timestamp,
    ) -> Result<(), StoreError> {
        let mut guard = self.feedbacks.write().await;
        if !guard.iter().any(|f| f.id == id) {
            return Err(StoreError::FeedbackNotFound(id));
        }
        let next: Vec<Feedback> = guard
            .iter()
            .map(|f| {
                if f.id == id {
                    f.with_status(status, now)
                } else {
                    f.clone()
                }
            })
            .collect();
        *guard = next;
        Ok(())
    }

    async fn delete_feedback(&self, id: FeedbackId) -> Result<(), StoreError> {
        let mut guard = self.feedbacks.write().await;
        let next: Vec<Feedback> = guard.iter().filter(|f| f.id != id).cloned().collect();
        if next.len() == guard.len() {
            return Err(StoreError::FeedbackNotFound(id));
        }
        *guard = next;
        Ok(())
    }
}
