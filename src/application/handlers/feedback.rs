//! Feedback command handlers.

use std::sync::Arc;

use tracing::info;

use super::CommandError;
use crate::domain::foundation::{FeedbackId, Timestamp};
use crate::domain::records::{Feedback, FeedbackPriority, FeedbackStatus, FeedbackType};
use crate::ports::WorkspaceStore;

/// Command to record a new feedback entry.
#[derive(Debug, Clone)]
pub struct CreateFeedbackCommand {
    pub title: String,
    pub description: String,
    pub kind: FeedbackType,
    pub priority: FeedbackPriority,
    pub action_items: Vec<String>,
    pub now: Timestamp,
}

/// Handler for recording feedback.
pub struct CreateFeedbackHandler {
    store: Arc<dyn WorkspaceStore>,
}

impl CreateFeedbackHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CreateFeedbackCommand) -> Result<Feedback, CommandError> {
        let feedback = Feedback::new(
            cmd.title,
            cmd.description,
            cmd.kind,
            cmd.priority,
            cmd.action_items,
            cmd.now,
        )?;
        self.store.add_feedback(feedback.clone()).await?;
        info!(feedback_id = %feedback.id, kind = %feedback.kind, "Recorded feedback");
        Ok(feedback)
    }
}

/// Command to change a feedback entry's status.
#[derive(Debug, Clone)]
pub struct UpdateFeedbackStatusCommand {
    pub id: FeedbackId,
    pub status: FeedbackStatus,
    pub now: Timestamp,
}

/// Handler for feedback status updates.
pub struct UpdateFeedbackStatusHandler {
    store: Arc<dyn WorkspaceStore>,
}

impl UpdateFeedbackStatusHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: UpdateFeedbackStatusCommand) -> Result<(), CommandError> {
        self.store
            .update_feedback_status(cmd.id, cmd.status, cmd.now)
            .await?;
        info!(feedback_id = %cmd.id, status = %cmd.status, "Updated feedback status");
        Ok(())
    }
}

/// Command to delete a feedback entry.
#[derive(Debug, Clone)]
pub struct DeleteFeedbackCommand {
    pub id: FeedbackId,
}

/// Handler for feedback deletion.
pub struct DeleteFeedbackHandler {
    store: Arc<dyn WorkspaceStore>,
}

impl DeleteFeedbackHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteFeedbackCommand) -> Result<(), CommandError> {
        self.store.delete_feedback(cmd.id).await?;
        info!(feedback_id = %cmd.id, "Deleted feedback");
        Ok(())
    }
}
