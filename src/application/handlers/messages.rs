//! Message command handlers.
//!
//! Messages are append-and-delete only; the store carries no status
//! update for them.

use std::sync::Arc;

use tracing::info;

use super::CommandError;
use crate::domain::foundation::{MessageId, Timestamp};
use crate::domain::records::Message;
use crate::ports::WorkspaceStore;

/// Command to record a new message.
#[derive(Debug, Clone)]
pub struct CreateMessageCommand {
    pub title: String,
    pub content: String,
    pub clarity: u8,
    pub impact: u8,
    pub urgency: u8,
    pub now: Timestamp,
}

/// Handler for recording messages.
pub struct CreateMessageHandler {
    store: Arc<dyn WorkspaceStore>,
}

impl CreateMessageHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CreateMessageCommand) -> Result<Message, CommandError> {
        let message = Message::new(
            cmd.title,
            cmd.content,
            cmd.clarity,
            cmd.impact,
            cmd.urgency,
            cmd.now,
        )?;
        self.store.add_message(message.clone()).await?;
        info!(message_id = %message.id, "Recorded message");
        Ok(message)
    }
}

/// Command to delete a message.
#[derive(Debug, Clone)]
pub struct DeleteMessageCommand {
    pub id: MessageId,
}

/// Handler for message deletion.
pub struct DeleteMessageHandler {
    store: Arc<dyn WorkspaceStore>,
}

impl DeleteMessageHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteMessageCommand) -> Result<(), CommandError> {
        self.store.delete_message(cmd.id).await?;
        info!(message_id = %cmd.id, "Deleted message");
        Ok(())
    }
}
