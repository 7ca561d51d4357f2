//! Conflict command handlers.

use std::sync::Arc;

use tracing::info;

use super::CommandError;
use crate::domain::foundation::{ConflictId, Timestamp};
use crate::domain::records::{Conflict, ConflictStatus};
use crate::ports::WorkspaceStore;

/// Command to log a new conflict.
#[derive(Debug, Clone)]
pub struct CreateConflictCommand {
    pub title: String,
    pub description: String,
    pub parties: Vec<String>,
    pub root_causes: Vec<String>,
    pub resolution_steps: Vec<String>,
    pub now: Timestamp,
}

/// Handler for logging conflicts.
pub struct CreateConflictHandler {
    store: Arc<dyn WorkspaceStore>,
}

impl CreateConflictHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CreateConflictCommand) -> Result<Conflict, CommandError> {
        let conflict = Conflict::new(
            cmd.title,
            cmd.description,
            cmd.parties,
            cmd.root_causes,
            cmd.resolution_steps,
            cmd.now,
        )?;
        self.store.add_conflict(conflict.clone()).await?;
        info!(conflict_id = %conflict.id, parties = conflict.parties.len(), "Logged conflict");
        Ok(conflict)
    }
}

/// Command to change a conflict's status.
#[derive(Debug, Clone)]
pub struct UpdateConflictStatusCommand {
    pub id: ConflictId,
    pub status: ConflictStatus,
    pub now: Timestamp,
}

/// Handler for conflict status updates.
pub struct UpdateConflictStatusHandler {
    store: Arc<dyn WorkspaceStore>,
}

impl UpdateConflictStatusHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: UpdateConflictStatusCommand) -> Result<(), CommandError> {
        self.store
            .update_conflict_status(cmd.id, cmd.status, cmd.now)
            .await?;
        info!(conflict_id = %cmd.id, status = %cmd.status, "Updated conflict status");
        Ok(())
    }
}

/// Command to delete a conflict.
#[derive(Debug, Clone)]
pub struct DeleteConflictCommand {
    pub id: ConflictId,
}

/// Handler for conflict deletion.
pub struct DeleteConflictHandler {
    store: Arc<dyn WorkspaceStore>,
}

impl DeleteConflictHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteConflictCommand) -> Result<(), CommandError> {
        self.store.delete_conflict(cmd.id).await?;
        info!(conflict_id = %cmd.id, "Deleted conflict");
        Ok(())
    }
}
