//! Task command and query handlers.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::CommandError;
use crate::domain::analysis::{PriorityMatrix, TaskPriority};
use crate::domain::foundation::{TaskId, Timestamp};
use crate::domain::records::{Task, TaskStatus};
use crate::ports::WorkspaceStore;

/// Command to create a new task.
#[derive(Debug, Clone)]
pub struct CreateTaskCommand {
    pub title: String,
    pub description: String,
    pub impact: u8,
    pub effort: u8,
    pub now: Timestamp,
}

/// Handler for creating tasks.
pub struct CreateTaskHandler {
    store: Arc<dyn WorkspaceStore>,
}

impl CreateTaskHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CreateTaskCommand) -> Result<Task, CommandError> {
        let task = Task::new(cmd.title, cmd.description, cmd.impact, cmd.effort, cmd.now)?;
        self.store.add_task(task.clone()).await?;
        info!(task_id = %task.id, "Created task");
        Ok(task)
    }
}

/// Command to change a task's status.
#[derive(Debug, Clone)]
pub struct UpdateTaskStatusCommand {
    pub id: TaskId,
    pub status: TaskStatus,
    pub now: Timestamp,
}

/// Handler for task status updates.
pub struct UpdateTaskStatusHandler {
    store: Arc<dyn WorkspaceStore>,
}

impl UpdateTaskStatusHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: UpdateTaskStatusCommand) -> Result<(), CommandError> {
        self.store
            .update_task_status(cmd.id, cmd.status, cmd.now)
            .await?;
        info!(task_id = %cmd.id, status = %cmd.status, "Updated task status");
        Ok(())
    }
}

/// Command to delete a task.
#[derive(Debug, Clone)]
pub struct DeleteTaskCommand {
    pub id: TaskId,
}

/// Handler for task deletion.
pub struct DeleteTaskHandler {
    store: Arc<dyn WorkspaceStore>,
}

impl DeleteTaskHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteTaskCommand) -> Result<(), CommandError> {
        self.store.delete_task(cmd.id).await?;
        info!(task_id = %cmd.id, "Deleted task");
        Ok(())
    }
}

/// Query for the prioritization matrix view.
#[derive(Debug, Clone, Default)]
pub struct GetTaskPrioritiesQuery;

/// A task with its derived priority bucket.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPriorityView {
    pub task: Task,
    pub priority: TaskPriority,
}

/// Handler for the prioritization view.
pub struct GetTaskPrioritiesHandler {
    store: Arc<dyn WorkspaceStore>,
}

impl GetTaskPrioritiesHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: GetTaskPrioritiesQuery) -> Vec<TaskPriorityView> {
        self.store
            .tasks()
            .await
            .into_iter()
            .map(|task| {
                let priority = PriorityMatrix::classify_task(&task);
                TaskPriorityView { task, priority }
            })
            .collect()
    }
}
