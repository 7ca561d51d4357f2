//! Application handlers - typed commands and queries over the store port.
//!
//! Command handlers validate input through the domain constructors, issue
//! a single store mutation, and return the created or affected record.
//! Query handlers take a snapshot and run the pure analysis functions
//! over it; they never mutate anything.

mod analytics;
mod conflicts;
mod decisions;
mod feedback;
mod messages;
mod reports;
mod tasks;
mod timeline;

pub use analytics::{
    AnalyticsSnapshot, CollectionProgress, GetAnalyticsSnapshotHandler,
    GetAnalyticsSnapshotQuery, GetPerformanceSummaryHandler, GetPerformanceSummaryQuery,
    GetProgressOverviewHandler, GetProgressOverviewQuery, MessageProgress, MetricCollection,
    PerformanceSummary, ProgressOverview,
};
pub use conflicts::{
    CreateConflictCommand, CreateConflictHandler, DeleteConflictCommand, DeleteConflictHandler,
    UpdateConflictStatusCommand, UpdateConflictStatusHandler,
};
pub use decisions::{
    CreateDecisionCommand, CreateDecisionHandler, DecisionScoreView, DeleteDecisionCommand,
    DeleteDecisionHandler, GetDecisionScoresHandler, GetDecisionScoresQuery,
};
pub use feedback::{
    CreateFeedbackCommand, CreateFeedbackHandler, DeleteFeedbackCommand, DeleteFeedbackHandler,
    UpdateFeedbackStatusCommand, UpdateFeedbackStatusHandler,
};
pub use messages::{
    CreateMessageCommand, CreateMessageHandler, DeleteMessageCommand, DeleteMessageHandler,
};
pub use reports::{
    ExportReportCommand, ExportReportHandler, GenerateReportCommand, GenerateReportHandler,
};
pub use tasks::{
    CreateTaskCommand, CreateTaskHandler, DeleteTaskCommand, DeleteTaskHandler,
    GetTaskPrioritiesHandler, GetTaskPrioritiesQuery, TaskPriorityView,
    UpdateTaskStatusCommand, UpdateTaskStatusHandler,
};
pub use timeline::{GetTimelineHandler, GetTimelineQuery};

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::ports::{ExportError, StoreError};

/// Errors surfaced by command handlers.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
