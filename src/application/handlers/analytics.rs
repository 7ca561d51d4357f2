//! Analytics query handlers - dashboard, progress, and performance views.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::analysis::{
    filter_created_within, DateWindow, Metrics, MessageStatusDistribution, StatusDistribution,
    TimeRange,
};
use crate::domain::foundation::Timestamp;
use crate::ports::WorkspaceStore;

/// Which collection an analytics snapshot covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricCollection {
    Tasks,
    Messages,
    Decisions,
    Conflicts,
    Feedback,
}

/// Query for the analytics dashboard: one collection over one window.
#[derive(Debug, Clone)]
pub struct GetAnalyticsSnapshotQuery {
    pub collection: MetricCollection,
    pub time_range: TimeRange,
    pub custom_start: Option<Timestamp>,
    pub custom_end: Option<Timestamp>,
    pub now: Timestamp,
}

/// Metrics for one collection inside the selected window.
///
/// Fields are `None` when the collection does not report that metric:
/// tasks have no response time, messages have no completion rate, and
/// only messages report the delivery distribution.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub completion_rate: Option<f64>,
    pub response_time_hours: Option<f64>,
    pub average_impact: Option<f64>,
    pub total_items: usize,
    pub status_distribution: Option<StatusDistribution>,
    pub message_status_distribution: Option<MessageStatusDistribution>,
}

/// Handler for the analytics dashboard view.
pub struct GetAnalyticsSnapshotHandler {
    store: Arc<dyn WorkspaceStore>,
}

impl GetAnalyticsSnapshotHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetAnalyticsSnapshotQuery) -> AnalyticsSnapshot {
        let window = DateWindow::from_range(
            query.time_range,
            query.now,
            query.custom_start,
            query.custom_end,
        );
        let snapshot = self.store.snapshot().await;
        debug!(
            collection = ?query.collection,
            range = %query.time_range,
            "Computing analytics snapshot"
        );

        match query.collection {
            MetricCollection::Tasks => {
                let items = owned(filter_created_within(&snapshot.tasks, &window));
                AnalyticsSnapshot {
                    completion_rate: Some(Metrics::completion_rate(&items)),
                    response_time_hours: None,
                    average_impact: Some(Metrics::average_impact(&items)),
                    total_items: items.len(),
                    status_distribution: Some(Metrics::status_distribution(&items)),
                    message_status_distribution: None,
                }
            }
            MetricCollection::Messages => {
                let items = owned(filter_created_within(&snapshot.messages, &window));
                AnalyticsSnapshot {
                    completion_rate: None,
                    response_time_hours: Some(Metrics::average_response_time_hours(&items)),
                    average_impact: Some(Metrics::average_impact(&items)),
                    total_items: items.len(),
                    status_distribution: None,
                    message_status_distribution: Some(Metrics::message_status_distribution(
                        &items,
                    )),
                }
            }
            MetricCollection::Decisions => {
                let items = owned(filter_created_within(&snapshot.decisions, &window));
                AnalyticsSnapshot {
                    completion_rate: Some(Metrics::completion_rate(&items)),
                    response_time_hours: Some(Metrics::average_response_time_hours(&items)),
                    average_impact: None,
                    total_items: items.len(),
                    status_distribution: Some(Metrics::status_distribution(&items)),
                    message_status_distribution: None,
                }
            }
            MetricCollection::Conflicts => {
                let items = owned(filter_created_within(&snapshot.conflicts, &window));
                AnalyticsSnapshot {
                    completion_rate: Some(Metrics::completion_rate(&items)),
                    response_time_hours: Some(Metrics::average_response_time_hours(&items)),
                    average_impact: None,
                    total_items: items.len(),
                    status_distribution: Some(Metrics::status_distribution(&items)),
                    message_status_distribution: None,
                }
            }
            MetricCollection::Feedback => {
                let items = owned(filter_created_within(&snapshot.feedbacks, &window));
                AnalyticsSnapshot {
                    completion_rate: Some(Metrics::completion_rate(&items)),
                    response_time_hours: Some(Metrics::average_response_time_hours(&items)),
                    average_impact: None,
                    total_items: items.len(),
                    status_distribution: Some(Metrics::status_distribution(&items)),
                    message_status_distribution: None,
                }
            }
        }
    }
}

fn owned<T: Clone>(items: Vec<&T>) -> Vec<T> {
    items.into_iter().cloned().collect()
}

/// Query for the progress dashboard: every collection, no window.
#[derive(Debug, Clone, Default)]
pub struct GetProgressOverviewQuery;

/// Completion and impact rollup for one work collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionProgress {
    pub completion_rate: f64,
    pub average_impact: f64,
    pub status_distribution: StatusDistribution,
}

/// Rollup for the message collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageProgress {
    pub average_impact: f64,
    pub status_distribution: MessageStatusDistribution,
}

/// Progress across all five collections.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressOverview {
    pub tasks: CollectionProgress,
    pub messages: MessageProgress,
    pub decisions: CollectionProgress,
    pub conflicts: CollectionProgress,
    pub feedback: CollectionProgress,
}

/// Handler for the progress dashboard view.
pub struct GetProgressOverviewHandler {
    store: Arc<dyn WorkspaceStore>,
}

impl GetProgressOverviewHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: GetProgressOverviewQuery) -> ProgressOverview {
        let snapshot = self.store.snapshot().await;

        ProgressOverview {
            tasks: CollectionProgress {
                completion_rate: Metrics::completion_rate(&snapshot.tasks),
                average_impact: Metrics::average_impact(&snapshot.tasks),
                status_distribution: Metrics::status_distribution(&snapshot.tasks),
            },
            messages: MessageProgress {
                average_impact: Metrics::average_impact(&snapshot.messages),
                status_distribution: Metrics::message_status_distribution(&snapshot.messages),
            },
            decisions: CollectionProgress {
                completion_rate: Metrics::completion_rate(&snapshot.decisions),
                average_impact: Metrics::average_impact(&snapshot.decisions),
                status_distribution: Metrics::status_distribution(&snapshot.decisions),
            },
            conflicts: CollectionProgress {
                completion_rate: Metrics::completion_rate(&snapshot.conflicts),
                average_impact: Metrics::average_impact(&snapshot.conflicts),
                status_distribution: Metrics::status_distribution(&snapshot.conflicts),
            },
            feedback: CollectionProgress {
                completion_rate: Metrics::completion_rate(&snapshot.feedbacks),
                average_impact: Metrics::average_impact(&snapshot.feedbacks),
                status_distribution: Metrics::status_distribution(&snapshot.feedbacks),
            },
        }
    }
}

/// Query for the performance analytics view.
#[derive(Debug, Clone, Default)]
pub struct GetPerformanceSummaryQuery;

/// Cross-collection performance indicators.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    /// Mean response time across messages, decisions, conflicts, feedback.
    pub average_response_time_hours: f64,
    pub decision_resolution_rate: f64,
    pub conflict_resolution_rate: f64,
    pub feedback_resolution_rate: f64,
    /// Impact delivered per unit of effort over completed tasks.
    pub task_efficiency: f64,
    pub communication_effectiveness: f64,
}

/// Handler for the performance analytics view.
pub struct GetPerformanceSummaryHandler {
    store: Arc<dyn WorkspaceStore>,
}

impl GetPerformanceSummaryHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: GetPerformanceSummaryQuery) -> PerformanceSummary {
        let snapshot = self.store.snapshot().await;

        PerformanceSummary {
            average_response_time_hours: Metrics::combined_average_response_time_hours(
                &snapshot.messages,
                &snapshot.decisions,
                &snapshot.conflicts,
                &snapshot.feedbacks,
            ),
            decision_resolution_rate: Metrics::resolution_rate(&snapshot.decisions),
            conflict_resolution_rate: Metrics::resolution_rate(&snapshot.conflicts),
            feedback_resolution_rate: Metrics::resolution_rate(&snapshot.feedbacks),
            task_efficiency: Metrics::task_efficiency(&snapshot.tasks),
            communication_effectiveness: Metrics::communication_effectiveness(
                &snapshot.messages,
                &snapshot.decisions,
                &snapshot.conflicts,
                &snapshot.feedbacks,
            ),
        }
    }
}
