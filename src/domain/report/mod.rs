//! Report assembly - structured summary/detail payloads for export.
//!
//! The builder is referentially transparent: the same snapshot, config,
//! and reference instant always produce the same payload. Rendering the
//! payload to JSON/CSV/HTML is an adapter concern.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{filter_created_within, DateWindow, TimeRange};
use crate::domain::foundation::{Measurable, Timestamp, WorkStatus};
use crate::domain::records::{
    Conflict, Decision, Feedback, Message, MessageStatus, Task, WorkspaceSnapshot,
};

/// How much of the workspace a report carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    /// Counts only.
    #[default]
    Summary,
    /// Counts plus the filtered records themselves.
    Detailed,
}

/// Selects what a generated report covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfig {
    pub report_type: ReportType,
    pub time_range: TimeRange,
    /// Only read when `time_range` is `Custom`.
    pub custom_start: Option<Timestamp>,
    pub custom_end: Option<Timestamp>,
    pub include_tasks: bool,
    pub include_messages: bool,
    pub include_decisions: bool,
    pub include_conflicts: bool,
    pub include_feedback: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            report_type: ReportType::Summary,
            time_range: TimeRange::Week,
            custom_start: None,
            custom_end: None,
            include_tasks: true,
            include_messages: true,
            include_decisions: true,
            include_conflicts: true,
            include_feedback: true,
        }
    }
}

/// Counts for one work collection inside the report window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
}

/// Counts for the message collection inside the report window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSummary {
    pub total: usize,
    pub responded: usize,
    pub read: usize,
    pub sent: usize,
}

/// Per-collection summaries; `None` means the collection was excluded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub tasks: Option<CollectionSummary>,
    pub messages: Option<MessageSummary>,
    pub decisions: Option<CollectionSummary>,
    pub conflicts: Option<CollectionSummary>,
    pub feedback: Option<CollectionSummary>,
}

/// Filtered records for a detailed report. Excluded collections stay
/// empty rather than absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDetails {
    pub tasks: Vec<Task>,
    pub messages: Vec<Message>,
    pub decisions: Vec<Decision>,
    pub conflicts: Vec<Conflict>,
    pub feedback: Vec<Feedback>,
}

/// A fully assembled report, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPayload {
    pub generated_at: Timestamp,
    pub time_range: DateWindow,
    pub summary: ReportSummary,
    /// Populated only for detailed reports.
    pub details: Option<ReportDetails>,
}

/// Assembles report payloads from workspace snapshots.
pub struct ReportBuilder;

impl ReportBuilder {
    /// Builds a report over the records created inside the configured
    /// window.
    ///
    /// `now` is the only clock input: it stamps `generated_at` and
    /// anchors the named time ranges.
    pub fn build(
        snapshot: &WorkspaceSnapshot,
        config: &ReportConfig,
        now: Timestamp,
    ) -> ReportPayload {
        let window = DateWindow::from_range(
            config.time_range,
            now,
            config.custom_start,
            config.custom_end,
        );

        let summary = ReportSummary {
            tasks: config
                .include_tasks
                .then(|| Self::summarize(&snapshot.tasks, &window)),
            messages: config
                .include_messages
                .then(|| Self::summarize_messages(&snapshot.messages, &window)),
            decisions: config
                .include_decisions
                .then(|| Self::summarize(&snapshot.decisions, &window)),
            conflicts: config
                .include_conflicts
                .then(|| Self::summarize(&snapshot.conflicts, &window)),
            feedback: config
                .include_feedback
                .then(|| Self::summarize(&snapshot.feedbacks, &window)),
        };

        let details = match config.report_type {
            ReportType::Summary => None,
            ReportType::Detailed => Some(ReportDetails {
                tasks: Self::filtered(&snapshot.tasks, &window, config.include_tasks),
                messages: Self::filtered(&snapshot.messages, &window, config.include_messages),
                decisions: Self::filtered(&snapshot.decisions, &window, config.include_decisions),
                conflicts: Self::filtered(&snapshot.conflicts, &window, config.include_conflicts),
                feedback: Self::filtered(&snapshot.feedbacks, &window, config.include_feedback),
            }),
        };

        ReportPayload {
            generated_at: now,
            time_range: window,
            summary,
            details,
        }
    }

    fn summarize<T: Measurable>(items: &[T], window: &DateWindow) -> CollectionSummary {
        let in_window = filter_created_within(items, window);
        let mut summary = CollectionSummary {
            total: in_window.len(),
            ..Default::default()
        };
        for item in in_window {
            match item.work_status() {
                Some(WorkStatus::Completed) => summary.completed += 1,
                Some(WorkStatus::InProgress) => summary.in_progress += 1,
                Some(WorkStatus::Pending) => summary.pending += 1,
                None => {}
            }
        }
        summary
    }

    fn summarize_messages(messages: &[Message], window: &DateWindow) -> MessageSummary {
        let in_window = filter_created_within(messages, window);
        let mut summary = MessageSummary {
            total: in_window.len(),
            ..Default::default()
        };
        for message in in_window {
            match message.status {
                MessageStatus::Responded => summary.responded += 1,
                MessageStatus::Read => summary.read += 1,
                MessageStatus::Sent => summary.sent += 1,
            }
        }
        summary
    }

    fn filtered<T: Measurable + Clone>(
        items: &[T],
        window: &DateWindow,
        included: bool,
    ) -> Vec<T> {
        if !included {
            return Vec::new();
        }
        filter_created_within(items, window)
            .into_iter()
            .cloned()
            .collect()
    }
}
