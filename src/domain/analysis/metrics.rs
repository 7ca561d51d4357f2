//! Aggregate metrics over record collections.
//!
//! All functions are pure, single-pass reductions. Degenerate inputs
//! (empty collections, nothing completed) resolve to 0 or a zero-filled
//! distribution rather than an error.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Measurable, WorkStatus};
use crate::domain::records::{Conflict, Decision, Feedback, Message, MessageStatus, Task};

/// Counts per reporting-triple status. Always carries all three keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDistribution {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

/// Counts per message delivery status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageStatusDistribution {
    pub sent: usize,
    pub read: usize,
    pub responded: usize,
}

/// Pure reductions shared by the analytics, progress, performance, and
/// report views.
pub struct Metrics;

impl Metrics {
    /// Percentage of items whose work status is completed.
    ///
    /// # Edge Cases
    /// - Empty input: Returns 0.0
    /// - Items outside the reporting triple still count toward the
    ///   denominator; they just never count as completed.
    pub fn completion_rate<T: Measurable>(items: &[T]) -> f64 {
        if items.is_empty() {
            return 0.0;
        }
        let completed = items
            .iter()
            .filter(|item| item.work_status() == Some(WorkStatus::Completed))
            .count();
        completed as f64 / items.len() as f64 * 100.0
    }

    /// Mean of (updated_at - created_at) across items, in hours.
    ///
    /// An item whose update time precedes its creation time contributes a
    /// negative duration; the mean is not clamped.
    pub fn average_response_time_hours<T: Measurable>(items: &[T]) -> f64 {
        if items.is_empty() {
            return 0.0;
        }
        let total: f64 = items
            .iter()
            .map(|item| item.updated_at().hours_since(&item.created_at()))
            .sum();
        total / items.len() as f64
    }

    /// Mean impact over the items that carry an impact rating.
    ///
    /// Items without an impact are excluded from both sides of the
    /// division; returns 0.0 when none carry one.
    pub fn average_impact<T: Measurable>(items: &[T]) -> f64 {
        let impacts: Vec<u8> = items.iter().filter_map(|item| item.impact()).collect();
        if impacts.is_empty() {
            return 0.0;
        }
        impacts.iter().map(|&i| f64::from(i)).sum::<f64>() / impacts.len() as f64
    }

    /// Zero-filled counts of the reporting triple.
    ///
    /// Statuses outside the triple are ignored.
    pub fn status_distribution<T: Measurable>(items: &[T]) -> StatusDistribution {
        let mut distribution = StatusDistribution::default();
        for item in items {
            match item.work_status() {
                Some(WorkStatus::Pending) => distribution.pending += 1,
                Some(WorkStatus::InProgress) => distribution.in_progress += 1,
                Some(WorkStatus::Completed) => distribution.completed += 1,
                None => {}
            }
        }
        distribution
    }

    /// Zero-filled counts of message delivery statuses.
    pub fn message_status_distribution(messages: &[Message]) -> MessageStatusDistribution {
        let mut distribution = MessageStatusDistribution::default();
        for message in messages {
            match message.status {
                MessageStatus::Sent => distribution.sent += 1,
                MessageStatus::Read => distribution.read += 1,
                MessageStatus::Responded => distribution.responded += 1,
            }
        }
        distribution
    }

    /// Percentage of items resolved to a completed work status.
    ///
    /// Same reduction as [`Metrics::completion_rate`]; kept as its own
    /// entry point because the performance view reports it under this
    /// name for decisions, conflicts, and feedback.
    pub fn resolution_rate<T: Measurable>(items: &[T]) -> f64 {
        Self::completion_rate(items)
    }

    /// Total impact delivered per unit of effort over completed tasks.
    ///
    /// # Edge Cases
    /// - No completed tasks: Returns 0.0
    pub fn task_efficiency(tasks: &[Task]) -> f64 {
        let completed: Vec<&Task> = tasks
            .iter()
            .filter(|task| task.work_status() == Some(WorkStatus::Completed))
            .collect();
        if completed.is_empty() {
            return 0.0;
        }

        let total_impact: f64 = completed.iter().map(|t| f64::from(t.impact)).sum();
        let total_effort: f64 = completed.iter().map(|t| f64::from(t.effort)).sum();
        // Effort is validated >= 1 per task, so the sum is positive here.
        total_impact / total_effort
    }

    /// Mean response time in hours across the four communication
    /// collections taken together.
    pub fn combined_average_response_time_hours(
        messages: &[Message],
        decisions: &[Decision],
        conflicts: &[Conflict],
        feedbacks: &[Feedback],
    ) -> f64 {
        let count = messages.len() + decisions.len() + conflicts.len() + feedbacks.len();
        if count == 0 {
            return 0.0;
        }

        fn sum_hours<T: Measurable>(items: &[T]) -> f64 {
            items
                .iter()
                .map(|item| item.updated_at().hours_since(&item.created_at()))
                .sum()
        }
        let total = sum_hours(messages)
            + sum_hours(decisions)
            + sum_hours(conflicts)
            + sum_hours(feedbacks);

        total / count as f64
    }

    /// Percentage of communication items resolved to completion.
    ///
    /// Messages count toward the denominator but can never complete, so a
    /// message-heavy workspace reads as less effective. That asymmetry is
    /// part of the measure.
    pub fn communication_effectiveness(
        messages: &[Message],
        decisions: &[Decision],
        conflicts: &[Conflict],
        feedbacks: &[Feedback],
    ) -> f64 {
        let total = messages.len() + decisions.len() + conflicts.len() + feedbacks.len();
        if total == 0 {
            return 0.0;
        }

        let completed = |status: Option<WorkStatus>| status == Some(WorkStatus::Completed);
        let resolved = decisions.iter().filter(|d| completed(d.work_status())).count()
            + conflicts.iter().filter(|c| completed(c.work_status())).count()
            + feedbacks.iter().filter(|f| completed(f.work_status())).count();

        resolved as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::records::{
        ConflictStatus, DecisionStatus, FeedbackPriority, FeedbackStatus, FeedbackType, TaskStatus,
    };

    fn now() -> Timestamp {
        Timestamp::from_unix_secs(1_705_276_800)
    }

    fn task(impact: u8, effort: u8, status: TaskStatus) -> Task {
        Task::new("t", "d", impact, effort, now())
            .unwrap()
            .with_status(status, now())
    }

    fn feedback(status: FeedbackStatus) -> Feedback {
        Feedback::new(
            "f",
            "d",
            FeedbackType::Concern,
            FeedbackPriority::Low,
            vec![],
            now(),
        )
        .unwrap()
        .with_status(status, now())
    }

    #[test]
    fn completion_rate_of_empty_is_zero() {
        assert_eq!(Metrics::completion_rate::<Task>(&[]), 0.0);
    }

    #[test]
    fn completion_rate_of_half_completed_is_fifty() {
        let tasks = vec![
            task(3, 3, TaskStatus::Completed),
            task(3, 3, TaskStatus::Pending),
        ];
        assert!((Metrics::completion_rate(&tasks) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn completion_rate_of_three_tasks_one_completed() {
        let tasks = vec![
            task(5, 1, TaskStatus::Completed),
            task(3, 4, TaskStatus::Pending),
            task(2, 5, TaskStatus::InProgress),
        ];
        let rate = Metrics::completion_rate(&tasks);
        assert!((rate - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn average_response_time_of_empty_is_zero() {
        assert_eq!(Metrics::average_response_time_hours::<Task>(&[]), 0.0);
    }

    #[test]
    fn average_response_time_averages_hours() {
        // 2h and 4h response times -> mean 3h.
        let two_hours = task(3, 3, TaskStatus::Pending).with_status(
            TaskStatus::Completed,
            now().plus_secs(2 * 3600),
        );
        let four_hours = task(3, 3, TaskStatus::Pending).with_status(
            TaskStatus::Completed,
            now().plus_secs(4 * 3600),
        );
        let items = vec![two_hours, four_hours];
        assert!((Metrics::average_response_time_hours(&items) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn backwards_update_time_yields_negative_mean() {
        let mut backwards = task(3, 3, TaskStatus::Pending);
        backwards.updated_at = now().days_earlier(1);
        assert!(Metrics::average_response_time_hours(&[backwards]) < 0.0);
    }

    #[test]
    fn average_impact_of_empty_is_zero() {
        assert_eq!(Metrics::average_impact::<Message>(&[]), 0.0);
    }

    #[test]
    fn average_impact_skips_items_without_impact() {
        // Feedback has no impact rating; alone it contributes nothing.
        let entries = vec![feedback(FeedbackStatus::Pending)];
        assert_eq!(Metrics::average_impact(&entries), 0.0);
    }

    #[test]
    fn average_impact_means_present_values() {
        let tasks = vec![task(2, 1, TaskStatus::Pending), task(4, 1, TaskStatus::Pending)];
        assert!((Metrics::average_impact(&tasks) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn status_distribution_zero_fills_triple() {
        let distribution = Metrics::status_distribution::<Task>(&[]);
        assert_eq!(distribution, StatusDistribution::default());
    }

    #[test]
    fn status_distribution_counts_each_bucket() {
        let tasks = vec![
            task(5, 1, TaskStatus::Completed),
            task(3, 4, TaskStatus::Pending),
            task(2, 5, TaskStatus::InProgress),
        ];
        let distribution = Metrics::status_distribution(&tasks);
        assert_eq!(distribution.pending, 1);
        assert_eq!(distribution.in_progress, 1);
        assert_eq!(distribution.completed, 1);
    }

    #[test]
    fn statuses_outside_the_triple_are_ignored() {
        let conflict = Conflict::new(
            "c",
            "d",
            vec!["Ann".to_string()],
            vec![],
            vec![],
            now(),
        )
        .unwrap()
        .with_status(ConflictStatus::Resolved, now());

        let distribution = Metrics::status_distribution(&[conflict]);
        assert_eq!(distribution, StatusDistribution::default());
    }

    #[test]
    fn message_distribution_counts_delivery_states() {
        let mut read = Message::new("m", "c", 5, 5, 5, now()).unwrap();
        read.status = MessageStatus::Read;
        let sent = Message::new("m2", "c", 5, 5, 5, now()).unwrap();

        let distribution = Metrics::message_status_distribution(&[sent, read]);
        assert_eq!(distribution.sent, 1);
        assert_eq!(distribution.read, 1);
        assert_eq!(distribution.responded, 0);
    }

    #[test]
    fn task_efficiency_ignores_unfinished_tasks() {
        let tasks = vec![
            task(5, 1, TaskStatus::Completed),
            task(1, 5, TaskStatus::Pending),
        ];
        // Only the completed task counts: 5 impact / 1 effort.
        assert!((Metrics::task_efficiency(&tasks) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn task_efficiency_with_no_completed_tasks_is_zero() {
        let tasks = vec![task(5, 1, TaskStatus::Pending)];
        assert_eq!(Metrics::task_efficiency(&tasks), 0.0);
    }

    #[test]
    fn communication_effectiveness_counts_resolved_over_total() {
        let decision = Decision::new("d", "", vec![], vec![], now()).unwrap();
        let mut completed_decision = decision.clone();
        completed_decision.status = DecisionStatus::Completed;
        let message = Message::new("m", "c", 5, 5, 5, now()).unwrap();

        // 1 resolved out of 3 total items.
        let rate = Metrics::communication_effectiveness(
            &[message],
            &[decision, completed_decision],
            &[],
            &[],
        );
        assert!((rate - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn communication_effectiveness_of_empty_is_zero() {
        assert_eq!(
            Metrics::communication_effectiveness(&[], &[], &[], &[]),
            0.0
        );
    }

    #[test]
    fn combined_response_time_spans_collections() {
        let mut message = Message::new("m", "c", 5, 5, 5, now()).unwrap();
        message.updated_at = now().plus_secs(2 * 3600);
        let entry = feedback(FeedbackStatus::Pending).with_status(
            FeedbackStatus::Completed,
            now().plus_secs(4 * 3600),
        );

        let mean =
            Metrics::combined_average_response_time_hours(&[message], &[], &[], &[entry]);
        assert!((mean - 3.0).abs() < 1e-9);
    }
}
