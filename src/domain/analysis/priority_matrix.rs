//! Priority Matrix - Impact/effort ratio classification for tasks.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::records::Task;

/// Priority bucket derived from a task's impact/effort ratio.
///
/// Variants are ordered so that a larger ratio never maps to a lower
/// priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    /// Returns the display label for this priority.
    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::High => "high",
            TaskPriority::Medium => "medium",
            TaskPriority::Low => "low",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Impact/effort classification.
pub struct PriorityMatrix;

impl PriorityMatrix {
    /// Classifies an impact/effort pair into a priority bucket.
    ///
    /// # Algorithm
    /// ratio = impact / effort; >= 1.5 is High, >= 0.75 is Medium,
    /// anything smaller is Low.
    ///
    /// Effort must be at least 1 - record construction enforces that, so
    /// the ratio is always defined here.
    pub fn classify(impact: u8, effort: u8) -> TaskPriority {
        let ratio = f64::from(impact) / f64::from(effort);
        if ratio >= 1.5 {
            TaskPriority::High
        } else if ratio >= 0.75 {
            TaskPriority::Medium
        } else {
            TaskPriority::Low
        }
    }

    /// Classifies a task by its stored impact/effort pair.
    pub fn classify_task(task: &Task) -> TaskPriority {
        Self::classify(task.impact, task.effort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use proptest::prelude::*;

    #[test]
    fn ratio_of_three_is_high() {
        assert_eq!(PriorityMatrix::classify(3, 1), TaskPriority::High);
    }

    #[test]
    fn boundary_ratio_exactly_three_quarters_is_medium() {
        // 3/4 == 0.75, inclusive boundary.
        assert_eq!(PriorityMatrix::classify(3, 4), TaskPriority::Medium);
    }

    #[test]
    fn boundary_ratio_exactly_one_and_a_half_is_high() {
        assert_eq!(PriorityMatrix::classify(3, 2), TaskPriority::High);
    }

    #[test]
    fn low_ratio_is_low() {
        assert_eq!(PriorityMatrix::classify(1, 5), TaskPriority::Low);
    }

    #[test]
    fn equal_impact_and_effort_is_medium() {
        assert_eq!(PriorityMatrix::classify(3, 3), TaskPriority::Medium);
    }

    #[test]
    fn classify_task_uses_stored_ratings() {
        let now = Timestamp::from_unix_secs(1_705_276_800);
        let task = Task::new("t", "d", 5, 1, now).unwrap();
        assert_eq!(PriorityMatrix::classify_task(&task), TaskPriority::High);
    }

    #[test]
    fn priority_ordering_matches_ratio_ordering() {
        assert!(TaskPriority::Low < TaskPriority::Medium);
        assert!(TaskPriority::Medium < TaskPriority::High);
    }

    #[test]
    fn serializes_to_lowercase() {
        assert_eq!(
            serde_json::to_string(&TaskPriority::High).unwrap(),
            "\"high\""
        );
    }

    proptest! {
        // Priority is monotonic non-decreasing in the impact/effort ratio.
        #[test]
        fn priority_is_monotonic_in_ratio(
            impact_a in 1u8..=5,
            effort_a in 1u8..=5,
            impact_b in 1u8..=5,
            effort_b in 1u8..=5,
        ) {
            let ratio_a = f64::from(impact_a) / f64::from(effort_a);
            let ratio_b = f64::from(impact_b) / f64::from(effort_b);
            let priority_a = PriorityMatrix::classify(impact_a, effort_a);
            let priority_b = PriorityMatrix::classify(impact_b, effort_b);

            if ratio_a >= ratio_b {
                prop_assert!(priority_a >= priority_b);
            }
        }
    }
}
