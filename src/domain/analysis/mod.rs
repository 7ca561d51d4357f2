//! Analysis module - Pure scoring and aggregation services.
//!
//! Everything here is a stateless transform over collection snapshots.
//! No function mutates its input or reads a clock; callers pass the
//! reference instant explicitly.

mod date_range;
mod decision_scorer;
mod metrics;
mod priority_matrix;
mod timeline;

pub use date_range::{filter_created_within, DateWindow, TimeRange};
pub use decision_scorer::DecisionScorer;
pub use metrics::{Metrics, MessageStatusDistribution, StatusDistribution};
pub use priority_matrix::{PriorityMatrix, TaskPriority};
pub use timeline::{build_timeline, TimelineEntry, TimelineKind};
