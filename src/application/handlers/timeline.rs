//! Timeline query handler.

use std::sync::Arc;

use crate::domain::analysis::{build_timeline, TimelineEntry};
use crate::ports::WorkspaceStore;

/// Query for the merged timeline view.
#[derive(Debug, Clone, Default)]
pub struct GetTimelineQuery;

/// Handler for the timeline view.
pub struct GetTimelineHandler {
    store: Arc<dyn WorkspaceStore>,
}

impl GetTimelineHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: GetTimelineQuery) -> Vec<TimelineEntry> {
        let snapshot = self.store.snapshot().await;
        build_timeline(
            &snapshot.messages,
            &snapshot.decisions,
            &snapshot.conflicts,
            &snapshot.feedbacks,
        )
    }
}
