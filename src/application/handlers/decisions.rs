//! Decision command and query handlers.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::CommandError;
use crate::domain::analysis::DecisionScorer;
use crate::domain::foundation::{DecisionId, Timestamp};
use crate::domain::records::{Decision, DecisionCriterion, DecisionOption};
use crate::ports::WorkspaceStore;

/// Command to create a new decision.
#[derive(Debug, Clone)]
pub struct CreateDecisionCommand {
    pub title: String,
    pub description: String,
    pub options: Vec<DecisionOption>,
    pub criteria: Vec<DecisionCriterion>,
    pub now: Timestamp,
}

/// Handler for creating decisions.
pub struct CreateDecisionHandler {
    store: Arc<dyn WorkspaceStore>,
}

impl CreateDecisionHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CreateDecisionCommand) -> Result<Decision, CommandError> {
        let decision = Decision::new(
            cmd.title,
            cmd.description,
            cmd.options,
            cmd.criteria,
            cmd.now,
        )?;
        self.store.add_decision(decision.clone()).await?;
        info!(
            decision_id = %decision.id,
            options = decision.options.len(),
            criteria = decision.criteria.len(),
            "Created decision"
        );
        Ok(decision)
    }
}

/// Command to delete a decision.
#[derive(Debug, Clone)]
pub struct DeleteDecisionCommand {
    pub id: DecisionId,
}

/// Handler for decision deletion.
pub struct DeleteDecisionHandler {
    store: Arc<dyn WorkspaceStore>,
}

impl DeleteDecisionHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteDecisionCommand) -> Result<(), CommandError> {
        self.store.delete_decision(cmd.id).await?;
        info!(decision_id = %cmd.id, "Deleted decision");
        Ok(())
    }
}

/// Query for the scored decision list view.
#[derive(Debug, Clone, Default)]
pub struct GetDecisionScoresQuery;

/// A decision with its weighted composite score.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionScoreView {
    pub decision: Decision,
    /// Decision-level composite; see `DecisionScorer::composite_score`.
    pub score: f64,
}

/// Handler for the scored decision list.
pub struct GetDecisionScoresHandler {
    store: Arc<dyn WorkspaceStore>,
}

impl GetDecisionScoresHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: GetDecisionScoresQuery) -> Vec<DecisionScoreView> {
        self.store
            .decisions()
            .await
            .into_iter()
            .map(|decision| {
                let score = DecisionScorer::composite_score(&decision);
                DecisionScoreView { decision, score }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryWorkspace;

    fn now() -> Timestamp {
        Timestamp::from_unix_secs(1_705_276_800)
    }

    fn scored_cmd() -> CreateDecisionCommand {
        CreateDecisionCommand {
            title: "Pick a vendor".to_string(),
            description: String::new(),
            options: vec![
                DecisionOption::new("o1", "Vendor A", "").with_score("c1", 3.0),
                DecisionOption::new("o2", "Vendor B", "").with_score("c1", 5.0),
            ],
            criteria: vec![DecisionCriterion::new("c1", "Cost", 4).unwrap()],
            now: now(),
        }
    }

    #[tokio::test]
    async fn create_decision_persists_options_and_criteria() {
        let store = Arc::new(InMemoryWorkspace::new());
        let handler = CreateDecisionHandler::new(store.clone());

        let decision = handler.handle(scored_cmd()).await.unwrap();

        let stored = store.decisions().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, decision.id);
        assert_eq!(stored[0].options.len(), 2);
        assert_eq!(stored[0].criteria.len(), 1);
    }

    #[tokio::test]
    async fn create_decision_rejects_blank_title() {
        let handler = CreateDecisionHandler::new(Arc::new(InMemoryWorkspace::new()));

        let mut blank = scored_cmd();
        blank.title = String::new();

        assert!(handler.handle(blank).await.is_err());
    }

    #[tokio::test]
    async fn scores_view_computes_composite_per_decision() {
        let store = Arc::new(InMemoryWorkspace::new());
        CreateDecisionHandler::new(store.clone())
            .handle(scored_cmd())
            .await
            .unwrap();

        let views = GetDecisionScoresHandler::new(store)
            .handle(GetDecisionScoresQuery)
            .await;

        assert_eq!(views.len(), 1);
        // Single criterion: composite equals the option sum (3 + 5).
        assert!((views[0].score - 8.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn delete_decision_removes_record() {
        let store = Arc::new(InMemoryWorkspace::new());
        let decision = CreateDecisionHandler::new(store.clone())
            .handle(scored_cmd())
            .await
            .unwrap();

        DeleteDecisionHandler::new(store.clone())
            .handle(DeleteDecisionCommand { id: decision.id })
            .await
            .unwrap();

        assert!(store.decisions().await.is_empty());
    }
}
