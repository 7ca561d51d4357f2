//! Report generation and export handlers.

use std::sync::Arc;

use tracing::info;

use super::CommandError;
use crate::domain::foundation::Timestamp;
use crate::domain::report::{ReportBuilder, ReportConfig, ReportPayload};
use crate::ports::{ExportedReport, ReportExporter, WorkspaceStore};

/// Command to assemble a report over the current workspace.
#[derive(Debug, Clone)]
pub struct GenerateReportCommand {
    pub config: ReportConfig,
    pub now: Timestamp,
}

/// Handler producing the structured report payload.
pub struct GenerateReportHandler {
    store: Arc<dyn WorkspaceStore>,
}

impl GenerateReportHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: GenerateReportCommand) -> ReportPayload {
        let snapshot = self.store.snapshot().await;
        let payload = ReportBuilder::build(&snapshot, &cmd.config, cmd.now);
        info!(
            range = %cmd.config.time_range,
            detailed = payload.details.is_some(),
            "Generated report"
        );
        payload
    }
}

/// Command to assemble and render a report in one step.
#[derive(Debug, Clone)]
pub struct ExportReportCommand {
    pub config: ReportConfig,
    pub now: Timestamp,
}

/// Handler rendering a report through the configured exporter.
pub struct ExportReportHandler {
    store: Arc<dyn WorkspaceStore>,
    exporter: Arc<dyn ReportExporter>,
}

impl ExportReportHandler {
    pub fn new(store: Arc<dyn WorkspaceStore>, exporter: Arc<dyn ReportExporter>) -> Self {
        Self { store, exporter }
    }

    pub async fn handle(&self, cmd: ExportReportCommand) -> Result<ExportedReport, CommandError> {
        let snapshot = self.store.snapshot().await;
        let payload = ReportBuilder::build(&snapshot, &cmd.config, cmd.now);
        let report = self.exporter.render(&payload)?;
        info!(
            format = %report.format,
            filename = %report.filename,
            "Exported report"
        );
        Ok(report)
    }
}
