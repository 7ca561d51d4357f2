//! JSON report exporter.

use tracing::debug;

use crate::domain::report::ReportPayload;
use crate::ports::{ExportError, ExportedReport, ReportExporter, ReportFormat};

/// Renders the full payload as pretty-printed JSON.
#[derive(Debug, Clone, Default)]
pub struct JsonReportExporter;

impl JsonReportExporter {
    /// Create a new JSON exporter.
    pub fn new() -> Self {
        Self
    }
}

impl ReportExporter for JsonReportExporter {
    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }

    fn render(&self, payload: &ReportPayload) -> Result<ExportedReport, ExportError> {
        let content = serde_json::to_string_pretty(payload)
            .map_err(|e| ExportError::serialization(e.to_string()))?;
        debug!(bytes = content.len(), "Rendered JSON report");

        Ok(ExportedReport::new(
            content,
            ReportFormat::Json,
            &payload.generated_at.as_datetime().to_rfc3339(),
        ))
    }
}
