//! CSV report exporter.
//!
//! Renders the summary section as comma-joined rows. Detailed record
//! listings are not representable in this flat layout; a detailed report
//! still renders its summary here.

use tracing::debug;

use crate::domain::report::{CollectionSummary, ReportPayload};
use crate::ports::{ExportError, ExportedReport, ReportExporter, ReportFormat};

/// Renders the report summary as CSV rows.
#[derive(Debug, Clone, Default)]
pub struct CsvReportExporter;

impl CsvReportExporter {
    /// Create a new CSV exporter.
    pub fn new() -> Self {
        Self
    }

    fn summary_rows(label: &str, summary: &CollectionSummary, rows: &mut Vec<Vec<String>>) {
        rows.push(vec![
            label.to_string(),
            "Total".to_string(),
            "Completed".to_string(),
            "In Progress".to_string(),
            "Pending".to_string(),
        ]);
        rows.push(vec![
            String::new(),
            summary.total.to_string(),
            summary.completed.to_string(),
            summary.in_progress.to_string(),
            summary.pending.to_string(),
        ]);
    }
}

impl ReportExporter for CsvReportExporter {
    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }

    fn render(&self, payload: &ReportPayload) -> Result<ExportedReport, ExportError> {
        let generated_at = payload.generated_at.as_datetime().to_rfc3339();
        let report_type = if payload.details.is_some() {
            "detailed"
        } else {
            "summary"
        };

        let mut rows: Vec<Vec<String>> = vec![
            vec!["Report Type".to_string(), report_type.to_string()],
            vec!["Generated At".to_string(), generated_at.clone()],
            vec![
                "Time Range".to_string(),
                format!(
                    "{} to {}",
                    payload.time_range.start.as_datetime().to_rfc3339(),
                    payload.time_range.end.as_datetime().to_rfc3339()
                ),
            ],
            vec![],
            vec!["Summary".to_string()],
        ];

        if let Some(tasks) = &payload.summary.tasks {
            Self::summary_rows("Tasks", tasks, &mut rows);
        }
        if let Some(messages) = &payload.summary.messages {
            rows.push(vec![
                "Messages".to_string(),
                "Total".to_string(),
                "Responded".to_string(),
                "Read".to_string(),
                "Sent".to_string(),
            ]);
            rows.push(vec![
                String::new(),
                messages.total.to_string(),
                messages.responded.to_string(),
                messages.read.to_string(),
                messages.sent.to_string(),
            ]);
        }
        if let Some(decisions) = &payload.summary.decisions {
            Self::summary_rows("Decisions", decisions, &mut rows);
        }
        if let Some(conflicts) = &payload.summary.conflicts {
            Self::summary_rows("Conflicts", conflicts, &mut rows);
        }
        if let Some(feedback) = &payload.summary.feedback {
            Self::summary_rows("Feedback", feedback, &mut rows);
        }

        let content = rows
            .iter()
            .map(|row| row.join(","))
            .collect::<Vec<_>>()
            .join("\n");
        debug!(rows = rows.len(), "Rendered CSV report");

        Ok(ExportedReport::new(content, ReportFormat::Csv, &generated_at))
    }
}
