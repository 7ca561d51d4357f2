//! HTML report exporter.
//!
//! Produces a complete standalone document with inline styling, suitable
//! for viewing in a browser or printing.

use std::fmt::Write as _;

use tracing::debug;

use crate::domain::report::{CollectionSummary, ReportPayload};
use crate::ports::{ExportError, ExportedReport, ReportExporter, ReportFormat};

const DEFAULT_CSS: &str = "\
body { font-family: Arial, sans-serif; }\n\
.section { margin: 20px 0; }\n\
table { border-collapse: collapse; width: 100%; }\n\
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }\n\
th { background-color: #f5f5f5; }";

/// Renders the report summary as a standalone HTML document.
#[derive(Debug, Clone, Default)]
pub struct HtmlReportExporter;

impl HtmlReportExporter {
    /// Create a new HTML exporter.
    pub fn new() -> Self {
        Self
    }

    fn summary_table(label: &str, summary: &CollectionSummary, out: &mut String) {
        // Row content is numeric; only the label needs escaping.
        let _ = write!(
            out,
            "      <h3>{}</h3>\n      <table>\n        <tr>\n          <th>Total</th>\n          <th>Completed</th>\n          <th>In Progress</th>\n          <th>Pending</th>\n        </tr>\n        <tr>\n          <td>{}</td>\n          <td>{}</td>\n          <td>{}</td>\n          <td>{}</td>\n        </tr>\n      </table>\n",
            html_escape(label),
            summary.total,
            summary.completed,
            summary.in_progress,
            summary.pending
        );
    }
}

impl ReportExporter for HtmlReportExporter {
    fn format(&self) -> ReportFormat {
        ReportFormat::Html
    }

    fn render(&self, payload: &ReportPayload) -> Result<ExportedReport, ExportError> {
        let generated_at = payload.generated_at.as_datetime().to_rfc3339();
        let report_type = if payload.details.is_some() {
            "detailed"
        } else {
            "summary"
        };

        let mut sections = String::new();
        if let Some(tasks) = &payload.summary.tasks {
            Self::summary_table("Tasks", tasks, &mut sections);
        }
        if let Some(messages) = &payload.summary.messages {
            let _ = write!(
                sections,
                "      <h3>Messages</h3>\n      <table>\n        <tr>\n          <th>Total</th>\n          <th>Responded</th>\n          <th>Read</th>\n          <th>Sent</th>\n        </tr>\n        <tr>\n          <td>{}</td>\n          <td>{}</td>\n          <td>{}</td>\n          <td>{}</td>\n        </tr>\n      </table>\n",
                messages.total, messages.responded, messages.read, messages.sent
            );
        }
        if let Some(decisions) = &payload.summary.decisions {
            Self::summary_table("Decisions", decisions, &mut sections);
        }
        if let Some(conflicts) = &payload.summary.conflicts {
            Self::summary_table("Conflicts", conflicts, &mut sections);
        }
        if let Some(feedback) = &payload.summary.feedback {
            Self::summary_table("Feedback", feedback, &mut sections);
        }

        let content = format!(
            r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8">
    <title>Communication Toolkit Report</title>
    <style>
{css}
    </style>
  </head>
  <body>
    <h1>Communication Toolkit Report</h1>
    <div class="section">
      <h2>Report Information</h2>
      <p>Type: {report_type}</p>
      <p>Generated At: {generated_at}</p>
      <p>Time Range: {start} to {end}</p>
    </div>
    <div class="section">
      <h2>Summary</h2>
{sections}    </div>
  </body>
</html>"#,
            css = DEFAULT_CSS,
            report_type = report_type,
            generated_at = generated_at,
            start = payload.time_range.start.as_datetime().to_rfc3339(),
            end = payload.time_range.end.as_datetime().to_rfc3339(),
            sections = sections
        );
        debug!(bytes = content.len(), "Rendered HTML report");

        Ok(ExportedReport::new(content, ReportFormat::Html, &generated_at))
    }
}

/// Escapes the HTML-significant characters in text content.
fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
