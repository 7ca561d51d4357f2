//! Report exporter port - rendering assembled reports for download.
//!
//! The domain produces a `ReportPayload`; exporters turn it into a named
//! document in one concrete format. Rendering never reaches back into the
//! store.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::report::ReportPayload;

/// Formats a report can be rendered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Json,
    Csv,
    Html,
}

impl ReportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ReportFormat::Json => "application/json",
            ReportFormat::Csv => "text/csv",
            ReportFormat::Html => "text/html; charset=utf-8",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
            ReportFormat::Html => "html",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Csv => write!(f, "csv"),
            ReportFormat::Html => write!(f, "html"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            "html" | "htm" => Ok(ReportFormat::Html),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// A rendered report with content and download metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedReport {
    /// The rendered document.
    pub content: String,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename for download.
    pub filename: String,
    /// The format that was used.
    pub format: ReportFormat,
}

impl ExportedReport {
    /// Creates an exported report, deriving the filename from the
    /// payload's generation instant.
    pub fn new(content: String, format: ReportFormat, generated_at_rfc3339: &str) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!(
                "communication-toolkit-report-{}.{}",
                generated_at_rfc3339,
                format.extension()
            ),
            format,
        }
    }
}

/// Errors that can occur while rendering or writing a report.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// Unsupported export format requested.
    #[error("Unsupported report format: {0}")]
    UnsupportedFormat(String),

    /// Payload could not be serialized.
    #[error("Report serialization failed: {0}")]
    Serialization(String),

    /// I/O error while writing the rendered report.
    #[error("I/O error during export: {0}")]
    Io(String),
}

impl ExportError {
    /// Creates a serialization error.
    pub fn serialization(reason: impl Into<String>) -> Self {
        Self::Serialization(reason.into())
    }

    /// Creates an I/O error.
    pub fn io(reason: impl Into<String>) -> Self {
        Self::Io(reason.into())
    }
}

/// Port for rendering a report payload into one concrete format.
pub trait ReportExporter: Send + Sync {
    /// The format this exporter produces.
    fn format(&self) -> ReportFormat;

    /// Renders the payload into a downloadable document.
    fn render(&self, payload: &ReportPayload) -> Result<ExportedReport, ExportError>;
}
