//! File sink for rendered reports.
//!
//! Writes an `ExportedReport` into a target directory under its suggested
//! filename, for embedders that want generated reports on disk rather
//! than handed to a download layer.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::ports::{ExportError, ExportedReport};

/// Writes rendered reports into a directory.
#[derive(Debug, Clone)]
pub struct FileReportSink {
    directory: PathBuf,
}

impl FileReportSink {
    /// Create a sink rooted at the given directory.
    ///
    /// The directory is created on first write if missing.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// The directory reports are written into.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Writes the report and returns the full path of the created file.
    pub async fn write(&self, report: &ExportedReport) -> Result<PathBuf, ExportError> {
        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| ExportError::io(e.to_string()))?;

        // Colons from the RFC 3339 stamp are not portable in filenames.
        let safe_name = report.filename.replace(':', "-");
        let path = self.directory.join(safe_name);
        tokio::fs::write(&path, report.content.as_bytes())
            .await
            .map_err(|e| ExportError::io(e.to_string()))?;

        info!(path = %path.display(), format = %report.format, "Wrote report");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ReportFormat;

    fn report() -> ExportedReport {
        ExportedReport::new(
            "{\"summary\":{}}".to_string(),
            ReportFormat::Json,
            "2024-01-15T00:00:00+00:00",
        )
    }

    #[tokio::test]
    async fn writes_report_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileReportSink::new(dir.path());

        let path = sink.write(&report()).await.unwrap();

        assert!(path.starts_with(dir.path()));
        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(written, "{\"summary\":{}}");
    }

    #[tokio::test]
    async fn creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("exports").join("2024");
        let sink = FileReportSink::new(&nested);

        let path = sink.write(&report()).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn filename_has_no_colons() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileReportSink::new(dir.path());

        let path = sink.write(&report()).await.unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(!name.contains(':'));
        assert!(name.ends_with(".json"));
    }
}
