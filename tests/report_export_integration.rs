//! Report pipeline: snapshot -> payload -> rendered document -> disk.

use std::sync::Arc;

use comm_toolkit::adapters::export::{
    CsvReportExporter, FileReportSink, HtmlReportExporter, JsonReportExporter,
};
use comm_toolkit::adapters::store::InMemoryWorkspace;
use comm_toolkit::application::handlers::{
    ExportReportCommand, ExportReportHandler, GenerateReportCommand, GenerateReportHandler,
};
use comm_toolkit::domain::foundation::Timestamp;
use comm_toolkit::domain::records::{Feedback, FeedbackPriority, FeedbackType, Task, TaskStatus};
use comm_toolkit::domain::report::{ReportConfig, ReportType};
use comm_toolkit::ports::{ReportFormat, WorkspaceStore};

fn now() -> Timestamp {
    Timestamp::from_unix_secs(1_705_276_800)
}

async fn seeded_store() -> Arc<InMemoryWorkspace> {
    let store = Arc::new(InMemoryWorkspace::new());

    let done = Task::new("done", "d", 5, 1, now().days_earlier(1))
        .unwrap()
        .with_status(TaskStatus::Completed, now().days_earlier(1));
    let open = Task::new("open", "d", 3, 4, now().days_earlier(2)).unwrap();
    store.add_task(done).await.unwrap();
    store.add_task(open).await.unwrap();

    let note = Feedback::new(
        "note",
        "d",
        FeedbackType::Suggestion,
        FeedbackPriority::Low,
        vec![],
        now().days_earlier(3),
    )
    .unwrap();
    store.add_feedback(note).await.unwrap();

    store
}

#[tokio::test]
async fn detailed_report_counts_and_lists_windowed_records() {
    let store = seeded_store().await;
    let payload = GenerateReportHandler::new(store)
        .handle(GenerateReportCommand {
            config: ReportConfig {
                report_type: ReportType::Detailed,
                ..Default::default()
            },
            now: now(),
        })
        .await;

    let tasks = payload.summary.tasks.unwrap();
    assert_eq!(tasks.total, 2);
    assert_eq!(tasks.completed, 1);
    assert_eq!(tasks.pending, 1);
    assert_eq!(payload.summary.feedback.unwrap().pending, 1);

    let details = payload.details.unwrap();
    assert_eq!(details.tasks.len(), 2);
    assert_eq!(details.feedback.len(), 1);
    assert!(details.messages.is_empty());
}

#[tokio::test]
async fn every_format_renders_and_lands_on_disk() {
    let store = seeded_store().await;
    let dir = tempfile::tempdir().unwrap();
    let sink = FileReportSink::new(dir.path());

    let exporters: Vec<Arc<dyn comm_toolkit::ports::ReportExporter>> = vec![
        Arc::new(JsonReportExporter::new()),
        Arc::new(CsvReportExporter::new()),
        Arc::new(HtmlReportExporter::new()),
    ];

    for exporter in exporters {
        let format = exporter.format();
        let report = ExportReportHandler::new(store.clone(), exporter)
            .handle(ExportReportCommand {
                config: ReportConfig::default(),
                now: now(),
            })
            .await
            .unwrap();

        let path = sink.write(&report).await.unwrap();
        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(written, report.content);

        match format {
            ReportFormat::Json => {
                let value: serde_json::Value = serde_json::from_str(&written).unwrap();
                assert_eq!(value["summary"]["tasks"]["total"], 2);
            }
            ReportFormat::Csv => {
                assert!(written.contains("Tasks,Total,Completed,In Progress,Pending"));
                assert!(written.contains(",2,1,0,1"));
            }
            ReportFormat::Html => {
                assert!(written.starts_with("<!DOCTYPE html>"));
                assert!(written.contains("<h3>Tasks</h3>"));
            }
        }
    }
}

#[tokio::test]
async fn rendered_reports_are_byte_identical_across_calls() {
    let store = seeded_store().await;
    let handler = ExportReportHandler::new(store, Arc::new(JsonReportExporter::new()));
    let cmd = ExportReportCommand {
        config: ReportConfig {
            report_type: ReportType::Detailed,
            ..Default::default()
        },
        now: now(),
    };

    let first = handler.handle(cmd.clone()).await.unwrap();
    let second = handler.handle(cmd).await.unwrap();

    assert_eq!(first.content, second.content);
    assert_eq!(first.filename, second.filename);
}
