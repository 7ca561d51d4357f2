//! Report export adapters.

mod csv;
mod file_sink;
mod html;
mod json;

pub use csv::CsvReportExporter;
pub use file_sink::FileReportSink;
pub use html::HtmlReportExporter;
pub use json::JsonReportExporter;
