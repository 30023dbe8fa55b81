pub mod exporter;

pub use exporter::{ExportResult, Exporter};
