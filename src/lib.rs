pub mod config;
pub mod error;
pub mod models;
pub mod github;
pub mod progress;
pub mod export;
pub mod output;

pub use config::{Config, ExportConfig};
pub use error::{Error, Result};
pub use github::GitHubClient;
pub use export::{ExportResult, Exporter};
pub use output::{create_sink, RecordSink};
pub use progress::Progress;
