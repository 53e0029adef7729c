//! Error types for log sinks.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing a log message.
#[derive(Debug, Error)]
pub enum LogError {
    /// Writing to the log file failed.
    #[error("Failed to write log file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
