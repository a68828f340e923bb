//! Report errors

use thiserror::Error;

/// Errors raised while assembling a report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Runtime was never set for {class}::{method}")]
    MissingRuntime { class: String, method: String },

    #[error("No test in progress")]
    NoTestInProgress,

    #[error("Invalid event on line {line}: {source}")]
    InvalidEvent {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown test status: {0}")]
    UnknownStatus(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
