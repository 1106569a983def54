//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while parsing a trace record stream
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("line {line}: missing ':' separator in record: {text:?}")]
    MissingSeparator { line: usize, text: String },

    #[error("failed to read trace sink: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while a capture session is active
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("tracing is already active")]
    AlreadyActive,

    #[error("tracing is not active")]
    NotActive,

    #[error("failed to open trace sink {path}: {source}")]
    SinkUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
