//! Error types for board creation and task upload.

use thiserror::Error;

use crate::upload::TaskFailure;

/// Result alias used throughout the crate.
pub type BoardResult<T> = Result<T, BoardError>;

/// Errors that can occur while talking to `gh` or loading tasks.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The `gh` CLI exited with a non-zero status.
    #[error("{command} failed: {stderr}")]
    ExternalTool { command: String, stderr: String },

    /// The `gh` CLI could not be started at all.
    #[error("Failed to execute {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Input document or command output did not have the expected shape.
    #[error("Schema error: {0}")]
    Schema(String),

    /// The task document could not be read from disk.
    #[error("Failed to read {path}: {reason}")]
    FileRead { path: String, reason: String },

    /// Invalid or unreadable configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Some, but not all, tasks failed to upload.
    #[error("{failed} of {total} task(s) failed to upload")]
    PartialBatchFailure { failed: usize, total: usize },

    /// Every task in the batch failed to upload.
    #[error("All {} task(s) failed to upload", .failures.len())]
    TotalBatchFailure { failures: Vec<TaskFailure> },
}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Schema(err.to_string())
    }
}

impl BoardError {
    /// Build a [`BoardError::Schema`] from anything printable.
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema(message.into())
    }

    /// Whether this error came from the external `gh` process.
    pub fn is_external(&self) -> bool {
        matches!(self, Self::ExternalTool { .. } | Self::Launch { .. })
    }
}
