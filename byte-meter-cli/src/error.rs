use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Argument was not a plain unsigned byte count
    #[error("Invalid byte count '{0}': expected a plain unsigned 64-bit integer")]
    InvalidCount(String),

    /// Elapsed time was zero, negative, or not a number
    #[error("Invalid elapsed time: {0} (expected a positive number of seconds)")]
    InvalidSeconds(f64),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn invalid_count(arg: impl Into<String>) -> Self {
        Self::InvalidCount(arg.into())
    }
}
