//! Error Types

use thiserror::Error;

/// Result type alias for solver operations
pub type Result<T> = std::result::Result<T, SolveError>;

/// Alert shown to the user for any failed upload
pub const UPLOAD_FAILED_MESSAGE: &str = "Error uploading the image. Please try again.";

/// Solver error types
#[derive(Error, Debug)]
pub enum SolveError {
    /// Solver answered with a non-success HTTP status
    #[error("Solver returned HTTP {status}")]
    Status { status: u16 },

    /// Request never completed (offline, CORS, connection refused)
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not a valid solve result
    #[error("Decode error: {0}")]
    Decode(String),

    /// Selected file could not be read
    #[error("File read error: {0}")]
    Read(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SolveError {
    /// Alert text shown to the user
    pub const fn user_message(&self) -> &'static str {
        match self {
            SolveError::Status { .. }
            | SolveError::Network(_)
            | SolveError::Decode(_)
            | SolveError::Read(_)
            | SolveError::Config(_) => UPLOAD_FAILED_MESSAGE,
        }
    }
}

impl From<reqwest::Error> for SolveError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SolveError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            SolveError::Status {
                status: status.as_u16(),
            }
        } else {
            SolveError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SolveError {
    fn from(err: serde_json::Error) -> Self {
        SolveError::Decode(err.to_string())
    }
}
