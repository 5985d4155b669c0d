/*
[INPUT]:  Error sources (HTTP transport, API status, serialization, URL)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Taskdesk adapter
#[derive(Error, Debug)]
pub enum TaskdeskError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error (code {code}): {message}")]
    Api { code: i32, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request timed out
    #[error("Connection timeout after {duration}s")]
    Timeout { duration: u64 },
}

impl TaskdeskError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            TaskdeskError::Http(_)
            | TaskdeskError::Timeout { .. }
            | TaskdeskError::InvalidResponse(_) => true,
            TaskdeskError::Api { code, .. } => *code >= 500 || *code == 429,
            _ => false,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        TaskdeskError::Api {
            code: status.as_u16() as i32,
            message: message.into(),
        }
    }
}

/// Result type alias for Taskdesk operations
pub type Result<T> = std::result::Result<T, TaskdeskError>;
