// src/error.rs
//! Application error types.
//!
//! The public client operations never surface these: each one collapses a
//! failure to its documented empty default. Internally every fetch returns
//! `Result<_, AppError>` so the cause can be logged at the collapse site.

use reqwest::StatusCode;
use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// The request never produced a response (DNS, connect, TLS, body read).
    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}{}", code_suffix(.code))]
    ServiceStatus {
        status: StatusCode,
        url: String,
        /// WordPress error code from the body, e.g. `rest_post_invalid_page_number`.
        code: Option<String>,
    },

    /// The server answered successfully but not with JSON.
    #[error("{url} answered with non-JSON content type '{content_type}'")]
    UnexpectedContentType { content_type: String, url: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_deref()
        .map(|c| format!(" ({})", c))
        .unwrap_or_default()
}

impl AppError {
    /// Whether this error came back from the server rather than the transport.
    pub fn is_service_error(&self) -> bool {
        matches!(
            self,
            Self::ServiceStatus { .. } | Self::UnexpectedContentType { .. }
        )
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
