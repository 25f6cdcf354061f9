//! Errors returned by every [`ClubBackend`](crate::ClubBackend) call.
//!
//! The API communicates failure through status codes only: `401` means the
//! session cookie is missing or stale, `400` means a duplicate or invalid
//! field, and everything else is a generic failure. [`ApiError::from_status`]
//! is the single place that mapping lives.

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// `401`: the request needs a logged-in session.
    #[error("you must be logged in")]
    Unauthorized,

    /// `400`: duplicate or invalid field. Carries the server's message when
    /// the body had one.
    #[error("{}", .0.as_deref().unwrap_or("request rejected"))]
    Rejected(Option<String>),

    /// Any other non-success status.
    #[error("server responded with status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid api base url `{0}`")]
    InvalidBaseUrl(String),
}

/// Error bodies seen from the server: signup answers with `message`, the
/// club endpoints with `status`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

impl ApiError {
    /// Classify a non-success response.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            400 => ApiError::Rejected(server_message(body)),
            other => ApiError::Status(other),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Message the server attached to the failure, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected(message) => message.as_deref(),
            _ => None,
        }
    }
}

fn server_message(body: &str) -> Option<String> {
    let body: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    body.message
        .or(body.status)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}
