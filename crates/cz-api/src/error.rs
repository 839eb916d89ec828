//! Backend error types and the notifications shown for them.

use thiserror::Error;

/// Shown for a 403 that carries no message of its own.
pub const ACCESS_DENIED: &str = "Access Denied: Please contact Super Admin.";

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connection refused, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// 400. On the people listing this means the event id is unusable.
    #[error("bad request: {message}")]
    BadRequest { message: String },

    /// 401. The token is missing, expired, or rejected.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// 403. The caller is authenticated but not allowed.
    #[error("forbidden: {message}")]
    Forbidden { message: String },

    #[error("not found: {message}")]
    NotFound { message: String },

    /// Any other non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// A mutating call was attempted without a session token.
    #[error("not logged in: this action needs a session token")]
    MissingToken,

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ApiError {
    /// HTTP status, when the backend answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest { .. } => Some(400),
            Self::Unauthorized { .. } => Some(401),
            Self::Forbidden { .. } => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The message the backend put in its error body, if any.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        let message = match self {
            Self::BadRequest { message }
            | Self::Unauthorized { message }
            | Self::Forbidden { message }
            | Self::NotFound { message }
            | Self::Api { message, .. } => message.as_str(),
            _ => return None,
        };
        Some(message).filter(|m| !m.is_empty())
    }

    /// User-facing text: the backend's reason for a 403, else `fallback`.
    #[must_use]
    pub fn notification(&self, fallback: &str) -> String {
        self.notification_or(ACCESS_DENIED, fallback)
    }

    /// Like [`Self::notification`] with a custom text for a bare 403.
    #[must_use]
    pub fn notification_or(&self, denied: &str, fallback: &str) -> String {
        match self {
            Self::Forbidden { .. } => self.backend_message().unwrap_or(denied).to_string(),
            _ => fallback.to_string(),
        }
    }

    /// `"{prefix}: {reason}"`, preferring the backend's message over the
    /// transport-level description.
    #[must_use]
    pub fn detail(&self, prefix: &str) -> String {
        match self.backend_message() {
            Some(message) => format!("{prefix}: {message}"),
            None => format!("{prefix}: {self}"),
        }
    }
}
