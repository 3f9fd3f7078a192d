//! Error taxonomy for the console core. Every API call resolves to exactly one
//! of these variants; the client never swallows an error and performs at most
//! one side effect (session eviction on `AuthExpired`) before returning it.
//! Callers own user-facing messaging.

use std::fmt;

/// Maximum number of error body characters surfaced to callers.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The backend rejected the submitted login credentials.
    InvalidCredentials,
    /// A non-login call received a 401; the session has already been evicted.
    AuthExpired,
    /// No response was received from the backend.
    Network(String),
    /// The per-call deadline elapsed before a response arrived.
    Timeout(String),
    /// The backend answered with a non-success status other than session expiry.
    Http { status: u16, body: String },
    /// Invalid configuration or invalid caller input, detected before any network call.
    Config(String),
    /// The request payload could not be encoded.
    Serialization(String),
    /// The response body could not be decoded.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidCredentials => {
                write!(formatter, "Invalid email or password")
            }
            ApiError::AuthExpired => write!(formatter, "Session expired, please sign in again"),
            ApiError::Network(message) => write!(formatter, "Network error: {message}"),
            ApiError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            ApiError::Http { status, body } => {
                write!(formatter, "Request failed ({status}): {body}")
            }
            ApiError::Config(message) => write!(formatter, "Config error: {message}"),
            ApiError::Serialization(message) => write!(formatter, "Request error: {message}"),
            ApiError::Parse(message) => write!(formatter, "Response error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Trims and truncates HTTP error bodies before they reach callers.
pub(crate) fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_and_body() {
        let error = ApiError::Http {
            status: 503,
            body: "unavailable".to_string(),
        };
        assert_eq!(error.to_string(), "Request failed (503): unavailable");
    }

    #[test]
    fn sanitize_body_replaces_empty_bodies() {
        assert_eq!(sanitize_body(String::new()), "Request failed.");
        assert_eq!(sanitize_body("   ".to_string()), "Request failed.");
    }

    #[test]
    fn sanitize_body_trims_and_truncates() {
        assert_eq!(sanitize_body("  detail  ".to_string()), "detail");

        let long = "x".repeat(500);
        assert_eq!(sanitize_body(long).len(), 200);
    }
}
