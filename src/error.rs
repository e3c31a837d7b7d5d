// src/error.rs
// =============================================================================
// Failure types for the project-loading flow.
//
// There are only two kinds of errors that travel between modules:
// - TransportError: the HTTP layer could not produce a response at all
// - FetchFailure: the reasons the project listing can fail as a whole
//
// Per-repository language lookups are NOT represented here. They never fail
// outward (see projects::languages), so they have no variant.
// =============================================================================

use thiserror::Error;

// The request never produced an HTTP response (DNS, TLS, refused, timeout...)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Network error: {0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        TransportError(error.to_string())
    }
}

// Why the project listing could not be turned into cards
//
// Each variant carries just enough for the error panel to pick a message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// The listing endpoint answered with a non-2xx status
    #[error("GitHub API error: {status} {status_text}")]
    Http {
        status: u16,
        status_text: String,
        /// The `message` field of the error body, when GitHub sent one
        message: Option<String>,
    },

    /// The listing request never got a response
    #[error("{0}")]
    Transport(String),

    /// The listing body was not the JSON we expected
    #[error("Failed to parse GitHub API response: {0}")]
    Parse(String),

    /// The listing was empty (or not a list at all)
    #[error("No repositories found")]
    Empty,

    /// Every listed repository was a fork or archived
    #[error("No non-forked repositories found")]
    NoEligible,
}

impl FetchFailure {
    /// HTTP status of the listing response, if there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchFailure::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// GitHub answers 403 when the unauthenticated rate limit is used up
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(403)
    }

    /// Message supplied by the server in its error body
    pub fn server_message(&self) -> Option<&str> {
        match self {
            FetchFailure::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<TransportError> for FetchFailure {
    fn from(error: TransportError) -> Self {
        FetchFailure::Transport(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_failure_message() {
        let failure = FetchFailure::Http {
            status: 404,
            status_text: "Not Found".to_string(),
            message: Some("Not Found".to_string()),
        };
        assert_eq!(failure.to_string(), "GitHub API error: 404 Not Found");
        assert_eq!(failure.status(), Some(404));
        assert!(!failure.is_rate_limited());
    }

    #[test]
    fn test_rate_limited_only_for_403() {
        let failure = FetchFailure::Http {
            status: 403,
            status_text: "Forbidden".to_string(),
            message: None,
        };
        assert!(failure.is_rate_limited());
        assert!(!FetchFailure::Empty.is_rate_limited());
    }

    #[test]
    fn test_transport_error_converts() {
        let failure: FetchFailure = TransportError("connection refused".to_string()).into();
        assert_eq!(failure.to_string(), "Network error: connection refused");
        assert_eq!(failure.status(), None);
    }
}
