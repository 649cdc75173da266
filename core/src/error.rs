//! Error types for the clientes API client.
//!
//! # Design
//! Every non-2xx response lands in a single `Status` variant carrying the
//! numeric code and reason phrase; callers that care about "record does not
//! exist" ask `is_not_found()` instead of matching a dedicated variant.
//! Network failures keep the URL that was being requested so the failure
//! can be reported against it.

use thiserror::Error;

/// Failure to complete an HTTP round-trip at all (no response received).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors returned by `ClientesClient` parse methods and `ClientesApi`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a status outside 200..=299. `message` holds
    /// the backend's `{"error": "..."}` text when the body carried one.
    #[error("request failed: {status} - {status_text}")]
    Status {
        status: u16,
        status_text: String,
        message: Option<String>,
    },

    /// The request never produced a response (host unreachable, timeout,
    /// connection reset).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: TransportError,
    },

    /// A JSON response body could not be deserialized.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// A successful response whose normalized shape does not fit the
    /// operation, e.g. plain text where a customer record was expected.
    #[error("unexpected response body: expected {expected}, got {found}")]
    UnexpectedBody {
        expected: &'static str,
        found: &'static str,
    },
}

impl ApiError {
    /// HTTP status of a `Status` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// The backend's own explanation, when a `Status` error carried one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_code_and_reason() {
        let err = ApiError::Status {
            status: 503,
            status_text: "Service Unavailable".to_string(),
            message: None,
        };
        let text = err.to_string();
        assert!(text.contains("503"));
        assert!(text.contains("Service Unavailable"));
        assert_eq!(err.status(), Some(503));
        assert!(!err.is_not_found());
    }

    #[test]
    fn transport_error_mentions_url() {
        let err = ApiError::Transport {
            url: "http://localhost:9/clientes".to_string(),
            source: TransportError::new("connection refused"),
        };
        assert_eq!(
            err.to_string(),
            "request to http://localhost:9/clientes failed: connection refused"
        );
        assert_eq!(err.status(), None);
    }

    #[test]
    fn not_found_is_detected_by_status() {
        let err = ApiError::Status {
            status: 404,
            status_text: "Not Found".to_string(),
            message: Some("Cliente não encontrado".to_string()),
        };
        assert!(err.is_not_found());
        assert_eq!(err.backend_message(), Some("Cliente não encontrado"));
    }

    #[test]
    fn transport_error_has_no_backend_message() {
        let err = ApiError::Transport {
            url: "http://localhost:9/clientes".to_string(),
            source: TransportError::new("connection refused"),
        };
        assert_eq!(err.backend_message(), None);
    }
}
