//! Error taxonomy for API calls.
//!
//! Every failure a call can produce is one variant of [`Error`]. The
//! HTTP-level kinds (`Api`, `Authentication`, `NotFound`, `RateLimit`)
//! share a payload surface through the accessor methods so callers can
//! treat them uniformly or match on the specific kind.

use serde_json::Value;
use thiserror::Error;

/// A single structural problem reported by response validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Dotted path to the offending field, when one could be determined.
    pub path: Option<String>,
    pub message: String,
}

/// Error returned by every fallible operation in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Programmatic misuse: an invalid base URL or an unserializable
    /// request body. Never produced by a well-formed call.
    #[error("{message}")]
    Other { message: String },

    /// A 2xx response body did not match the expected shape.
    #[error("{message}")]
    Validation {
        message: String,
        issues: Vec<ValidationIssue>,
    },

    /// A non-2xx status not covered by a more specific kind.
    #[error("{message}")]
    Api {
        message: String,
        status: u16,
        body: Value,
    },

    /// The API rejected the credential (HTTP 401).
    #[error("{message}")]
    Authentication { message: String, body: Value },

    /// The requested object does not exist (HTTP 404).
    #[error("{message}")]
    NotFound { message: String, body: Value },

    /// The API is throttling this credential (HTTP 429).
    #[error("{message}")]
    RateLimit {
        message: String,
        /// Seconds the server suggests waiting, from `Retry-After`.
        retry_after: Option<u64>,
        body: Value,
    },

    /// The request never completed: connection failure, I/O error, or
    /// timeout. Timeouts carry `"timed out after {N}ms"` in the message.
    #[error("{message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    pub(crate) fn other(message: impl Into<String>) -> Self {
        Error::Other {
            message: message.into(),
        }
    }

    pub(crate) fn validation(issues: Vec<ValidationIssue>) -> Self {
        let details = issues
            .iter()
            .map(|issue| match &issue.path {
                Some(path) => format!("{path}: {}", issue.message),
                None => issue.message.clone(),
            })
            .collect::<Vec<_>>()
            .join("; ");
        Error::Validation {
            message: format!("Validation failed: {details}"),
            issues,
        }
    }

    pub(crate) fn network(message: impl Into<String>) -> Self {
        Error::Network {
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn network_caused_by(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Error::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// HTTP status associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Authentication { .. } => Some(401),
            Error::NotFound { .. } => Some(404),
            Error::RateLimit { .. } => Some(429),
            _ => None,
        }
    }

    /// Stable machine-readable tag for the error class.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Error::Other { .. } => None,
            Error::Validation { .. } => Some("VALIDATION_ERROR"),
            Error::Api { .. }
            | Error::Authentication { .. }
            | Error::NotFound { .. }
            | Error::RateLimit { .. } => Some("API_ERROR"),
            Error::Network { .. } => Some("NETWORK_ERROR"),
        }
    }

    /// True when the API answered with an error status; false for
    /// transport, validation, and usage errors.
    pub fn is_api_error(&self) -> bool {
        matches!(
            self,
            Error::Api { .. }
                | Error::Authentication { .. }
                | Error::NotFound { .. }
                | Error::RateLimit { .. }
        )
    }

    /// The parsed response body attached to an API-level error.
    pub fn response_body(&self) -> Option<&Value> {
        match self {
            Error::Api { body, .. }
            | Error::Authentication { body, .. }
            | Error::NotFound { body, .. }
            | Error::RateLimit { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Suggested wait in seconds, present on rate-limit errors whose
    /// response carried a usable `Retry-After`.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Error::RateLimit { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    /// The issue list attached to a validation error.
    pub fn validation_issues(&self) -> Option<&[ValidationIssue]> {
        match self {
            Error::Validation { issues, .. } => Some(issues),
            _ => None,
        }
    }
}
