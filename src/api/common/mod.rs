//
//  kaiten-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Common API Types
//!
//! Shared foundations of the request pipeline: the [`KaitenError`] taxonomy
//! and the list/envelope unwrapping helpers (re-exported from the
//! [`envelope`] submodule).
//!
//! # Overview
//!
//! Every pipeline failure surfaces as a [`KaitenError`] carrying the failure
//! kind, the HTTP status where one exists, and the raw response detail.
//! Nothing is swallowed: the façade layer propagates pipeline errors
//! unchanged, so a caller can always distinguish three situations:
//!
//! | Situation | Variants |
//! |-----------|----------|
//! | Retry later | [`RateLimited`](KaitenError::RateLimited) |
//! | Fix your request | [`Validation`](KaitenError::Validation), [`NotFound`](KaitenError::NotFound), [`Configuration`](KaitenError::Configuration) |
//! | Infrastructure problem | [`Connection`](KaitenError::Connection), [`Timeout`](KaitenError::Timeout), [`Server`](KaitenError::Server) |
//!
//! # Example
//!
//! ```rust
//! use kaiten_client::KaitenError;
//!
//! fn describe(err: &KaitenError) -> &'static str {
//!     match err {
//!         KaitenError::RateLimited { .. } => "slow down and retry",
//!         KaitenError::Validation { .. } | KaitenError::NotFound { .. } => "fix the request",
//!         KaitenError::Connection { .. } | KaitenError::Server { .. } => "infrastructure",
//!         _ => "other",
//!     }
//! }
//! ```

use thiserror::Error;

mod envelope;

pub(crate) use envelope::{deserialize_items, deserialize_payload, items_of};

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KaitenError>;

/// Unified error type for all Kaiten API operations.
///
/// Retryable failures ([`Connection`](Self::Connection),
/// [`Timeout`](Self::Timeout), [`RateLimited`](Self::RateLimited)) are only
/// surfaced after the pipeline's retry budget is exhausted and carry the
/// number of attempts made. Status-code failures are never retried.
#[derive(Error, Debug)]
pub enum KaitenError {
    /// Invalid local configuration (empty domain/token, malformed URL).
    ///
    /// Raised before any request is sent; never retried.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Transport-level failure (connection refused, DNS, broken socket)
    /// persisting across every attempt.
    #[error("Connection error after {attempts} attempts: {source}")]
    Connection {
        /// Number of transport attempts made.
        attempts: u32,
        /// The final underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The request deadline elapsed on every attempt.
    #[error("Request timed out after {attempts} attempts: {source}")]
    Timeout {
        /// Number of transport attempts made.
        attempts: u32,
        /// The final underlying timeout error.
        #[source]
        source: reqwest::Error,
    },

    /// The server kept answering 429 until the retry budget ran out.
    ///
    /// `retry_after` is the last delay suggested by the server's
    /// `Retry-After` header (seconds), or the 1.0 default when the header
    /// was absent or unparseable.
    #[error("Rate limit exceeded after {attempts} attempts")]
    RateLimited {
        /// Number of attempts made.
        attempts: u32,
        /// Suggested wait before trying again, in seconds.
        retry_after: f64,
    },

    /// The requested resource does not exist (HTTP 404). Never retried.
    #[error("Resource not found: {endpoint}")]
    NotFound {
        /// The endpoint path that produced the 404.
        endpoint: String,
    },

    /// The server rejected the payload (HTTP 422). Never retried.
    ///
    /// `detail` is the parsed error body with the field-level errors as
    /// returned by the server.
    #[error("Validation error: {detail}")]
    Validation {
        /// Parsed error body.
        detail: serde_json::Value,
    },

    /// Authentication failed (HTTP 401). Never retried.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The token lacks permission for the operation (HTTP 403). Never retried.
    #[error("Permission denied: {0}")]
    Permission(String),

    /// The server reported an internal error (HTTP 5xx). Never retried.
    #[error("Server error {status}: {body}")]
    Server {
        /// The HTTP status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// Catch-all for other 4xx responses. Never retried.
    #[error("API error {status}: {body}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// A network-level error occurred while reading a response body.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A response payload did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl KaitenError {
    /// The HTTP status code associated with this error, when there is one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::RateLimited { .. } => Some(429),
            Self::NotFound { .. } => Some(404),
            Self::Validation { .. } => Some(422),
            Self::Authentication(_) => Some(401),
            Self::Permission(_) => Some(403),
            Self::Server { status, .. } | Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether waiting and retrying the same request may succeed.
    pub fn is_retry_later(&self) -> bool {
        matches!(
            self,
            Self::RateLimited { .. }
                | Self::Connection { .. }
                | Self::Timeout { .. }
                | Self::Server { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            KaitenError::NotFound {
                endpoint: "/cards/1".to_string()
            }
            .status_code(),
            Some(404)
        );
        assert_eq!(
            KaitenError::Validation {
                detail: serde_json::json!({"title": "required"})
            }
            .status_code(),
            Some(422)
        );
        assert_eq!(
            KaitenError::Configuration("bad".to_string()).status_code(),
            None
        );
    }

    #[test]
    fn test_retry_later() {
        assert!(KaitenError::RateLimited {
            attempts: 3,
            retry_after: 1.0
        }
        .is_retry_later());
        assert!(!KaitenError::NotFound {
            endpoint: "/cards/1".to_string()
        }
        .is_retry_later());
    }
}
