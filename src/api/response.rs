//
//  kaiten-client
//  api/response.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Response Classification
//!
//! Maps an HTTP response to the pipeline's outcome: a JSON payload
//! (`Some(Value)`), an empty success (`None` for 204), or a typed
//! [`KaitenError`].
//!
//! ## Status Mapping
//!
//! | Status | Outcome |
//! |--------|---------|
//! | 204 | `Ok(None)` |
//! | other 2xx | `Ok(Some(parsed JSON))` |
//! | 401 | [`KaitenError::Authentication`] |
//! | 403 | [`KaitenError::Permission`] |
//! | 404 | [`KaitenError::NotFound`] (carries the endpoint) |
//! | 422 | [`KaitenError::Validation`] (carries the parsed error body) |
//! | 5xx | [`KaitenError::Server`] |
//! | other ≥400 | [`KaitenError::Api`] |
//!
//! 429 is not handled here: the transport executor intercepts it before
//! classification because it participates in the retry loop.

use reqwest::{Response, StatusCode};
use serde_json::Value;

use super::common::{KaitenError, Result};

/// Default wait, in seconds, when a 429 carries no usable `Retry-After`.
pub(crate) const DEFAULT_RETRY_AFTER: f64 = 1.0;

/// Classifies a response into the pipeline outcome.
///
/// `endpoint` is only used to annotate 404 errors with the resource path
/// that was requested.
pub(crate) async fn classify(response: Response, endpoint: &str) -> Result<Option<Value>> {
    let status = response.status();

    match status {
        StatusCode::NO_CONTENT => Ok(None),
        s if s.is_success() => Ok(Some(response.json().await?)),
        _ => Err(error_for(response, endpoint).await),
    }
}

/// Maps a non-2xx response to its [`KaitenError`] kind.
///
/// Shared by [`classify`] and the raw-byte download path, so a missing
/// attachment surfaces as [`KaitenError::NotFound`] like any other 404.
pub(crate) async fn error_for(response: Response, endpoint: &str) -> KaitenError {
    match response.status() {
        StatusCode::UNAUTHORIZED => {
            let body = read_body(response).await;
            KaitenError::Authentication(body)
        }
        StatusCode::FORBIDDEN => {
            let body = read_body(response).await;
            KaitenError::Permission(body)
        }
        StatusCode::NOT_FOUND => KaitenError::NotFound {
            endpoint: endpoint.to_string(),
        },
        StatusCode::UNPROCESSABLE_ENTITY => {
            let body = read_body(response).await;
            let detail =
                serde_json::from_str(&body).unwrap_or_else(|_| Value::String(body));
            KaitenError::Validation { detail }
        }
        s if s.is_server_error() => KaitenError::Server {
            status: s.as_u16(),
            body: read_body(response).await,
        },
        s => KaitenError::Api {
            status: s.as_u16(),
            body: read_body(response).await,
        },
    }
}

/// Parses a `Retry-After` header value in seconds.
///
/// Absent or unparseable values fall back to [`DEFAULT_RETRY_AFTER`].
pub(crate) fn parse_retry_after(header: Option<&str>) -> f64 {
    header
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|seconds| seconds.is_finite() && *seconds >= 0.0)
        .unwrap_or(DEFAULT_RETRY_AFTER)
}

async fn read_body(response: Response) -> String {
    response.text().await.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_retry_after_value() {
        assert_eq!(parse_retry_after(Some("2")), 2.0);
        assert_eq!(parse_retry_after(Some("0.5")), 0.5);
        assert_eq!(parse_retry_after(Some(" 3 ")), 3.0);
    }

    #[test]
    fn test_parse_retry_after_missing() {
        assert_eq!(parse_retry_after(None), 1.0);
    }

    #[test]
    fn test_parse_retry_after_unparseable() {
        assert_eq!(parse_retry_after(Some("soon")), 1.0);
        assert_eq!(parse_retry_after(Some("")), 1.0);
        assert_eq!(parse_retry_after(Some("-2")), 1.0);
    }
}
