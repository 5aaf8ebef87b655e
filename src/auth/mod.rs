//
//  kaiten-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Credential Handling
//!
//! This module provides [`Credentials`], the immutable domain/token pair
//! every client is constructed from. Credentials derive the base API URL and
//! the two header sets used by the pipeline:
//!
//! - **JSON requests**: `Accept`, `Content-Type` and a Bearer `Authorization`
//!   header
//! - **File uploads**: `Authorization` only, so the HTTP client can set the
//!   multipart boundary itself
//!
//! ## Example
//!
//! ```rust
//! use kaiten_client::Credentials;
//!
//! let credentials = Credentials::new("mycompany", "my-api-token").unwrap();
//! assert_eq!(credentials.base_url(), "https://mycompany.kaiten.ru/api/v1");
//! assert!(credentials.headers().contains_key("authorization"));
//! ```
//!
//! ## Notes
//!
//! - Construction fails with [`KaitenError::Configuration`] when the domain
//!   or token is empty or whitespace-only.
//! - The `Authorization` header is marked sensitive so it is redacted from
//!   debug output.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use crate::api::common::KaitenError;
use crate::config::KaitenConfig;

/// Immutable credentials for one Kaiten account.
///
/// Created once per client and shared for the client's whole session.
/// Both header sets are prebuilt at construction time so header assembly
/// cannot fail mid-request.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Normalized account domain (as supplied, trimmed).
    domain: String,
    /// API token, trimmed.
    token: String,
    /// Derived base URL, e.g. `https://mycompany.kaiten.ru/api/v1`.
    base_url: String,
    /// Header set for JSON requests.
    headers: HeaderMap,
    /// Header set for multipart uploads.
    upload_headers: HeaderMap,
}

impl Credentials {
    /// Creates credentials from an account domain and API token.
    ///
    /// The domain may be given bare (`mycompany`), fully qualified
    /// (`mycompany.kaiten.ru`) or with a protocol prefix; see
    /// [`KaitenConfig::base_url`] for the normalization rules.
    ///
    /// # Errors
    ///
    /// Returns [`KaitenError::Configuration`] when the domain or token is
    /// empty after trimming, or when the token contains characters that are
    /// not valid in an HTTP header.
    pub fn new(domain: &str, token: &str) -> Result<Self, KaitenError> {
        let domain = domain.trim();
        let token = token.trim();

        if domain.is_empty() {
            return Err(KaitenError::Configuration(
                "domain must not be empty".to_string(),
            ));
        }
        if token.is_empty() {
            return Err(KaitenError::Configuration(
                "API token must not be empty".to_string(),
            ));
        }

        let base_url = KaitenConfig::base_url(domain)?;

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
            KaitenError::Configuration("API token is not a valid header value".to_string())
        })?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, bearer.clone());

        let mut upload_headers = HeaderMap::new();
        upload_headers.insert(AUTHORIZATION, bearer);

        Ok(Self {
            domain: domain.to_string(),
            token: token.to_string(),
            base_url,
            headers,
            upload_headers,
        })
    }

    /// The account domain these credentials were created with.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The API token these credentials were created with.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The derived base API URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Header set for JSON requests (`Accept`, `Content-Type`, bearer auth).
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Header set for multipart uploads (bearer auth only).
    ///
    /// `Content-Type` is deliberately absent so the multipart encoder can
    /// supply its own boundary.
    pub fn upload_headers(&self) -> &HeaderMap {
        &self.upload_headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_new() {
        let credentials = Credentials::new("mycompany", "token-123").unwrap();
        assert_eq!(credentials.domain(), "mycompany");
        assert_eq!(credentials.token(), "token-123");
        assert_eq!(
            credentials.base_url(),
            "https://mycompany.kaiten.ru/api/v1"
        );
    }

    #[test]
    fn test_credentials_trims_input() {
        let credentials = Credentials::new("  mycompany  ", "  token-123  ").unwrap();
        assert_eq!(credentials.domain(), "mycompany");
        assert_eq!(credentials.token(), "token-123");
    }

    #[test]
    fn test_credentials_empty_domain() {
        assert!(matches!(
            Credentials::new("   ", "token"),
            Err(KaitenError::Configuration(_))
        ));
    }

    #[test]
    fn test_credentials_empty_token() {
        assert!(matches!(
            Credentials::new("mycompany", ""),
            Err(KaitenError::Configuration(_))
        ));
    }

    #[test]
    fn test_json_headers() {
        let credentials = Credentials::new("mycompany", "token-123").unwrap();
        let headers = credentials.headers();
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer token-123");
    }

    #[test]
    fn test_upload_headers_omit_content_type() {
        let credentials = Credentials::new("mycompany", "token-123").unwrap();
        let headers = credentials.upload_headers();
        assert!(headers.get(CONTENT_TYPE).is_none());
        assert!(headers.get(ACCEPT).is_none());
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer token-123");
    }
}
