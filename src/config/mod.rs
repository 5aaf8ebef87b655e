//
//  kaiten-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Service Configuration
//!
//! This module centralizes the constants that govern how the client talks to
//! the Kaiten API: the retry budget, the delay between retries, the request
//! timeout, the per-second rate limit, and the rules for deriving the base
//! API URL from an account domain.
//!
//! ## Overview
//!
//! Kaiten instances are reachable under `https://<domain>.kaiten.ru/api/v1`.
//! [`KaitenConfig::base_url`] normalizes whatever the user supplies as a
//! domain (with or without protocol, trailing slashes, or the service
//! suffix) into that canonical form.
//!
//! ## Example
//!
//! ```rust
//! use kaiten_client::config::KaitenConfig;
//!
//! let url = KaitenConfig::base_url("mycompany").unwrap();
//! assert_eq!(url, "https://mycompany.kaiten.ru/api/v1");
//!
//! // Protocol prefixes and trailing slashes are stripped
//! let url = KaitenConfig::base_url("https://mycompany.kaiten.ru/").unwrap();
//! assert_eq!(url, "https://mycompany.kaiten.ru/api/v1");
//! ```
//!
//! ## Notes
//!
//! - The rate limit of 3 requests per second follows the limit documented
//!   by Kaiten for API tokens.
//! - All durations are plain [`std::time::Duration`] values; the pipeline
//!   sleeps with `tokio::time` so they cooperate with the paused test clock.

use std::time::Duration;

use url::Url;

use crate::api::common::KaitenError;

/// Static configuration for the Kaiten API client.
///
/// Holds the retry policy, rate-limit budget and URL derivation rules.
/// Per-client overrides (e.g. for tests or self-hosted instances) are
/// available through the [`KaitenClient`](crate::KaitenClient) builder
/// methods.
pub struct KaitenConfig;

impl KaitenConfig {
    /// Maximum number of transport attempts per logical call.
    pub const MAX_RETRIES: u32 = 3;

    /// Delay between attempts after a transport-level failure.
    pub const RETRY_DELAY: Duration = Duration::from_secs(1);

    /// Total request timeout applied to every HTTP exchange.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// API version segment of the base URL.
    pub const API_VERSION: &'static str = "v1";

    /// Maximum request-starts allowed within any trailing one-second window.
    pub const LIMIT_PER_SEC: usize = 3;

    /// Hosted-service suffix appended to bare account domains.
    pub const SERVICE_SUFFIX: &'static str = ".kaiten.ru";

    /// Derives the base API URL for an account domain.
    ///
    /// Normalization steps:
    ///
    /// 1. Trim surrounding whitespace
    /// 2. Strip `http://` and `https://` prefixes
    /// 3. Strip trailing slashes
    /// 4. Append [`SERVICE_SUFFIX`](Self::SERVICE_SUFFIX) when absent
    ///
    /// # Errors
    ///
    /// Returns [`KaitenError::Configuration`] when the domain is empty after
    /// trimming or the derived URL does not parse.
    pub fn base_url(domain: &str) -> Result<String, KaitenError> {
        let domain = domain
            .trim()
            .replace("https://", "")
            .replace("http://", "");
        let domain = domain.trim_end_matches('/');

        if domain.is_empty() {
            return Err(KaitenError::Configuration(
                "domain must not be empty".to_string(),
            ));
        }

        let host = if domain.ends_with(Self::SERVICE_SUFFIX) {
            domain.to_string()
        } else {
            format!("{}{}", domain, Self::SERVICE_SUFFIX)
        };

        let base = format!("https://{}/api/{}", host, Self::API_VERSION);
        Url::parse(&base).map_err(|e| {
            KaitenError::Configuration(format!("invalid domain {:?}: {}", domain, e))
        })?;

        Ok(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_bare_domain() {
        assert_eq!(
            KaitenConfig::base_url("mycompany").unwrap(),
            "https://mycompany.kaiten.ru/api/v1"
        );
    }

    #[test]
    fn test_base_url_strips_protocol() {
        assert_eq!(
            KaitenConfig::base_url("https://mycompany").unwrap(),
            "https://mycompany.kaiten.ru/api/v1"
        );
        assert_eq!(
            KaitenConfig::base_url("http://mycompany").unwrap(),
            "https://mycompany.kaiten.ru/api/v1"
        );
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        assert_eq!(
            KaitenConfig::base_url("mycompany.kaiten.ru/").unwrap(),
            "https://mycompany.kaiten.ru/api/v1"
        );
    }

    #[test]
    fn test_base_url_keeps_full_domain() {
        assert_eq!(
            KaitenConfig::base_url("team.kaiten.ru").unwrap(),
            "https://team.kaiten.ru/api/v1"
        );
    }

    #[test]
    fn test_base_url_empty_domain() {
        assert!(matches!(
            KaitenConfig::base_url("   "),
            Err(KaitenError::Configuration(_))
        ));
    }
}
