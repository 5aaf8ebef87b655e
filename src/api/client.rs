//
//  kaiten-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client and Transport Executor
//!
//! This module provides [`KaitenClient`], the entry point of the crate and
//! the owner of the request pipeline. A client holds one HTTP connection
//! pool, one set of [`Credentials`] and one shared [`RateLimiter`] for its
//! whole session; the pool is released exactly once, when the client is
//! dropped.
//!
//! ## The Pipeline
//!
//! Every façade method funnels into [`KaitenClient::request`], which per
//! attempt:
//!
//! 1. Acquires a rate-limit slot (each retry is a new request-start and
//!    acquires its own slot)
//! 2. Sends the exchange with the resolved URL, headers, query and body
//! 3. Branches on the outcome:
//!    - transport error → wait `retry_delay`, retry; exhausted →
//!      [`KaitenError::Connection`] (or [`KaitenError::Timeout`] when the
//!      deadline elapsed)
//!    - 429 → wait the server's `Retry-After` (default 1 s), clear the rate
//!      window, retry; exhausted → [`KaitenError::RateLimited`]
//!    - anything else → classified terminally by
//!      [`classify`](super::response::classify)
//!
//! ## Query Strings
//!
//! Parameters are appended literally as `key=value` pairs (`?` before the
//! first, `&` after). Callers are responsible for pre-encoding values that
//! contain reserved characters; filter values produced by this crate are
//! plain identifiers, dates and comma-separated id lists.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use kaiten_client::KaitenClient;
//!
//! # fn example() -> Result<(), kaiten_client::KaitenError> {
//! let client = KaitenClient::new("mycompany", "my-api-token")?
//!     .with_rate_limit(3)
//!     .with_timeout(Duration::from_secs(10))?;
//! # Ok(())
//! # }
//! ```

use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{info, warn};

use super::common::{KaitenError, Result};
use super::rate_limit::RateLimiter;
use super::response::{classify, error_for, parse_retry_after};
use crate::auth::Credentials;
use crate::config::KaitenConfig;

/// Async client for the Kaiten API.
///
/// Cheap to share by reference: all methods take `&self`, and any number of
/// concurrent calls may be in flight on one client. The only state they
/// share mutably is the rate-limit window, which is updated as a critical
/// section.
#[derive(Debug)]
pub struct KaitenClient {
    /// The underlying HTTP client (connection pool).
    http: Client,
    /// Account credentials and derived header sets.
    credentials: Credentials,
    /// Base API URL; normally derived from the credentials, overridable
    /// for self-hosted instances and tests.
    base_url: String,
    /// Sliding-window limiter shared by all calls on this client.
    limiter: RateLimiter,
    /// Maximum transport attempts per logical call.
    max_retries: u32,
    /// Delay between attempts after a transport failure.
    retry_delay: Duration,
}

impl KaitenClient {
    /// Creates a client for the given account domain and API token.
    ///
    /// # Errors
    ///
    /// Returns [`KaitenError::Configuration`] when the domain or token is
    /// empty, or when the HTTP client cannot be built.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use kaiten_client::KaitenClient;
    ///
    /// let client = KaitenClient::new("mycompany", "my-api-token")?;
    /// assert_eq!(client.base_url(), "https://mycompany.kaiten.ru/api/v1");
    /// # Ok::<(), kaiten_client::KaitenError>(())
    /// ```
    pub fn new(domain: &str, token: &str) -> Result<Self> {
        let credentials = Credentials::new(domain, token)?;
        Self::with_credentials(credentials)
    }

    /// Creates a client from prebuilt [`Credentials`].
    pub fn with_credentials(credentials: Credentials) -> Result<Self> {
        let http = build_http(KaitenConfig::DEFAULT_TIMEOUT)?;
        let base_url = credentials.base_url().to_string();

        info!(domain = credentials.domain(), "Kaiten client initialized");

        Ok(Self {
            http,
            credentials,
            base_url,
            limiter: RateLimiter::new(KaitenConfig::LIMIT_PER_SEC),
            max_retries: KaitenConfig::MAX_RETRIES,
            retry_delay: KaitenConfig::RETRY_DELAY,
        })
    }

    /// Replaces the request timeout (default 30 s).
    ///
    /// # Errors
    ///
    /// Returns [`KaitenError::Configuration`] when the HTTP client cannot
    /// be rebuilt.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http = build_http(timeout)?;
        Ok(self)
    }

    /// Replaces the per-second request budget (default 3).
    #[must_use]
    pub fn with_rate_limit(mut self, limit: usize) -> Self {
        self.limiter = RateLimiter::new(limit);
        self
    }

    /// Replaces the transport retry budget (default 3 attempts).
    #[must_use]
    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries.max(1);
        self
    }

    /// Replaces the delay between transport-error attempts (default 1 s).
    #[must_use]
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Points the client at a different base URL.
    ///
    /// Intended for self-hosted Kaiten instances; the credentials' header
    /// sets are kept as-is.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// The base API URL this client sends requests to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The credentials this client was built with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Executes one logical API call through the full pipeline.
    ///
    /// Returns `Ok(None)` for empty (204) successes, `Ok(Some(json))`
    /// otherwise.
    pub(crate) async fn request(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Option<Value>> {
        let url = self.build_url(endpoint, params);
        let mut attempt = 0;

        loop {
            attempt += 1;
            // Every attempt is a fresh request-start against the budget.
            self.limiter.acquire().await;

            let mut request = self.http.request(method.clone(), &url);
            request = request.headers(self.credentials.headers().clone());
            if let Some(body) = body {
                request = request.json(body);
            }

            match request.send().await {
                Err(err) if attempt < self.max_retries => {
                    warn!(
                        %err,
                        attempt,
                        max = self.max_retries,
                        "transport error, retrying after delay"
                    );
                    tokio::time::sleep(self.retry_delay).await;
                }
                Err(err) => {
                    return Err(if err.is_timeout() {
                        KaitenError::Timeout {
                            attempts: attempt,
                            source: err,
                        }
                    } else {
                        KaitenError::Connection {
                            attempts: attempt,
                            source: err,
                        }
                    });
                }
                Ok(response) if response.status() == StatusCode::TOO_MANY_REQUESTS => {
                    let retry_after = parse_retry_after(
                        response
                            .headers()
                            .get(reqwest::header::RETRY_AFTER)
                            .and_then(|value| value.to_str().ok()),
                    );
                    warn!(
                        retry_after,
                        attempt,
                        max = self.max_retries,
                        "rate limit hit (429), waiting before retry"
                    );
                    tokio::time::sleep(Duration::from_secs_f64(retry_after)).await;
                    // The server's counter has reset; resynchronize ours.
                    self.limiter.clear().await;

                    if attempt >= self.max_retries {
                        return Err(KaitenError::RateLimited {
                            attempts: attempt,
                            retry_after,
                        });
                    }
                }
                Ok(response) => return classify(response, endpoint).await,
            }
        }
    }

    /// Executes a GET request.
    pub(crate) async fn get(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Option<Value>> {
        self.request(Method::GET, endpoint, params, None).await
    }

    /// Executes a POST request with a JSON body.
    pub(crate) async fn post(&self, endpoint: &str, body: &Value) -> Result<Option<Value>> {
        self.request(Method::POST, endpoint, &[], Some(body)).await
    }

    /// Executes a PATCH request with a JSON body.
    pub(crate) async fn patch(&self, endpoint: &str, body: &Value) -> Result<Option<Value>> {
        self.request(Method::PATCH, endpoint, &[], Some(body)).await
    }

    /// Executes a DELETE request.
    pub(crate) async fn delete(&self, endpoint: &str) -> Result<Option<Value>> {
        self.request(Method::DELETE, endpoint, &[], None).await
    }

    /// Sends a multipart upload through the rate limiter and classifier.
    ///
    /// Uploads are single-attempt: a multipart body cannot be replayed, so
    /// transport failures surface immediately instead of retrying.
    pub(crate) async fn post_multipart(
        &self,
        endpoint: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Option<Value>> {
        let url = self.build_url(endpoint, &[]);
        self.limiter.acquire().await;

        let response = self
            .http
            .post(&url)
            .headers(self.credentials.upload_headers().clone())
            .multipart(form)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    KaitenError::Timeout {
                        attempts: 1,
                        source: err,
                    }
                } else {
                    KaitenError::Connection {
                        attempts: 1,
                        source: err,
                    }
                }
            })?;

        classify(response, endpoint).await
    }

    /// Fetches raw bytes from an absolute URL (file downloads).
    pub(crate) async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        self.limiter.acquire().await;

        let response = self
            .http
            .get(url)
            .headers(self.credentials.upload_headers().clone())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_for(response, url).await);
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Assembles the request URL from the endpoint and query parameters.
    ///
    /// Values are appended literally; see the module docs for the encoding
    /// contract.
    fn build_url(&self, endpoint: &str, params: &[(String, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, endpoint);
        for (key, value) in params {
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }
        url
    }
}

fn build_http(timeout: Duration) -> Result<Client> {
    Client::builder()
        .user_agent(format!("kaiten-client/{}", crate::VERSION))
        .timeout(timeout)
        .build()
        .map_err(|e| KaitenError::Configuration(format!("failed to build HTTP client: {}", e)))
}
