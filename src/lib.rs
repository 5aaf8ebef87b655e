//
//  kaiten-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Kaiten Client Library
//!
//! An async client library for the [Kaiten](https://kaiten.ru) project
//! management REST API, covering spaces, boards, columns, lanes, cards, tags,
//! comments, files, checklists and custom properties.
//!
//! ## Overview
//!
//! The crate is built around a single request pipeline: every typed method
//! call is turned into a rate-limited, retried, authenticated HTTPS exchange,
//! and the response is classified into a success payload or a typed
//! [`KaitenError`]. All concurrent callers sharing one [`KaitenClient`]
//! share one sliding rate-limit window, so a client never collectively
//! exceeds the server's per-second request budget.
//!
//! ## Module Structure
//!
//! - [`api`]: The HTTP request pipeline and one façade module per resource
//! - [`auth`]: Credential handling and header sets
//! - [`config`]: Service constants (retry policy, rate limit, base URL rules)
//! - [`models`]: Value structs for the entities returned by the API
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use kaiten_client::KaitenClient;
//! use kaiten_client::api::cards::CreateCardRequest;
//!
//! # async fn example() -> Result<(), kaiten_client::KaitenError> {
//! let client = KaitenClient::new("mycompany", "my-api-token")?;
//!
//! let spaces = client.get_spaces().await?;
//! let boards = client.get_boards(spaces[0].id).await?;
//! let columns = client.get_columns(boards[0].id).await?;
//!
//! let card = client
//!     .create_card(CreateCardRequest::new("New task", columns[0].id))
//!     .await?;
//! client.add_comment(card.id, "First comment").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`KaitenError`] on failure. The taxonomy separates
//! "retry later" ([`KaitenError::RateLimited`]), "fix your request"
//! ([`KaitenError::Validation`], [`KaitenError::NotFound`]) and
//! "infrastructure problem" ([`KaitenError::Connection`],
//! [`KaitenError::Server`]) so callers can react appropriately.

/// HTTP request pipeline and per-resource API façades.
///
/// Contains the [`KaitenClient`] pipeline (rate limiter, transport executor,
/// response classifier) plus one module per Kaiten resource with the typed
/// request parameter structs.
pub mod api;

/// Credential handling.
///
/// Provides [`Credentials`], which validates the domain/token pair, derives
/// the base API URL, and builds the JSON and upload header sets.
pub mod auth;

/// Service configuration constants.
///
/// Retry budget, retry delay, request timeout, per-second rate limit and the
/// base-URL derivation rules, matching the limits documented by Kaiten.
pub mod config;

/// Value structs for the entities returned by the API.
///
/// Models are plain data: they hold no reference back to the client.
/// Refreshing an entity is a new fetch through the client
/// (e.g. [`KaitenClient::get_card`](api::client::KaitenClient::get_card)).
pub mod models;

pub use api::client::KaitenClient;
pub use api::common::{KaitenError, Result};
pub use auth::Credentials;
pub use config::KaitenConfig;

/// Library version, derived from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
