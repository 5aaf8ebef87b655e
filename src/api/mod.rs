//
//  kaiten-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client for the Kaiten REST API (v1) and
//! the resource façades built on top of it.
//!
//! ## Architecture
//!
//! The layer is organized as follows:
//!
//! - [`client`]: Core HTTP client with the retrying, rate-limited transport
//!   executor
//! - [`common`]: Shared types ([`KaitenError`](common::KaitenError), envelope
//!   unwrapping)
//! - one module per resource, each extending [`KaitenClient`](client::KaitenClient)
//!   with typed methods: [`spaces`], [`boards`], [`columns`], [`lanes`],
//!   [`cards`], [`comments`], [`files`], [`tags`], [`checklists`],
//!   [`properties`], [`users`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kaiten_client::KaitenClient;
//!
//! # async fn example() -> Result<(), kaiten_client::KaitenError> {
//! let client = KaitenClient::new("mycompany", "my-api-token")?;
//!
//! for space in client.get_spaces().await? {
//!     println!("{} {:?}", space.id, space.title);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All methods return [`Result`](common::Result); see
//! [`KaitenError`](common::KaitenError) for the failure taxonomy.

/// Core HTTP client and transport executor.
pub mod client;

/// Shared API types: error taxonomy and envelope unwrapping.
pub mod common;

/// Board operations, scoped under a space.
pub mod boards;

/// Card CRUD, filtering, movement and membership.
pub mod cards;

/// Checklists and checklist items on cards.
pub mod checklists;

/// Column operations, scoped under a board.
pub mod columns;

/// Card comments.
pub mod comments;

/// File attachments: upload, download, deletion.
pub mod files;

/// Lane operations, scoped under a board.
pub mod lanes;

/// Company-wide custom properties, select values and per-card values.
pub mod properties;

/// Space CRUD and space membership.
pub mod spaces;

/// Company-wide card tags.
pub mod tags;

/// Current-user and company-user directory operations.
pub mod users;

pub(crate) mod rate_limit;
pub(crate) mod response;

/// Re-export of the main Kaiten API client.
pub use client::KaitenClient;

/// Re-export of the common result and error types.
pub use common::{KaitenError, Result};
