//
//  kaiten-client
//  models/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Kaiten Entity Models
//!
//! Plain value structs for the entities returned by the Kaiten API. Models
//! are deserialized with serde at the façade layer and hold no reference to
//! the client that fetched them: to refresh an entity, fetch it again
//! (`client.get_card(card.id)`), which returns a new value.
//!
//! Only `id` is required on every model; the server omits or nulls most
//! other fields depending on the endpoint and the `additional_card_fields`
//! parameter, so everything else is an `Option`.
//!
//! Timestamps are kept as the raw ISO 8601 strings the server sends; use
//! [`parse_timestamp`] to turn one into a [`chrono::DateTime`].

use chrono::{DateTime, Utc};

mod board;
mod card;
mod checklist;
mod column;
mod comment;
mod file;
mod lane;
mod member;
mod property;
mod space;
mod tag;
mod user;

pub use board::Board;
pub use card::Card;
pub use checklist::{Checklist, ChecklistItem};
pub use column::Column;
pub use comment::Comment;
pub use file::File;
pub use lane::Lane;
pub use member::Member;
pub use property::{Property, SelectValue};
pub use space::Space;
pub use tag::Tag;
pub use user::User;

/// Parses an ISO 8601 timestamp as the Kaiten API emits them
/// (RFC 3339, usually with a trailing `Z`).
///
/// Returns `None` for anything unparseable rather than erroring; timestamp
/// fields are informational and a malformed one should not fail a whole
/// deserialization.
///
/// # Example
///
/// ```rust
/// use kaiten_client::models::parse_timestamp;
///
/// let ts = parse_timestamp("2026-01-12T09:30:00.000Z").unwrap();
/// assert_eq!(ts.timezone(), chrono::Utc);
/// assert!(parse_timestamp("not a date").is_none());
/// ```
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
