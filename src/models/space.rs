//
//  kaiten-client
//  models/space.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Space entity.
//!
//! Spaces are the top level of the Kaiten hierarchy: a space holds boards,
//! boards hold columns and lanes, and cards live in the cells they form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Kaiten space.
///
/// # Fields
///
/// * `id` - Unique numeric identifier
/// * `uid` - Globally unique string identifier
/// * `title` - Display name of the space
/// * `path` - Materialized path in the space tree
/// * `archived` - Whether the space has been archived
///
/// # Example
///
/// ```rust,no_run
/// use kaiten_client::models::Space;
///
/// fn display_space(space: &Space) {
///     let title = space.title.as_deref().unwrap_or("(untitled)");
///     println!("#{} {}", space.id, title);
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Space {
    /// Unique numeric identifier.
    pub id: u64,

    /// Globally unique string identifier.
    pub uid: Option<String>,

    /// Internal name of the space.
    pub name: Option<String>,

    /// Display name of the space.
    pub title: Option<String>,

    /// Optional long-form description.
    pub description: Option<String>,

    /// Creation timestamp (ISO 8601).
    pub created: Option<String>,

    /// Last-update timestamp (ISO 8601).
    pub updated: Option<String>,

    /// Whether the space has been archived.
    pub archived: Option<bool>,

    /// Access level of the requesting user.
    pub access: Option<String>,

    /// Role granted to every company member, when the space is shared.
    pub for_everyone_access_role_id: Option<String>,

    /// Entity discriminator used by the space tree.
    pub entity_type: Option<String>,

    /// Materialized path in the space tree.
    pub path: Option<String>,

    /// Ordering weight among siblings.
    pub sort_order: Option<f64>,

    /// Parent entity in the space tree, when nested.
    pub parent_entity_uid: Option<String>,

    /// Owning company.
    pub company_id: Option<u64>,

    /// Identifier in an external system.
    pub external_id: Option<String>,

    /// Card types allowed in this space.
    pub allowed_card_type_ids: Option<Vec<u64>>,

    /// Space-level settings blob.
    pub settings: Option<Value>,

    /// Users with access, when the endpoint includes them.
    pub users: Option<Vec<Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_minimal() {
        let space: Space = serde_json::from_value(json!({"id": 12})).unwrap();
        assert_eq!(space.id, 12);
        assert!(space.title.is_none());
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let space: Space = serde_json::from_value(json!({
            "id": 12,
            "title": "Development",
            "archived": false,
            "some_future_field": {"nested": true}
        }))
        .unwrap();
        assert_eq!(space.title.as_deref(), Some("Development"));
        assert_eq!(space.archived, Some(false));
    }
}
