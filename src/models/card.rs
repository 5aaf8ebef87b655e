//
//  kaiten-client
//  models/card.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Card entity.
//!
//! Cards are the work items of Kaiten. The base representation carries the
//! identity and placement fields; heavier payloads (description, checklists,
//! custom property values) are only present when requested through
//! `additional_card_fields`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::checklist::Checklist;
use super::member::Member;
use super::tag::Tag;

/// A Kaiten card.
///
/// # Example
///
/// ```rust,no_run
/// use kaiten_client::models::Card;
///
/// fn display_card(card: &Card) {
///     let title = card.title.as_deref().unwrap_or("(untitled)");
///     println!("#{} {}", card.id, title);
///     if let Some(due) = &card.due_date {
///         println!("  due {}", due);
///     }
/// }
/// ```
///
/// # Notes
///
/// - `checklists` and `properties` are only populated when the card was
///   fetched with the matching `additional_card_fields` value.
/// - Custom property values arrive keyed as `id_{property_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Unique numeric identifier.
    pub id: u64,

    /// Card title.
    pub title: Option<String>,

    /// Long-form description (Markdown).
    pub description: Option<String>,

    /// Column the card currently sits in.
    pub column_id: Option<u64>,

    /// Lane the card currently sits in.
    pub lane_id: Option<u64>,

    /// Board the card currently sits on.
    pub board_id: Option<u64>,

    /// Assigned executor.
    pub assignee_id: Option<u64>,

    /// Owner of the card.
    pub owner_id: Option<u64>,

    /// Parent card, when this card is a child.
    pub parent_id: Option<u64>,

    /// Card type.
    pub type_id: Option<u64>,

    /// Priority label (`low`, `normal`, `high`, `critical`).
    pub priority: Option<String>,

    /// Due date (`YYYY-MM-DD` or full ISO 8601).
    pub due_date: Option<String>,

    /// Workflow state: 1 queued, 2 in progress, 3 done.
    pub state: Option<u32>,

    /// Card state: 1 on board, 2 archived.
    pub condition: Option<u32>,

    /// Whether the card is archived.
    pub archived: Option<bool>,

    /// ASAP marker.
    pub asap: Option<bool>,

    /// Ordering weight inside its cell.
    pub sort_order: Option<f64>,

    /// Creation timestamp (ISO 8601).
    pub created_at: Option<String>,

    /// Last-update timestamp (ISO 8601).
    pub updated_at: Option<String>,

    /// Tags attached to the card.
    pub tags: Option<Vec<Tag>>,

    /// Members of the card, when included.
    pub members: Option<Vec<Member>>,

    /// Checklists, when fetched with `additional_card_fields=checklists`.
    pub checklists: Option<Vec<Checklist>>,

    /// Custom property values keyed `id_{property_id}`, when fetched with
    /// `additional_card_fields=properties`.
    pub properties: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_base_card() {
        let card: Card = serde_json::from_value(json!({
            "id": 101,
            "title": "Fix login flow",
            "column_id": 5,
            "board_id": 42,
            "priority": "high"
        }))
        .unwrap();
        assert_eq!(card.id, 101);
        assert_eq!(card.column_id, Some(5));
        assert!(card.checklists.is_none());
    }

    #[test]
    fn test_deserialize_card_with_properties() {
        let card: Card = serde_json::from_value(json!({
            "id": 101,
            "properties": {"id_19": "ready", "id_7": [1, 2]}
        }))
        .unwrap();
        let properties = card.properties.unwrap();
        assert_eq!(properties["id_19"], "ready");
    }
}
