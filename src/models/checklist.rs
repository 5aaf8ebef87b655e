//
//  kaiten-client
//  models/checklist.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Checklist entities.
//!
//! Kaiten has no standalone list endpoint for checklists; they arrive
//! embedded in a card fetched with `additional_card_fields=checklists`. The
//! server therefore does not always include the owning card id in the
//! checklist payload itself — the façade stamps `card_id` (and `checklist_id`
//! on items) from the request context before handing the value back.

use serde::{Deserialize, Serialize};

/// A checklist on a card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checklist {
    /// Unique numeric identifier.
    pub id: u64,

    /// Display name of the checklist.
    pub name: Option<String>,

    /// Card the checklist belongs to (stamped from request context when
    /// the payload omits it).
    pub card_id: Option<u64>,

    /// Ordering weight among the card's checklists.
    pub sort_order: Option<f64>,

    /// Policy the checklist was created by, when any.
    pub policy_id: Option<u64>,

    /// Items of the checklist, when included in the payload.
    pub items: Option<Vec<ChecklistItem>>,

    /// Creation timestamp (ISO 8601).
    pub created: Option<String>,

    /// Last-update timestamp (ISO 8601).
    pub updated: Option<String>,

    /// Soft-deletion marker.
    pub deleted: Option<bool>,
}

/// An item inside a checklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Unique numeric identifier.
    pub id: u64,

    /// Item text.
    pub text: Option<String>,

    /// Whether the item is ticked.
    pub checked: Option<bool>,

    /// Card the item belongs to (stamped from request context).
    pub card_id: Option<u64>,

    /// Checklist the item belongs to (stamped from request context).
    pub checklist_id: Option<u64>,

    /// Ordering weight inside the checklist.
    pub sort_order: Option<f64>,

    /// Due date (`YYYY-MM-DD`).
    pub due_date: Option<String>,

    /// User responsible for the item.
    pub responsible_id: Option<u64>,

    /// User who created the item.
    pub user_id: Option<u64>,

    /// User who ticked the item.
    pub checker_id: Option<u64>,

    /// When the item was ticked (ISO 8601).
    pub checked_at: Option<String>,

    /// Creation timestamp (ISO 8601).
    pub created: Option<String>,

    /// Last-update timestamp (ISO 8601).
    pub updated: Option<String>,

    /// Soft-deletion marker.
    pub deleted: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_checklist_with_items() {
        let checklist: Checklist = serde_json::from_value(json!({
            "id": 31,
            "name": "Release steps",
            "items": [
                {"id": 1, "text": "tag the build", "checked": true},
                {"id": 2, "text": "publish notes", "checked": false}
            ]
        }))
        .unwrap();
        let items = checklist.items.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].checked, Some(true));
        // The embedded payload carries no card context until stamped.
        assert!(checklist.card_id.is_none());
    }
}
