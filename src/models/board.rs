//
//  kaiten-client
//  models/board.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Board entity.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A board inside a space.
///
/// Boards carry their own workflow configuration: columns, lanes, WIP
/// limits and automation flags. The column and lane lists are separate
/// entities fetched through the board-scoped endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    /// Unique numeric identifier.
    pub id: u64,

    /// Display name of the board.
    pub title: Option<String>,

    /// Optional long-form description.
    pub description: Option<String>,

    /// Owning space.
    pub space_id: Option<u64>,

    /// Creation timestamp (ISO 8601).
    pub created: Option<String>,

    /// Last-update timestamp (ISO 8601).
    pub updated: Option<String>,

    /// Identifier in an external system.
    pub external_id: Option<String>,

    /// Card type applied to new cards when none is given.
    pub default_card_type_id: Option<u64>,

    /// Key of the board's mail-in address.
    pub email_key: Option<String>,

    /// Tags applied to new cards by default (comma-separated).
    pub default_tags: Option<String>,

    /// Whether parent cards move to done with their children.
    pub move_parents_to_done: Option<bool>,

    /// Whether the first attached image becomes the card cover.
    pub first_image_is_cover: Option<bool>,

    /// Whether lane spent time resets on lane change.
    pub reset_lane_spent_time: Option<bool>,

    /// Whether cards may be moved backwards in the workflow.
    pub backward_moves_enabled: Option<bool>,

    /// Whether done policies are hidden on the board.
    pub hide_done_policies: Option<bool>,

    /// Whether done policies are hidden in the done column.
    pub hide_done_policies_in_done_column: Option<bool>,

    /// Whether cards are moved automatically by policies.
    pub automove_cards: Option<bool>,

    /// Whether auto-assignment of members is enabled.
    pub auto_assign_enabled: Option<bool>,

    /// Custom card properties enabled on this board.
    pub card_properties: Option<Vec<Value>>,

    /// Per-cell WIP limit configuration.
    pub cell_wip_limits: Option<Vec<Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_board() {
        let board: Board = serde_json::from_value(json!({
            "id": 42,
            "title": "Sprint Board",
            "space_id": 7,
            "backward_moves_enabled": true
        }))
        .unwrap();
        assert_eq!(board.id, 42);
        assert_eq!(board.space_id, Some(7));
        assert_eq!(board.backward_moves_enabled, Some(true));
    }
}
