//
//  kaiten-client
//  models/lane.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Lane entity.

use serde::{Deserialize, Serialize};

/// A horizontal lane on a board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lane {
    /// Unique numeric identifier.
    pub id: u64,

    /// Display name of the lane.
    pub title: Option<String>,

    /// Owning board.
    pub board_id: Option<u64>,

    /// Ordering weight among lanes.
    pub sort_order: Option<f64>,

    /// Display height in rows.
    pub row_count: Option<u32>,

    /// Recommended work-in-progress limit.
    pub wip_limit: Option<u32>,

    /// WIP limit unit: 1 card count, 2 card size.
    pub wip_limit_type: Option<u32>,

    /// Card type applied to new cards in this lane.
    pub default_card_type_id: Option<u64>,

    /// Tags applied to new cards by default (comma-separated).
    pub default_tags: Option<String>,

    /// Identifier in an external system.
    pub external_id: Option<String>,

    /// Stale-card warning threshold, days part.
    pub last_moved_warning_after_days: Option<u32>,

    /// Stale-card warning threshold, hours part.
    pub last_moved_warning_after_hours: Option<u32>,

    /// Stale-card warning threshold, minutes part.
    pub last_moved_warning_after_minutes: Option<u32>,

    /// Lane state: 1 active, 2 archived, 3 deleted.
    pub condition: Option<u32>,

    /// Creation timestamp (ISO 8601).
    pub created: Option<String>,

    /// Last-update timestamp (ISO 8601).
    pub updated: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_lane() {
        let lane: Lane = serde_json::from_value(json!({
            "id": 9,
            "title": "Expedite",
            "board_id": 42,
            "wip_limit": 1,
            "wip_limit_type": 1
        }))
        .unwrap();
        assert_eq!(lane.id, 9);
        assert_eq!(lane.wip_limit, Some(1));
    }
}
