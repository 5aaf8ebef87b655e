//
//  kaiten-client
//  models/column.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Column entity.

use serde::{Deserialize, Serialize};

/// A column on a board.
///
/// Columns model workflow stages; the column `type` distinguishes queued,
/// in-progress and done stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Unique numeric identifier.
    pub id: u64,

    /// Display name of the column.
    pub title: Option<String>,

    /// Owning board.
    pub board_id: Option<u64>,

    /// Workflow stage: 1 queued, 2 in progress, 3 done.
    #[serde(rename = "type")]
    pub column_type: Option<u32>,

    /// Position of the column on the board.
    pub position: Option<i64>,

    /// Ordering weight among columns.
    pub sort_order: Option<f64>,

    /// Creation timestamp (ISO 8601).
    pub created_at: Option<String>,

    /// Last-update timestamp (ISO 8601).
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_column_type_rename() {
        let column: Column = serde_json::from_value(json!({
            "id": 3,
            "title": "In Progress",
            "board_id": 42,
            "type": 2
        }))
        .unwrap();
        assert_eq!(column.column_type, Some(2));
    }
}
