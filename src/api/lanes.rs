//
//  kaiten-client
//  api/lanes.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Lane operations, scoped under a board (`/boards/{board_id}/lanes`).

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::client::KaitenClient;
use super::common::{deserialize_items, deserialize_payload, Result};
use crate::models::Lane;

/// Payload for creating a lane.
///
/// `extra` carries any field not covered by the named ones; its entries are
/// flattened into the request body.
#[derive(Debug, Clone, Serialize)]
pub struct CreateLaneRequest {
    /// Display name of the new lane.
    pub title: String,

    /// Ordering weight among lanes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<f64>,

    /// Display height in rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_count: Option<u32>,

    /// Recommended work-in-progress limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wip_limit: Option<u32>,

    /// WIP limit unit: 1 card count, 2 card size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wip_limit_type: Option<u32>,

    /// Card type applied to new cards in this lane.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_card_type_id: Option<u64>,

    /// Identifier in an external system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    /// Tags applied to new cards by default (comma-separated).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tags: Option<String>,

    /// Stale-card warning threshold, days part.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_moved_warning_after_days: Option<u32>,

    /// Stale-card warning threshold, hours part.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_moved_warning_after_hours: Option<u32>,

    /// Stale-card warning threshold, minutes part.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_moved_warning_after_minutes: Option<u32>,

    /// Lane state: 1 active, 2 archived, 3 deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<u32>,

    /// Additional body fields, flattened into the payload.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl CreateLaneRequest {
    /// Creates a request with the required title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sort_order: None,
            row_count: None,
            wip_limit: None,
            wip_limit_type: None,
            default_card_type_id: None,
            external_id: None,
            default_tags: None,
            last_moved_warning_after_days: None,
            last_moved_warning_after_hours: None,
            last_moved_warning_after_minutes: None,
            condition: None,
            extra: BTreeMap::new(),
        }
    }
}

/// Payload for updating a lane. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateLaneRequest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New ordering weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<f64>,

    /// New WIP limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wip_limit: Option<u32>,

    /// New lane state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<u32>,

    /// Additional body fields, flattened into the payload.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl KaitenClient {
    /// Lists the lanes of a board.
    pub async fn get_lanes(&self, board_id: u64) -> Result<Vec<Lane>> {
        let payload = self
            .get(&format!("/boards/{}/lanes", board_id), &[])
            .await?;
        deserialize_items(payload)
    }

    /// Fetches a single lane.
    pub async fn get_lane(&self, board_id: u64, lane_id: u64) -> Result<Lane> {
        let payload = self
            .get(&format!("/boards/{}/lanes/{}", board_id, lane_id), &[])
            .await?;
        deserialize_payload(payload)
    }

    /// Creates a lane on a board.
    pub async fn create_lane(&self, board_id: u64, request: CreateLaneRequest) -> Result<Lane> {
        let body = serde_json::to_value(&request)?;
        let payload = self
            .post(&format!("/boards/{}/lanes", board_id), &body)
            .await?;
        deserialize_payload(payload)
    }

    /// Updates a lane; unset request fields are left unchanged.
    pub async fn update_lane(
        &self,
        board_id: u64,
        lane_id: u64,
        request: UpdateLaneRequest,
    ) -> Result<Lane> {
        let body = serde_json::to_value(&request)?;
        let payload = self
            .patch(&format!("/boards/{}/lanes/{}", board_id, lane_id), &body)
            .await?;
        deserialize_payload(payload)
    }

    /// Deletes a lane.
    pub async fn delete_lane(&self, board_id: u64, lane_id: u64) -> Result<()> {
        self.delete(&format!("/boards/{}/lanes/{}", board_id, lane_id))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_flattens_extra_fields() {
        let mut request = CreateLaneRequest::new("Expedite");
        request.wip_limit = Some(1);
        request
            .extra
            .insert("custom_flag".to_string(), json!(true));

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"title": "Expedite", "wip_limit": 1, "custom_flag": true})
        );
    }
}
