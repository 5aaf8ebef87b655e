//
//  kaiten-client
//  api/columns.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Column operations, scoped under a board (`/boards/{board_id}/columns`).

use serde::Serialize;

use super::client::KaitenClient;
use super::common::{deserialize_items, deserialize_payload, Result};
use crate::models::Column;

/// Payload for creating a column.
#[derive(Debug, Clone, Serialize)]
pub struct CreateColumnRequest {
    /// Display name of the new column.
    pub title: String,

    /// Position of the column on the board.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

impl CreateColumnRequest {
    /// Creates a request with the required title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            position: None,
        }
    }
}

/// Payload for updating a column. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateColumnRequest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New position on the board.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// New ordering weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<f64>,
}

impl KaitenClient {
    /// Lists the columns of a board.
    pub async fn get_columns(&self, board_id: u64) -> Result<Vec<Column>> {
        let payload = self
            .get(&format!("/boards/{}/columns", board_id), &[])
            .await?;
        deserialize_items(payload)
    }

    /// Fetches a single column.
    pub async fn get_column(&self, board_id: u64, column_id: u64) -> Result<Column> {
        let payload = self
            .get(&format!("/boards/{}/columns/{}", board_id, column_id), &[])
            .await?;
        deserialize_payload(payload)
    }

    /// Creates a column on a board.
    pub async fn create_column(
        &self,
        board_id: u64,
        request: CreateColumnRequest,
    ) -> Result<Column> {
        let body = serde_json::to_value(&request)?;
        let payload = self
            .post(&format!("/boards/{}/columns", board_id), &body)
            .await?;
        deserialize_payload(payload)
    }

    /// Updates a column; unset request fields are left unchanged.
    pub async fn update_column(
        &self,
        board_id: u64,
        column_id: u64,
        request: UpdateColumnRequest,
    ) -> Result<Column> {
        let body = serde_json::to_value(&request)?;
        let payload = self
            .patch(
                &format!("/boards/{}/columns/{}", board_id, column_id),
                &body,
            )
            .await?;
        deserialize_payload(payload)
    }

    /// Deletes a column.
    pub async fn delete_column(&self, board_id: u64, column_id: u64) -> Result<()> {
        self.delete(&format!("/boards/{}/columns/{}", board_id, column_id))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_serialization() {
        let mut request = CreateColumnRequest::new("Review");
        request.position = Some(2);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"title": "Review", "position": 2})
        );
    }
}
