//
//  kaiten-client
//  api/boards.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Board operations.
//!
//! Boards are created, updated and deleted through their owning space
//! (`/spaces/{space_id}/boards`); a single board can also be fetched
//! directly by id (`/boards/{board_id}`).

use serde::Serialize;
use serde_json::Value;

use super::client::KaitenClient;
use super::common::{deserialize_items, deserialize_payload, Result};
use crate::models::Board;

/// Payload for creating a board.
///
/// `columns` and `lanes` seed the initial workflow; each column entry needs
/// at least a `title` and a `type` (1 queued, 2 in progress, 3 done). Both
/// lists are always sent, empty lists meaning the server defaults.
#[derive(Debug, Clone, Serialize)]
pub struct CreateBoardRequest {
    /// Display name of the new board.
    pub title: String,

    /// Initial columns.
    pub columns: Vec<Value>,

    /// Initial lanes.
    pub lanes: Vec<Value>,

    /// Optional long-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateBoardRequest {
    /// Creates a request with the required title and server-default
    /// columns and lanes.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            columns: Vec::new(),
            lanes: Vec::new(),
            description: None,
        }
    }
}

/// Payload for updating a board. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateBoardRequest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New default card type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_card_type_id: Option<u64>,
}

impl KaitenClient {
    /// Lists the boards of a space.
    pub async fn get_boards(&self, space_id: u64) -> Result<Vec<Board>> {
        let payload = self
            .get(&format!("/spaces/{}/boards", space_id), &[])
            .await?;
        deserialize_items(payload)
    }

    /// Fetches a single board by id, without the space scope.
    pub async fn get_board(&self, board_id: u64) -> Result<Board> {
        let payload = self.get(&format!("/boards/{}", board_id), &[]).await?;
        deserialize_payload(payload)
    }

    /// Creates a board in a space.
    pub async fn create_board(
        &self,
        space_id: u64,
        request: CreateBoardRequest,
    ) -> Result<Board> {
        let body = serde_json::to_value(&request)?;
        let payload = self
            .post(&format!("/spaces/{}/boards", space_id), &body)
            .await?;
        deserialize_payload(payload)
    }

    /// Updates a board; unset request fields are left unchanged.
    pub async fn update_board(
        &self,
        space_id: u64,
        board_id: u64,
        request: UpdateBoardRequest,
    ) -> Result<Board> {
        let body = serde_json::to_value(&request)?;
        let payload = self
            .patch(&format!("/spaces/{}/boards/{}", space_id, board_id), &body)
            .await?;
        deserialize_payload(payload)
    }

    /// Deletes a board.
    pub async fn delete_board(&self, space_id: u64, board_id: u64) -> Result<()> {
        self.delete(&format!("/spaces/{}/boards/{}", space_id, board_id))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_always_sends_seed_lists() {
        let body = serde_json::to_value(CreateBoardRequest::new("Sprint")).unwrap();
        assert_eq!(
            body,
            json!({"title": "Sprint", "columns": [], "lanes": []})
        );
    }

    #[tokio::test]
    async fn test_get_board_unscoped_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/boards/42")
            .with_status(200)
            .with_body(r#"{"id": 42, "title": "Sprint", "space_id": 7}"#)
            .create_async()
            .await;

        let client = KaitenClient::new("testco", "test-token")
            .unwrap()
            .with_base_url(server.url());
        let board = client.get_board(42).await.unwrap();
        assert_eq!(board.space_id, Some(7));
        mock.assert_async().await;
    }
}
