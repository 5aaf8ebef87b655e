//
//  kaiten-client
//  api/comments.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Card comment operations (`/cards/{card_id}/comments`).

use serde_json::json;

use super::client::KaitenClient;
use super::common::{deserialize_items, deserialize_payload, Result};
use crate::models::Comment;

impl KaitenClient {
    /// Lists the comments of a card.
    pub async fn get_card_comments(&self, card_id: u64) -> Result<Vec<Comment>> {
        let payload = self
            .get(&format!("/cards/{}/comments", card_id), &[])
            .await?;
        deserialize_items(payload)
    }

    /// Adds a comment to a card.
    pub async fn add_comment(&self, card_id: u64, text: &str) -> Result<Comment> {
        let body = json!({ "text": text });
        let payload = self
            .post(&format!("/cards/{}/comments", card_id), &body)
            .await?;
        deserialize_payload(payload)
    }

    /// Replaces the text of a comment.
    pub async fn update_comment(
        &self,
        card_id: u64,
        comment_id: u64,
        text: &str,
    ) -> Result<Comment> {
        let body = json!({ "text": text });
        let payload = self
            .patch(&format!("/cards/{}/comments/{}", card_id, comment_id), &body)
            .await?;
        deserialize_payload(payload)
    }

    /// Deletes a comment.
    pub async fn delete_comment(&self, card_id: u64, comment_id: u64) -> Result<()> {
        self.delete(&format!("/cards/{}/comments/{}", card_id, comment_id))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_comment() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/cards/101/comments")
            .match_body(mockito::Matcher::Json(json!({"text": "looks good"})))
            .with_status(200)
            .with_body(r#"{"id": 9, "card_id": 101, "text": "looks good"}"#)
            .create_async()
            .await;

        let client = KaitenClient::new("testco", "test-token")
            .unwrap()
            .with_base_url(server.url());
        let comment = client.add_comment(101, "looks good").await.unwrap();
        assert_eq!(comment.text.as_deref(), Some("looks good"));
        mock.assert_async().await;
    }
}
