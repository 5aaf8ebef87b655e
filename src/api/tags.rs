//
//  kaiten-client
//  api/tags.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Company-wide tag operations (`/tags`).

use serde_json::{json, Map, Value};

use super::client::KaitenClient;
use super::common::{deserialize_items, deserialize_payload, Result};
use crate::models::Tag;

impl KaitenClient {
    /// Lists all tags.
    pub async fn get_tags(&self) -> Result<Vec<Tag>> {
        let payload = self.get("/tags", &[]).await?;
        deserialize_items(payload)
    }

    /// Fetches a single tag.
    pub async fn get_tag(&self, tag_id: u64) -> Result<Tag> {
        let payload = self.get(&format!("/tags/{}", tag_id), &[]).await?;
        deserialize_payload(payload)
    }

    /// Creates a tag. `color` is a hex value like `#ff0000`.
    pub async fn create_tag(&self, name: &str, color: Option<&str>) -> Result<Tag> {
        let mut body = Map::new();
        body.insert("name".to_string(), json!(name));
        if let Some(color) = color {
            body.insert("color".to_string(), json!(color));
        }
        let payload = self.post("/tags", &Value::Object(body)).await?;
        deserialize_payload(payload)
    }

    /// Updates a tag; `None` fields are left unchanged.
    pub async fn update_tag(
        &self,
        tag_id: u64,
        name: Option<&str>,
        color: Option<&str>,
    ) -> Result<Tag> {
        let mut body = Map::new();
        if let Some(name) = name {
            body.insert("name".to_string(), json!(name));
        }
        if let Some(color) = color {
            body.insert("color".to_string(), json!(color));
        }
        let payload = self
            .patch(&format!("/tags/{}", tag_id), &Value::Object(body))
            .await?;
        deserialize_payload(payload)
    }

    /// Deletes a tag.
    pub async fn delete_tag(&self, tag_id: u64) -> Result<()> {
        self.delete(&format!("/tags/{}", tag_id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_tag_with_color() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/tags")
            .match_body(mockito::Matcher::Json(
                json!({"name": "urgent", "color": "#ff0000"}),
            ))
            .with_status(200)
            .with_body(r##"{"id": 5, "name": "urgent", "color": "#ff0000"}"##)
            .create_async()
            .await;

        let client = KaitenClient::new("testco", "test-token")
            .unwrap()
            .with_base_url(server.url());
        let tag = client.create_tag("urgent", Some("#ff0000")).await.unwrap();
        assert_eq!(tag.id, 5);
        mock.assert_async().await;
    }
}
