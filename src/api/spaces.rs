//
//  kaiten-client
//  api/spaces.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Space operations.
//!
//! Spaces are the root of the Kaiten hierarchy. This module provides space
//! CRUD plus the space-membership listing.
//!
//! # Example
//!
//! ```rust,no_run
//! use kaiten_client::{KaitenClient, api::spaces::CreateSpaceRequest};
//!
//! # async fn example(client: &KaitenClient) -> Result<(), kaiten_client::KaitenError> {
//! let space = client
//!     .create_space(CreateSpaceRequest::new("Platform Team"))
//!     .await?;
//! println!("created space {}", space.id);
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use super::client::KaitenClient;
use super::common::{deserialize_items, deserialize_payload, Result};
use crate::models::{Space, User};

/// Payload for creating a space.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSpaceRequest {
    /// Display name of the new space.
    pub title: String,

    /// Optional long-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateSpaceRequest {
    /// Creates a request with the required title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }
}

/// Payload for updating a space. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSpaceRequest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New external identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

/// Filters for the space-membership listing.
#[derive(Debug, Clone, Default)]
pub struct SpaceUsersQuery {
    /// Include users whose access is inherited from a parent entity.
    pub include_inherited_access: Option<bool>,

    /// Restrict to inactive company users.
    pub inactive: Option<bool>,
}

impl SpaceUsersQuery {
    fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(value) = self.include_inherited_access {
            params.push(("include_inherited_access".to_string(), value.to_string()));
        }
        if let Some(value) = self.inactive {
            params.push(("inactive".to_string(), value.to_string()));
        }
        params
    }
}

impl KaitenClient {
    /// Lists all spaces visible to the token.
    pub async fn get_spaces(&self) -> Result<Vec<Space>> {
        let payload = self.get("/spaces", &[]).await?;
        deserialize_items(payload)
    }

    /// Fetches a single space.
    pub async fn get_space(&self, space_id: u64) -> Result<Space> {
        let payload = self.get(&format!("/spaces/{}", space_id), &[]).await?;
        deserialize_payload(payload)
    }

    /// Creates a space.
    pub async fn create_space(&self, request: CreateSpaceRequest) -> Result<Space> {
        let body = serde_json::to_value(&request)?;
        let payload = self.post("/spaces", &body).await?;
        deserialize_payload(payload)
    }

    /// Updates a space; unset request fields are left unchanged.
    pub async fn update_space(&self, space_id: u64, request: UpdateSpaceRequest) -> Result<Space> {
        let body = serde_json::to_value(&request)?;
        let payload = self.patch(&format!("/spaces/{}", space_id), &body).await?;
        deserialize_payload(payload)
    }

    /// Deletes a space.
    pub async fn delete_space(&self, space_id: u64) -> Result<()> {
        self.delete(&format!("/spaces/{}", space_id)).await?;
        Ok(())
    }

    /// Lists the users of a space.
    pub async fn get_space_users(
        &self,
        space_id: u64,
        query: SpaceUsersQuery,
    ) -> Result<Vec<User>> {
        let params = query.to_params();
        let payload = self
            .get(&format!("/spaces/{}/users", space_id), &params)
            .await?;
        deserialize_items(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_skips_unset_fields() {
        let body = serde_json::to_value(CreateSpaceRequest::new("Ops")).unwrap();
        assert_eq!(body, json!({"title": "Ops"}));
    }

    #[test]
    fn test_space_users_query_params() {
        let query = SpaceUsersQuery {
            include_inherited_access: Some(true),
            inactive: None,
        };
        assert_eq!(
            query.to_params(),
            vec![("include_inherited_access".to_string(), "true".to_string())]
        );
    }

    #[tokio::test]
    async fn test_get_spaces_unwraps_envelope() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/spaces")
            .with_status(200)
            .with_body(r#"{"items": [{"id": 1, "title": "Main"}], "total": 1}"#)
            .create_async()
            .await;

        let client = KaitenClient::new("testco", "test-token")
            .unwrap()
            .with_base_url(server.url());
        let spaces = client.get_spaces().await.unwrap();
        assert_eq!(spaces.len(), 1);
        assert_eq!(spaces[0].title.as_deref(), Some("Main"));
        mock.assert_async().await;
    }
}
