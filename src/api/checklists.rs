//
//  kaiten-client
//  api/checklists.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Checklist and checklist-item operations.
//!
//! Kaiten has no endpoint listing a card's checklists directly; the listing
//! fetches the card with `additional_card_fields=checklists` and extracts
//! the embedded array. Because those payloads omit the owning card (and
//! checklist) ids, every returned value is stamped with the ids from the
//! request context before being handed back.

use serde::Serialize;
use serde_json::Value;

use super::client::KaitenClient;
use super::common::{deserialize_payload, Result};
use crate::models::{Checklist, ChecklistItem};

/// Payload for creating a checklist on a card.
///
/// The copy fields (`items_source_checklist_id`, `exclude_item_ids`,
/// `source_share_id`) seed the new checklist from an existing one or from a
/// shared template.
#[derive(Debug, Clone, Serialize)]
pub struct CreateChecklistRequest {
    /// Display name of the new checklist.
    pub name: String,

    /// Ordering weight among the card's checklists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<f64>,

    /// Checklist to copy items from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_source_checklist_id: Option<u64>,

    /// Item ids to skip while copying.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_item_ids: Option<Vec<u64>>,

    /// Shared checklist template to instantiate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_share_id: Option<u64>,
}

impl CreateChecklistRequest {
    /// Creates a request with the required name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sort_order: None,
            items_source_checklist_id: None,
            exclude_item_ids: None,
            source_share_id: None,
        }
    }
}

/// Payload for updating a checklist. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateChecklistRequest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New ordering weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<f64>,

    /// Move the checklist to this card.
    #[serde(rename = "card_id", skip_serializing_if = "Option::is_none")]
    pub move_to_card_id: Option<u64>,
}

/// Payload for adding a checklist item.
#[derive(Debug, Clone, Serialize)]
pub struct AddChecklistItemRequest {
    /// Item text.
    pub text: String,

    /// Ordering weight inside the checklist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<f64>,

    /// Initial ticked state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,

    /// Due date (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// User responsible for the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible_id: Option<u64>,
}

impl AddChecklistItemRequest {
    /// Creates a request with the required text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sort_order: None,
            checked: None,
            due_date: None,
            responsible_id: None,
        }
    }
}

/// Payload for updating a checklist item. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateChecklistItemRequest {
    /// New item text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// New ordering weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<f64>,

    /// Move the item to this checklist.
    #[serde(rename = "checklist_id", skip_serializing_if = "Option::is_none")]
    pub move_to_checklist_id: Option<u64>,

    /// New ticked state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,

    /// New due date (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// New responsible user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible_id: Option<u64>,
}

impl KaitenClient {
    /// Lists the checklists of a card.
    pub async fn get_card_checklists(&self, card_id: u64) -> Result<Vec<Checklist>> {
        let params = vec![(
            "additional_card_fields".to_string(),
            "checklists".to_string(),
        )];
        let payload = self.get(&format!("/cards/{}", card_id), &params).await?;

        let card = payload.unwrap_or(Value::Null);
        let embedded = card
            .get("checklists")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()));

        let mut checklists: Vec<Checklist> = serde_json::from_value(embedded)?;
        for checklist in &mut checklists {
            checklist.card_id = Some(card_id);
        }
        Ok(checklists)
    }

    /// Fetches a single checklist.
    pub async fn get_checklist(&self, card_id: u64, checklist_id: u64) -> Result<Checklist> {
        let payload = self
            .get(
                &format!("/cards/{}/checklists/{}", card_id, checklist_id),
                &[],
            )
            .await?;
        let mut checklist: Checklist = deserialize_payload(payload)?;
        checklist.card_id = Some(card_id);
        Ok(checklist)
    }

    /// Creates a checklist on a card.
    pub async fn create_checklist(
        &self,
        card_id: u64,
        request: CreateChecklistRequest,
    ) -> Result<Checklist> {
        let body = serde_json::to_value(&request)?;
        let payload = self
            .post(&format!("/cards/{}/checklists", card_id), &body)
            .await?;
        let mut checklist: Checklist = deserialize_payload(payload)?;
        checklist.card_id = Some(card_id);
        Ok(checklist)
    }

    /// Updates a checklist; a set `move_to_card_id` moves it to another
    /// card, and the returned value is stamped with the destination.
    pub async fn update_checklist(
        &self,
        card_id: u64,
        checklist_id: u64,
        request: UpdateChecklistRequest,
    ) -> Result<Checklist> {
        let destination = request.move_to_card_id.unwrap_or(card_id);
        let body = serde_json::to_value(&request)?;
        let payload = self
            .patch(
                &format!("/cards/{}/checklists/{}", card_id, checklist_id),
                &body,
            )
            .await?;
        let mut checklist: Checklist = deserialize_payload(payload)?;
        checklist.card_id = Some(destination);
        Ok(checklist)
    }

    /// Deletes a checklist.
    pub async fn delete_checklist(&self, card_id: u64, checklist_id: u64) -> Result<()> {
        self.delete(&format!("/cards/{}/checklists/{}", card_id, checklist_id))
            .await?;
        Ok(())
    }

    /// Adds an item to a checklist.
    pub async fn add_checklist_item(
        &self,
        card_id: u64,
        checklist_id: u64,
        request: AddChecklistItemRequest,
    ) -> Result<ChecklistItem> {
        let body = serde_json::to_value(&request)?;
        let payload = self
            .post(
                &format!("/cards/{}/checklists/{}/items", card_id, checklist_id),
                &body,
            )
            .await?;
        let mut item: ChecklistItem = deserialize_payload(payload)?;
        item.card_id = Some(card_id);
        item.checklist_id = Some(checklist_id);
        Ok(item)
    }

    /// Updates a checklist item; a set `move_to_checklist_id` moves it to
    /// another checklist, and the returned value is stamped with the
    /// destination.
    pub async fn update_checklist_item(
        &self,
        card_id: u64,
        checklist_id: u64,
        item_id: u64,
        request: UpdateChecklistItemRequest,
    ) -> Result<ChecklistItem> {
        let destination = request.move_to_checklist_id.unwrap_or(checklist_id);
        let body = serde_json::to_value(&request)?;
        let payload = self
            .patch(
                &format!(
                    "/cards/{}/checklists/{}/items/{}",
                    card_id, checklist_id, item_id
                ),
                &body,
            )
            .await?;
        let mut item: ChecklistItem = deserialize_payload(payload)?;
        item.card_id = Some(card_id);
        item.checklist_id = Some(destination);
        Ok(item)
    }

    /// Deletes a checklist item.
    pub async fn delete_checklist_item(
        &self,
        card_id: u64,
        checklist_id: u64,
        item_id: u64,
    ) -> Result<()> {
        self.delete(&format!(
            "/cards/{}/checklists/{}/items/{}",
            card_id, checklist_id, item_id
        ))
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_move_request_serializes_destination_as_card_id() {
        let request = UpdateChecklistRequest {
            move_to_card_id: Some(202),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"card_id": 202})
        );
    }

    #[tokio::test]
    async fn test_get_card_checklists_stamps_card_id() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/cards/101?additional_card_fields=checklists")
            .with_status(200)
            .with_body(
                r#"{"id": 101, "checklists": [{"id": 31, "name": "Release steps"}]}"#,
            )
            .create_async()
            .await;

        let client = KaitenClient::new("testco", "test-token")
            .unwrap()
            .with_base_url(server.url());
        let checklists = client.get_card_checklists(101).await.unwrap();
        assert_eq!(checklists.len(), 1);
        assert_eq!(checklists[0].card_id, Some(101));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_item_stamps_destination_checklist() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/cards/101/checklists/31/items/2")
            .match_body(mockito::Matcher::Json(json!({"checklist_id": 32})))
            .with_status(200)
            .with_body(r#"{"id": 2, "text": "publish notes"}"#)
            .create_async()
            .await;

        let client = KaitenClient::new("testco", "test-token")
            .unwrap()
            .with_base_url(server.url());
        let request = UpdateChecklistItemRequest {
            move_to_checklist_id: Some(32),
            ..Default::default()
        };
        let item = client
            .update_checklist_item(101, 31, 2, request)
            .await
            .unwrap();
        assert_eq!(item.checklist_id, Some(32));
        assert_eq!(item.card_id, Some(101));
        mock.assert_async().await;
    }
}
