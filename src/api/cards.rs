//
//  kaiten-client
//  api/cards.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Card operations: listing with the full filter set, CRUD, movement and
//! card membership.
//!
//! # Filtering
//!
//! [`CardFilter`] mirrors the `/cards` query surface: date windows, content
//! search, include/exclude id lists (comma-separated), state and boolean
//! filters, pagination and ordering, plus an opaque base64 `filter`
//! expression. Filters not covered by a named field go into
//! [`additional_filters`](CardFilter::additional_filters), which is applied
//! last and overrides a named filter with the same key.
//!
//! # Example
//!
//! ```rust,no_run
//! use kaiten_client::{KaitenClient, api::cards::{CardFilter, CreateCardRequest}};
//!
//! # async fn example(client: &KaitenClient) -> Result<(), kaiten_client::KaitenError> {
//! let mut filter = CardFilter::default();
//! filter.board_id = Some(42);
//! filter.archived = Some(false);
//! filter.limit = Some(50);
//!
//! for card in client.get_cards(&filter).await? {
//!     println!("#{} {:?}", card.id, card.title);
//! }
//!
//! let card = client
//!     .create_card(CreateCardRequest::new("Fix login flow", 5))
//!     .await?;
//! client.move_card(card.id, 6).await?;
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::client::KaitenClient;
use super::common::{deserialize_items, deserialize_payload, Result};
use crate::models::{Card, Member};

fn push_param<T: ToString>(params: &mut Vec<(String, String)>, key: &str, value: &Option<T>) {
    if let Some(value) = value {
        params.push((key.to_string(), value.to_string()));
    }
}

/// Query filters for [`KaitenClient::get_cards`].
///
/// Every field is optional; `Default` yields an unfiltered listing. Fields
/// named `*_ids` take comma-separated id lists as the server expects them.
#[derive(Debug, Clone, Default)]
pub struct CardFilter {
    /// Restrict to one board.
    pub board_id: Option<u64>,

    /// Created strictly before this date (ISO 8601).
    pub created_before: Option<String>,
    /// Created strictly after this date (ISO 8601).
    pub created_after: Option<String>,
    /// Updated strictly before this date (ISO 8601).
    pub updated_before: Option<String>,
    /// Updated strictly after this date (ISO 8601).
    pub updated_after: Option<String>,
    /// First moved to in-progress after this date (ISO 8601).
    pub first_moved_in_progress_after: Option<String>,
    /// First moved to in-progress before this date (ISO 8601).
    pub first_moved_in_progress_before: Option<String>,
    /// Last moved to done after this date (ISO 8601).
    pub last_moved_to_done_at_after: Option<String>,
    /// Last moved to done before this date (ISO 8601).
    pub last_moved_to_done_at_before: Option<String>,
    /// Due after this date (ISO 8601).
    pub due_date_after: Option<String>,
    /// Due before this date (ISO 8601).
    pub due_date_before: Option<String>,

    /// Full-text search.
    pub query: Option<String>,
    /// Match a tag by name.
    pub tag: Option<String>,
    /// Match tags by id (comma-separated).
    pub tag_ids: Option<String>,
    /// Match card types by id (comma-separated).
    pub type_ids: Option<String>,

    /// Exclude boards (comma-separated ids).
    pub exclude_board_ids: Option<String>,
    /// Exclude lanes (comma-separated ids).
    pub exclude_lane_ids: Option<String>,
    /// Exclude columns (comma-separated ids).
    pub exclude_column_ids: Option<String>,
    /// Exclude owners (comma-separated ids).
    pub exclude_owner_ids: Option<String>,
    /// Exclude specific cards (comma-separated ids).
    pub exclude_card_ids: Option<String>,

    /// Restrict to columns (comma-separated ids).
    pub column_ids: Option<String>,
    /// Restrict to members (comma-separated ids).
    pub member_ids: Option<String>,
    /// Restrict to owners (comma-separated ids).
    pub owner_ids: Option<String>,
    /// Restrict to responsibles (comma-separated ids).
    pub responsible_ids: Option<String>,
    /// Restrict to organizations (comma-separated ids).
    pub organizations_ids: Option<String>,

    /// Workflow states (comma-separated): 1 queued, 2 in progress, 3 done.
    pub states: Option<String>,
    /// Match by external id.
    pub external_id: Option<String>,

    /// Extra card fields to include (comma-separated), e.g. `description`.
    pub additional_card_fields: Option<String>,
    /// Fields the text search applies to.
    pub search_fields: Option<String>,

    /// Restrict to one space.
    pub space_id: Option<u64>,
    /// Restrict to one column.
    pub column_id: Option<u64>,
    /// Restrict to one lane.
    pub lane_id: Option<u64>,
    /// Card state: 1 on board, 2 archived.
    pub condition: Option<u32>,
    /// Restrict to one card type.
    pub type_id: Option<u64>,
    /// Restrict to one responsible.
    pub responsible_id: Option<u64>,
    /// Restrict to one owner.
    pub owner_id: Option<u64>,

    /// Archived cards only (or exclude them with `false`).
    pub archived: Option<bool>,
    /// ASAP-marked cards only.
    pub asap: Option<bool>,
    /// Overdue cards only.
    pub overdue: Option<bool>,
    /// Cards done on time only.
    pub done_on_time: Option<bool>,
    /// Cards with a due date only.
    pub with_due_date: Option<bool>,
    /// Service-desk requests only.
    pub is_request: Option<bool>,

    /// Page size (max 100).
    pub limit: Option<u32>,
    /// Records to skip.
    pub offset: Option<u32>,
    /// Space whose ordering applies.
    pub order_space_id: Option<u64>,
    /// Sort fields (comma-separated).
    pub order_by: Option<String>,
    /// Sort directions, `asc` or `desc` (comma-separated).
    pub order_direction: Option<String>,

    /// Opaque base64-encoded and/or filter expression (`filter` key).
    pub filter_expression: Option<String>,

    /// Filters not covered by the named fields. Applied last: an entry with
    /// the same key as a named filter replaces it.
    pub additional_filters: BTreeMap<String, String>,
}

impl CardFilter {
    /// Renders the filter as query parameters, named fields first and
    /// `additional_filters` last with precedence on key collisions.
    pub(crate) fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        push_param(&mut params, "board_id", &self.board_id);
        push_param(&mut params, "created_before", &self.created_before);
        push_param(&mut params, "created_after", &self.created_after);
        push_param(&mut params, "updated_before", &self.updated_before);
        push_param(&mut params, "updated_after", &self.updated_after);
        push_param(
            &mut params,
            "first_moved_in_progress_after",
            &self.first_moved_in_progress_after,
        );
        push_param(
            &mut params,
            "first_moved_in_progress_before",
            &self.first_moved_in_progress_before,
        );
        push_param(
            &mut params,
            "last_moved_to_done_at_after",
            &self.last_moved_to_done_at_after,
        );
        push_param(
            &mut params,
            "last_moved_to_done_at_before",
            &self.last_moved_to_done_at_before,
        );
        push_param(&mut params, "due_date_after", &self.due_date_after);
        push_param(&mut params, "due_date_before", &self.due_date_before);
        push_param(&mut params, "query", &self.query);
        push_param(&mut params, "tag", &self.tag);
        push_param(&mut params, "tag_ids", &self.tag_ids);
        push_param(&mut params, "type_ids", &self.type_ids);
        push_param(&mut params, "exclude_board_ids", &self.exclude_board_ids);
        push_param(&mut params, "exclude_lane_ids", &self.exclude_lane_ids);
        push_param(&mut params, "exclude_column_ids", &self.exclude_column_ids);
        push_param(&mut params, "exclude_owner_ids", &self.exclude_owner_ids);
        push_param(&mut params, "exclude_card_ids", &self.exclude_card_ids);
        push_param(&mut params, "column_ids", &self.column_ids);
        push_param(&mut params, "member_ids", &self.member_ids);
        push_param(&mut params, "owner_ids", &self.owner_ids);
        push_param(&mut params, "responsible_ids", &self.responsible_ids);
        push_param(&mut params, "organizations_ids", &self.organizations_ids);
        push_param(&mut params, "states", &self.states);
        push_param(&mut params, "external_id", &self.external_id);
        push_param(
            &mut params,
            "additional_card_fields",
            &self.additional_card_fields,
        );
        push_param(&mut params, "search_fields", &self.search_fields);
        push_param(&mut params, "space_id", &self.space_id);
        push_param(&mut params, "column_id", &self.column_id);
        push_param(&mut params, "lane_id", &self.lane_id);
        push_param(&mut params, "condition", &self.condition);
        push_param(&mut params, "type_id", &self.type_id);
        push_param(&mut params, "responsible_id", &self.responsible_id);
        push_param(&mut params, "owner_id", &self.owner_id);
        push_param(&mut params, "archived", &self.archived);
        push_param(&mut params, "asap", &self.asap);
        push_param(&mut params, "overdue", &self.overdue);
        push_param(&mut params, "done_on_time", &self.done_on_time);
        push_param(&mut params, "with_due_date", &self.with_due_date);
        push_param(&mut params, "is_request", &self.is_request);
        push_param(&mut params, "limit", &self.limit);
        push_param(&mut params, "offset", &self.offset);
        push_param(&mut params, "order_space_id", &self.order_space_id);
        push_param(&mut params, "order_by", &self.order_by);
        push_param(&mut params, "order_direction", &self.order_direction);
        push_param(&mut params, "filter", &self.filter_expression);

        for (key, value) in &self.additional_filters {
            params.retain(|(existing, _)| existing != key);
            params.push((key.clone(), value.clone()));
        }

        params
    }
}

/// Payload for creating a card. `title` and `column_id` are required.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCardRequest {
    /// Card title.
    pub title: String,

    /// Column to create the card in.
    pub column_id: u64,

    /// Long-form description (Markdown).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Board to create the card on, when the column alone is ambiguous.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_id: Option<u64>,

    /// Assigned executor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<u64>,

    /// Owner of the card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,

    /// Priority label (`low`, `normal`, `high`, `critical`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    /// Due date (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// Tag ids to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<u64>>,

    /// Parent card, when creating a child.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,

    /// Additional body fields, flattened into the payload.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl CreateCardRequest {
    /// Creates a request with the required title and column.
    pub fn new(title: impl Into<String>, column_id: u64) -> Self {
        Self {
            title: title.into(),
            column_id,
            description: None,
            board_id: None,
            assignee_id: None,
            owner_id: None,
            priority: None,
            due_date: None,
            tags: None,
            parent_id: None,
            extra: BTreeMap::new(),
        }
    }
}

/// Payload for updating a card. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCardRequest {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Move to this column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_id: Option<u64>,

    /// Move to this lane.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lane_id: Option<u64>,

    /// Move to this board.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_id: Option<u64>,

    /// New ordering weight inside the cell.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<f64>,

    /// New owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,

    /// New assignee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<u64>,

    /// New priority label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    /// New due date (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// New ASAP marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asap: Option<bool>,

    /// New card state: 1 on board, 2 archived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<u32>,

    /// Archive or unarchive the card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    /// Additional body fields, flattened into the payload. Used among other
    /// things for custom property values (`properties` object).
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl KaitenClient {
    /// Lists cards matching the filter.
    pub async fn get_cards(&self, filter: &CardFilter) -> Result<Vec<Card>> {
        let params = filter.to_params();
        let payload = self.get("/cards", &params).await?;
        deserialize_items(payload)
    }

    /// Fetches a single card. `additional_fields` names extra card fields
    /// to include, comma-separated (e.g. `description,checklists`).
    pub async fn get_card(&self, card_id: u64, additional_fields: Option<&str>) -> Result<Card> {
        let mut params = Vec::new();
        if let Some(fields) = additional_fields {
            params.push(("additional_card_fields".to_string(), fields.to_string()));
        }
        let payload = self.get(&format!("/cards/{}", card_id), &params).await?;
        deserialize_payload(payload)
    }

    /// Creates a card.
    pub async fn create_card(&self, request: CreateCardRequest) -> Result<Card> {
        let body = serde_json::to_value(&request)?;
        let payload = self.post("/cards", &body).await?;
        deserialize_payload(payload)
    }

    /// Updates a card; unset request fields are left unchanged.
    pub async fn update_card(&self, card_id: u64, request: UpdateCardRequest) -> Result<Card> {
        let body = serde_json::to_value(&request)?;
        let payload = self.patch(&format!("/cards/{}", card_id), &body).await?;
        deserialize_payload(payload)
    }

    /// Deletes a card.
    pub async fn delete_card(&self, card_id: u64) -> Result<()> {
        self.delete(&format!("/cards/{}", card_id)).await?;
        Ok(())
    }

    /// Moves a card to another column.
    pub async fn move_card(&self, card_id: u64, column_id: u64) -> Result<Card> {
        let request = UpdateCardRequest {
            column_id: Some(column_id),
            ..Default::default()
        };
        self.update_card(card_id, request).await
    }

    /// Lists the members of a card.
    pub async fn get_card_members(&self, card_id: u64) -> Result<Vec<Member>> {
        let payload = self
            .get(&format!("/cards/{}/members", card_id), &[])
            .await?;
        deserialize_items(payload)
    }

    /// Adds a user to a card.
    pub async fn add_card_member(&self, card_id: u64, user_id: u64) -> Result<Member> {
        let body = serde_json::json!({ "user_id": user_id });
        let payload = self
            .post(&format!("/cards/{}/members", card_id), &body)
            .await?;
        deserialize_payload(payload)
    }

    /// Removes a user from a card.
    pub async fn remove_card_member(&self, card_id: u64, user_id: u64) -> Result<()> {
        self.delete(&format!("/cards/{}/members/{}", card_id, user_id))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_named_fields_in_order() {
        let mut filter = CardFilter::default();
        filter.board_id = Some(42);
        filter.archived = Some(false);
        filter.limit = Some(10);

        assert_eq!(
            filter.to_params(),
            vec![
                ("board_id".to_string(), "42".to_string()),
                ("archived".to_string(), "false".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_additional_filters_override_named() {
        let mut filter = CardFilter::default();
        filter.archived = Some(false);
        filter
            .additional_filters
            .insert("archived".to_string(), "true".to_string());
        filter
            .additional_filters
            .insert("custom_param".to_string(), "x".to_string());

        let params = filter.to_params();
        assert_eq!(
            params,
            vec![
                ("archived".to_string(), "true".to_string()),
                ("custom_param".to_string(), "x".to_string()),
            ]
        );
    }

    #[test]
    fn test_filter_expression_uses_filter_key() {
        let mut filter = CardFilter::default();
        filter.filter_expression = Some("eyJrZXkiOiJ2In0=".to_string());
        assert_eq!(
            filter.to_params(),
            vec![("filter".to_string(), "eyJrZXkiOiJ2In0=".to_string())]
        );
    }

    #[test]
    fn test_create_request_skips_unset_fields() {
        let body = serde_json::to_value(CreateCardRequest::new("T", 5)).unwrap();
        assert_eq!(body, json!({"title": "T", "column_id": 5}));
    }

    #[tokio::test]
    async fn test_create_then_fetch_round_trip() {
        let mut server = mockito::Server::new_async().await;
        let created = server
            .mock("POST", "/cards")
            .match_body(mockito::Matcher::Json(json!({"title": "T", "column_id": 5})))
            .with_status(200)
            .with_body(r#"{"id": 101, "title": "T", "column_id": 5}"#)
            .create_async()
            .await;
        let fetched = server
            .mock("GET", "/cards/101")
            .with_status(200)
            .with_body(r#"{"id": 101, "title": "T", "column_id": 5}"#)
            .create_async()
            .await;

        let client = KaitenClient::new("testco", "test-token")
            .unwrap()
            .with_base_url(server.url());

        let card = client
            .create_card(CreateCardRequest::new("T", 5))
            .await
            .unwrap();
        assert_eq!(card.id, 101);

        let card = client.get_card(card.id, None).await.unwrap();
        assert_eq!(card.title.as_deref(), Some("T"));
        assert_eq!(card.column_id, Some(5));
        created.assert_async().await;
        fetched.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_cards_bare_list() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/cards?board_id=42")
            .with_status(200)
            .with_body(r#"[{"id": 1}, {"id": 2}]"#)
            .create_async()
            .await;

        let client = KaitenClient::new("testco", "test-token")
            .unwrap()
            .with_base_url(server.url());

        let mut filter = CardFilter::default();
        filter.board_id = Some(42);
        let cards = client.get_cards(&filter).await.unwrap();
        assert_eq!(cards.len(), 2);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_already_deleted_card() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/cards/55")
            .with_status(404)
            .expect(1)
            .create_async()
            .await;

        let client = KaitenClient::new("testco", "test-token")
            .unwrap()
            .with_base_url(server.url());
        let err = client.delete_card(55).await.unwrap_err();
        assert!(matches!(
            err,
            crate::KaitenError::NotFound { ref endpoint } if endpoint == "/cards/55"
        ));
        mock.assert_async().await;
    }
}
