//
//  kaiten-client
//  api/properties.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Custom property operations.
//!
//! Covers the company-wide property definitions
//! (`/company/custom-properties`), the select-value catalogues of
//! select-type properties, and the per-card property values.
//!
//! # Card property values
//!
//! Kaiten has no dedicated endpoint for a card's property values. They are
//! read by fetching the card with `additional_card_fields=properties` and
//! written through a card update whose body nests the value under a
//! `properties` object keyed `id_{property_id}`. Clearing a value writes
//! JSON `null` the same way.

use serde::Serialize;
use serde_json::{json, Map, Value};

use super::cards::UpdateCardRequest;
use super::client::KaitenClient;
use super::common::{deserialize_items, deserialize_payload, Result};
use crate::models::{Card, Property, SelectValue};

/// Payload for creating a custom property.
///
/// The boolean flags are always sent (the server treats absence and `false`
/// differently for some property kinds).
#[derive(Debug, Clone, Serialize)]
pub struct CreatePropertyRequest {
    /// Display name of the property.
    pub name: String,

    /// Property kind (`string`, `number`, `date`, `select`, `formula`, ...).
    #[serde(rename = "type")]
    pub property_type: String,

    /// Show the value on the card facade.
    pub show_on_facade: bool,

    /// Accept multiple lines (string properties).
    pub multiline: bool,

    /// Give select values colors.
    pub colorful: bool,

    /// Accept multiple values (select properties).
    pub multi_select: bool,

    /// Voting flavor of a vote property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote_variant: Option<String>,

    /// Value type of a catalogue-backed property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values_type: Option<String>,

    /// Kind-specific configuration blob.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Formula source of a computed property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,

    /// Display color of the property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Per-field settings of a composite property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields_settings: Option<Value>,
}

impl CreatePropertyRequest {
    /// Creates a request with the required name and kind; all flags start
    /// `false`.
    pub fn new(name: impl Into<String>, property_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            property_type: property_type.into(),
            show_on_facade: false,
            multiline: false,
            colorful: false,
            multi_select: false,
            vote_variant: None,
            values_type: None,
            data: None,
            formula: None,
            color: None,
            fields_settings: None,
        }
    }
}

/// Payload for updating a custom property. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePropertyRequest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New facade visibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_on_facade: Option<bool>,

    /// New multiline flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiline: Option<bool>,

    /// New voting flavor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote_variant: Option<String>,

    /// New value type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values_type: Option<String>,

    /// New colorful flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorful: Option<bool>,

    /// New multi-select flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_select: Option<bool>,

    /// New configuration blob.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// New formula source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,

    /// New display color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// New per-field settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields_settings: Option<Value>,
}

/// Filters for the select-value catalogue listing.
#[derive(Debug, Clone, Default)]
pub struct SelectValuesQuery {
    /// Use the v2 search behavior.
    pub v2_select_search: Option<bool>,

    /// Text filter on the value.
    pub query: Option<String>,

    /// Sort field.
    pub order_by: Option<String>,

    /// Restrict to these value ids.
    pub ids: Option<Vec<u64>>,

    /// Restrict to these value states.
    pub conditions: Option<Vec<String>>,

    /// Records to skip.
    pub offset: Option<u32>,

    /// Page size.
    pub limit: Option<u32>,
}

impl SelectValuesQuery {
    fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(value) = self.v2_select_search {
            params.push(("v2_select_search".to_string(), value.to_string()));
        }
        if let Some(query) = &self.query {
            params.push(("query".to_string(), query.clone()));
        }
        if let Some(order_by) = &self.order_by {
            params.push(("order_by".to_string(), order_by.clone()));
        }
        if let Some(ids) = &self.ids {
            let joined = ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",");
            params.push(("ids".to_string(), joined));
        }
        if let Some(conditions) = &self.conditions {
            params.push(("conditions".to_string(), conditions.join(",")));
        }
        if let Some(offset) = self.offset {
            params.push(("offset".to_string(), offset.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }
}

/// Payload for updating a select value. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSelectValueRequest {
    /// New display text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// New palette color index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<i64>,

    /// New value state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    /// New ordering weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<f64>,

    /// Soft-delete or restore the value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
}

impl KaitenClient {
    /// Lists all custom property definitions.
    pub async fn get_custom_properties(&self) -> Result<Vec<Property>> {
        let payload = self.get("/company/custom-properties", &[]).await?;
        deserialize_items(payload)
    }

    /// Fetches a single custom property definition.
    pub async fn get_custom_property(&self, property_id: u64) -> Result<Property> {
        let payload = self
            .get(&format!("/company/custom-properties/{}", property_id), &[])
            .await?;
        deserialize_payload(payload)
    }

    /// Creates a custom property.
    pub async fn create_custom_property(
        &self,
        request: CreatePropertyRequest,
    ) -> Result<Property> {
        let body = serde_json::to_value(&request)?;
        let payload = self.post("/company/custom-properties", &body).await?;
        deserialize_payload(payload)
    }

    /// Updates a custom property; unset request fields are left unchanged.
    pub async fn update_custom_property(
        &self,
        property_id: u64,
        request: UpdatePropertyRequest,
    ) -> Result<Property> {
        let body = serde_json::to_value(&request)?;
        let payload = self
            .patch(&format!("/company/custom-properties/{}", property_id), &body)
            .await?;
        deserialize_payload(payload)
    }

    /// Deletes a custom property.
    pub async fn delete_custom_property(&self, property_id: u64) -> Result<()> {
        self.delete(&format!("/company/custom-properties/{}", property_id))
            .await?;
        Ok(())
    }

    /// Lists the select-value catalogue of a property.
    pub async fn get_property_select_values(
        &self,
        property_id: u64,
        query: SelectValuesQuery,
    ) -> Result<Vec<SelectValue>> {
        let params = query.to_params();
        let payload = self
            .get(
                &format!("/company/custom-properties/{}/select-values", property_id),
                &params,
            )
            .await?;
        deserialize_items(payload)
    }

    /// Fetches a single select value.
    pub async fn get_property_select_value(
        &self,
        property_id: u64,
        value_id: u64,
    ) -> Result<SelectValue> {
        let payload = self
            .get(
                &format!(
                    "/company/custom-properties/{}/select-values/{}",
                    property_id, value_id
                ),
                &[],
            )
            .await?;
        deserialize_payload(payload)
    }

    /// Adds a value to a property's select catalogue. `color` is a palette
    /// index; `None` leaves the value uncolored.
    pub async fn create_property_select_value(
        &self,
        property_id: u64,
        value: &str,
        color: Option<i64>,
    ) -> Result<SelectValue> {
        let mut body = Map::new();
        body.insert("value".to_string(), json!(value));
        if let Some(color) = color {
            body.insert("color".to_string(), json!(color));
        }
        let payload = self
            .post(
                &format!("/company/custom-properties/{}/select-values", property_id),
                &Value::Object(body),
            )
            .await?;
        deserialize_payload(payload)
    }

    /// Updates a select value; unset request fields are left unchanged.
    pub async fn update_property_select_value(
        &self,
        property_id: u64,
        value_id: u64,
        request: UpdateSelectValueRequest,
    ) -> Result<SelectValue> {
        let body = serde_json::to_value(&request)?;
        let payload = self
            .patch(
                &format!(
                    "/company/custom-properties/{}/select-values/{}",
                    property_id, value_id
                ),
                &body,
            )
            .await?;
        deserialize_payload(payload)
    }

    /// Deletes a select value.
    pub async fn delete_property_select_value(
        &self,
        property_id: u64,
        value_id: u64,
    ) -> Result<()> {
        self.delete(&format!(
            "/company/custom-properties/{}/select-values/{}",
            property_id, value_id
        ))
        .await?;
        Ok(())
    }

    /// Reads the custom property values of a card (the `properties` object,
    /// keyed `id_{property_id}`).
    pub async fn get_card_properties_values(
        &self,
        card_id: u64,
    ) -> Result<Map<String, Value>> {
        let params = vec![(
            "additional_card_fields".to_string(),
            "properties".to_string(),
        )];
        let payload = self.get(&format!("/cards/{}", card_id), &params).await?;

        let card = payload.unwrap_or(Value::Null);
        match card.get("properties") {
            Some(Value::Object(map)) => Ok(map.clone()),
            _ => Ok(Map::new()),
        }
    }

    /// Sets a custom property value on a card.
    pub async fn set_card_property_value(
        &self,
        card_id: u64,
        property_id: u64,
        value: Value,
    ) -> Result<Card> {
        let mut request = UpdateCardRequest::default();
        request.extra.insert(
            "properties".to_string(),
            json!({ format!("id_{}", property_id): value }),
        );
        self.update_card(card_id, request).await
    }

    /// Clears a custom property value on a card (writes `null`).
    pub async fn delete_card_property_value(
        &self,
        card_id: u64,
        property_id: u64,
    ) -> Result<()> {
        self.set_card_property_value(card_id, property_id, Value::Null)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_always_sends_flags() {
        let body =
            serde_json::to_value(CreatePropertyRequest::new("Severity", "select")).unwrap();
        assert_eq!(
            body,
            json!({
                "name": "Severity",
                "type": "select",
                "show_on_facade": false,
                "multiline": false,
                "colorful": false,
                "multi_select": false
            })
        );
    }

    #[test]
    fn test_select_values_query_joins_id_lists() {
        let query = SelectValuesQuery {
            ids: Some(vec![1, 2, 3]),
            limit: Some(10),
            ..Default::default()
        };
        assert_eq!(
            query.to_params(),
            vec![
                ("ids".to_string(), "1,2,3".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_set_card_property_value_nests_under_properties() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/cards/101")
            .match_body(mockito::Matcher::Json(
                json!({"properties": {"id_19": "ready"}}),
            ))
            .with_status(200)
            .with_body(r#"{"id": 101}"#)
            .create_async()
            .await;

        let client = KaitenClient::new("testco", "test-token")
            .unwrap()
            .with_base_url(server.url());
        client
            .set_card_property_value(101, 19, json!("ready"))
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_card_properties_values_missing_object() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/cards/101?additional_card_fields=properties")
            .with_status(200)
            .with_body(r#"{"id": 101}"#)
            .create_async()
            .await;

        let client = KaitenClient::new("testco", "test-token")
            .unwrap()
            .with_base_url(server.url());
        let values = client.get_card_properties_values(101).await.unwrap();
        assert!(values.is_empty());
        mock.assert_async().await;
    }
}
