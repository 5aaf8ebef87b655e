//
//  kaiten-client
//  api/common/envelope.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Envelope unwrapping for list endpoints.
//!
//! Kaiten list endpoints answer in one of two shapes: a bare JSON array, or
//! an envelope object `{"items": [...], ...}` wrapping the array. The helpers
//! here normalize both shapes to a plain `Vec` so façade code never has to
//! care which one it got.
//!
//! # Notes
//!
//! - An object without an `items` field (or with a non-array `items`)
//!   yields an empty list rather than an error.
//! - A `204 No Content` reply to a list endpoint (payload `None`) also
//!   yields an empty list.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::Result;

/// Normalizes a list response body to its item array.
///
/// A bare array is used directly; an envelope object contributes its
/// `items` array, or an empty list when absent.
pub(crate) fn items_of(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Deserializes a list payload into typed models, unwrapping the envelope.
pub(crate) fn deserialize_items<T: DeserializeOwned>(payload: Option<Value>) -> Result<Vec<T>> {
    let items = match payload {
        Some(value) => items_of(value),
        None => Vec::new(),
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(Into::into))
        .collect()
}

/// Deserializes a single-object payload into a typed model.
///
/// A missing payload (204 on an endpoint expected to return a body) is
/// surfaced as a decode error rather than a panic.
pub(crate) fn deserialize_payload<T: DeserializeOwned>(payload: Option<Value>) -> Result<T> {
    serde_json::from_value(payload.unwrap_or(Value::Null)).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_items_of_bare_list() {
        let items = items_of(json!([{"id": 1}, {"id": 2}]));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], json!({"id": 1}));
    }

    #[test]
    fn test_items_of_envelope() {
        let items = items_of(json!({"items": [{"id": 7}], "total": 1}));
        assert_eq!(items, vec![json!({"id": 7})]);
    }

    #[test]
    fn test_items_of_envelope_without_items() {
        assert!(items_of(json!({"total": 0})).is_empty());
    }

    #[test]
    fn test_items_of_scalar() {
        assert!(items_of(json!(null)).is_empty());
    }

    #[test]
    fn test_deserialize_items_none_payload() {
        let items: Vec<Value> = deserialize_items(None).unwrap();
        assert!(items.is_empty());
    }
}
