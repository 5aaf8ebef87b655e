//
//  kaiten-client
//  models/property.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Custom property entities.
//!
//! Custom properties are company-wide field definitions that boards opt
//! into. Select-type properties additionally carry a catalogue of
//! [`SelectValue`]s; a card stores the chosen value ids.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A company-wide custom property definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    /// Unique numeric identifier.
    pub id: u64,

    /// Display name of the property.
    pub name: Option<String>,

    /// Property kind (`string`, `number`, `date`, `select`, `formula`, ...).
    #[serde(rename = "type")]
    pub property_type: Option<String>,

    /// Owning company.
    pub company_id: Option<u64>,

    /// User who created the property.
    pub author_id: Option<u64>,

    /// Property state.
    pub condition: Option<u32>,

    /// Whether the value is shown on the card facade.
    pub show_on_facade: Option<bool>,

    /// Whether a string property accepts multiple lines.
    pub multiline: Option<bool>,

    /// Whether select values carry colors.
    pub colorful: Option<bool>,

    /// Whether a select property accepts multiple values.
    pub multi_select: Option<bool>,

    /// Display color of the property itself.
    pub color: Option<String>,

    /// Value type of a catalogue-backed property.
    pub values_type: Option<String>,

    /// Voting flavor of a vote property.
    pub vote_variant: Option<String>,

    /// Formula source of a computed property.
    pub formula: Option<String>,

    /// Card scope a formula draws from.
    pub formula_source_card: Option<Value>,

    /// Whether users may add catalogue values on the fly.
    pub values_creatable_by_users: Option<bool>,

    /// Whether the property is protected from editing.
    pub protected: Option<bool>,

    /// Identifier in an external system.
    pub external_id: Option<String>,

    /// Kind-specific configuration blob.
    pub data: Option<Value>,

    /// Per-field settings of a composite property.
    pub fields_settings: Option<Value>,

    /// Creation timestamp (ISO 8601).
    pub created: Option<String>,

    /// Last-update timestamp (ISO 8601).
    pub updated: Option<String>,
}

/// A catalogue value of a select-type custom property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectValue {
    /// Unique numeric identifier.
    pub id: u64,

    /// Display text of the value.
    pub value: Option<String>,

    /// Palette index of the value's color.
    pub color: Option<i64>,

    /// Ordering weight in the catalogue.
    pub sort_order: Option<f64>,

    /// Value state.
    pub condition: Option<Value>,

    /// Soft-deletion marker.
    pub deleted: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_property_type_rename() {
        let property: Property = serde_json::from_value(json!({
            "id": 19,
            "name": "Severity",
            "type": "select",
            "multi_select": false
        }))
        .unwrap();
        assert_eq!(property.property_type.as_deref(), Some("select"));
    }
}
