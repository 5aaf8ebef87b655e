//
//  kaiten-client
//  models/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User entity.

use serde::{Deserialize, Serialize};

/// A Kaiten user (company member, space member or virtual user).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique numeric identifier.
    pub id: u64,

    /// Globally unique string identifier.
    pub uid: Option<String>,

    /// Full display name.
    pub full_name: Option<String>,

    /// Login name.
    pub username: Option<String>,

    /// Email address.
    pub email: Option<String>,

    /// Whether the account has been activated.
    pub activated: Option<bool>,

    /// Whether this is a virtual (non-login) user.
    #[serde(rename = "virtual")]
    pub is_virtual: Option<bool>,

    /// Owning company.
    pub company_id: Option<u64>,

    /// UI language code.
    pub lng: Option<String>,

    /// IANA timezone name.
    pub timezone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_user_virtual_rename() {
        let user: User = serde_json::from_value(json!({
            "id": 77,
            "full_name": "Build Bot",
            "virtual": true
        }))
        .unwrap();
        assert_eq!(user.is_virtual, Some(true));
    }
}
