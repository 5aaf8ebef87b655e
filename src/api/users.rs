//
//  kaiten-client
//  api/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User directory operations.
//!
//! `get_current_user` resolves the token's own account. The company
//! directory listing requires access to the administrative "Members"
//! section; most of its filters only apply in combination with
//! `for_members_section` or `only_virtual`, mirroring the server's rules.
//!
//! # Notes
//!
//! - Two filters use camelCase keys on the wire (`invitesOnly`,
//!   `withTransferAccessStatus`); the rest are snake_case. The query builder
//!   takes care of it.

use super::client::KaitenClient;
use super::common::{deserialize_items, deserialize_payload, Result};
use crate::models::User;

/// Filters for the company user directory.
#[derive(Debug, Clone, Default)]
pub struct CompanyUsersQuery {
    /// Return pending invitations only (`invitesOnly`).
    pub invites_only: Option<bool>,

    /// Include rights-transfer status data (`withTransferAccessStatus`).
    pub with_transfer_access_status: Option<bool>,

    /// Paginated listing for the administrative "Members" section.
    pub for_members_section: Option<bool>,

    /// Return the company owner only.
    pub owner_only: Option<bool>,

    /// Users with paid access only.
    pub only_paid: Option<bool>,

    /// Return the record count instead of records.
    pub only_records_count: Option<bool>,

    /// Virtual users only (paginated).
    pub only_virtual: Option<bool>,

    /// Records to skip.
    pub offset: Option<u32>,

    /// Page size (default 100).
    pub limit: Option<u32>,

    /// Text filter on email and full name.
    pub query: Option<String>,

    /// Filter by Kaiten access type.
    pub access_type_permissions: Option<String>,

    /// Filter by Service Desk access type.
    pub sd_access_type: Option<String>,

    /// Filter by licence consumption.
    pub take_licence: Option<String>,

    /// Filter by temporary inactivity status.
    pub temporarily_inactive_status: Option<String>,

    /// Filter by group membership.
    pub group_ids: Option<Vec<u64>>,

    /// Filter by granted permissions.
    pub permissions: Option<Vec<String>>,
}

impl CompanyUsersQuery {
    fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(value) = self.invites_only {
            params.push(("invitesOnly".to_string(), value.to_string()));
        }
        if let Some(value) = self.with_transfer_access_status {
            params.push(("withTransferAccessStatus".to_string(), value.to_string()));
        }
        if let Some(value) = self.for_members_section {
            params.push(("for_members_section".to_string(), value.to_string()));
        }
        if let Some(value) = self.owner_only {
            params.push(("owner_only".to_string(), value.to_string()));
        }
        if let Some(value) = self.only_paid {
            params.push(("only_paid".to_string(), value.to_string()));
        }
        if let Some(value) = self.only_records_count {
            params.push(("only_records_count".to_string(), value.to_string()));
        }
        if let Some(value) = self.only_virtual {
            params.push(("only_virtual".to_string(), value.to_string()));
        }
        if let Some(value) = self.offset {
            params.push(("offset".to_string(), value.to_string()));
        }
        if let Some(value) = self.limit {
            params.push(("limit".to_string(), value.to_string()));
        }
        if let Some(query) = &self.query {
            params.push(("query".to_string(), query.clone()));
        }
        if let Some(value) = &self.access_type_permissions {
            params.push(("access_type_permissions".to_string(), value.clone()));
        }
        if let Some(value) = &self.sd_access_type {
            params.push(("sd_access_type".to_string(), value.clone()));
        }
        if let Some(value) = &self.take_licence {
            params.push(("take_licence".to_string(), value.clone()));
        }
        if let Some(value) = &self.temporarily_inactive_status {
            params.push(("temporarily_inactive_status".to_string(), value.clone()));
        }
        if let Some(ids) = &self.group_ids {
            let joined = ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",");
            params.push(("group_ids".to_string(), joined));
        }
        if let Some(permissions) = &self.permissions {
            params.push(("permissions".to_string(), permissions.join(",")));
        }
        params
    }
}

impl KaitenClient {
    /// Fetches the account behind the client's token.
    pub async fn get_current_user(&self) -> Result<User> {
        let payload = self.get("/users/current", &[]).await?;
        deserialize_payload(payload)
    }

    /// Lists company users matching the query.
    pub async fn get_company_users(&self, query: CompanyUsersQuery) -> Result<Vec<User>> {
        let params = query.to_params();
        let payload = self.get("/company/users", &params).await?;
        deserialize_items(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_mixes_camel_and_snake_case_keys() {
        let query = CompanyUsersQuery {
            invites_only: Some(true),
            for_members_section: Some(true),
            group_ids: Some(vec![4, 8]),
            ..Default::default()
        };
        assert_eq!(
            query.to_params(),
            vec![
                ("invitesOnly".to_string(), "true".to_string()),
                ("for_members_section".to_string(), "true".to_string()),
                ("group_ids".to_string(), "4,8".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_get_current_user() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/users/current")
            .with_status(200)
            .with_body(r#"{"id": 7, "full_name": "Ada Lovelace", "email": "ada@example.com"}"#)
            .create_async()
            .await;

        let client = KaitenClient::new("testco", "test-token")
            .unwrap()
            .with_base_url(server.url());
        let user = client.get_current_user().await.unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.email.as_deref(), Some("ada@example.com"));
        mock.assert_async().await;
    }
}
