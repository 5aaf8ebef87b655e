//
//  kaiten-client
//  models/member.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Card member entity.

use serde::{Deserialize, Serialize};

/// A user participating in a card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique numeric identifier (the user's id).
    pub id: u64,

    /// User behind the membership, when reported separately.
    pub user_id: Option<u64>,

    /// Card the membership belongs to.
    pub card_id: Option<u64>,

    /// Member's email address.
    pub email: Option<String>,

    /// Member's display name.
    pub name: Option<String>,

    /// Member role on the card: 1 member, 2 responsible.
    pub role: Option<u32>,

    /// When the user was added to the card (ISO 8601).
    pub added_at: Option<String>,
}
