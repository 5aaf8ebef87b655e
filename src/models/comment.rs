//
//  kaiten-client
//  models/comment.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Card comment entity.

use serde::{Deserialize, Serialize};

/// A comment on a card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Unique numeric identifier.
    pub id: u64,

    /// Card the comment belongs to.
    pub card_id: Option<u64>,

    /// Comment body (Markdown).
    pub text: Option<String>,

    /// Author of the comment.
    pub author_id: Option<u64>,

    /// Creation timestamp (ISO 8601).
    pub created_at: Option<String>,

    /// Last-edit timestamp (ISO 8601).
    pub updated_at: Option<String>,
}
