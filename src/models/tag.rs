//
//  kaiten-client
//  models/tag.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Tag entity.

use serde::{Deserialize, Serialize};

/// A company-wide card tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// Unique numeric identifier.
    pub id: u64,

    /// Tag text.
    pub name: Option<String>,

    /// Display color (hex, e.g. `#ff0000`).
    pub color: Option<String>,

    /// Space the tag is scoped to, when not company-wide.
    pub space_id: Option<u64>,
}
