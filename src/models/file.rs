//
//  kaiten-client
//  models/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Card attachment entity.

use serde::{Deserialize, Serialize};

/// A file attached to a card.
///
/// The `url` points at the stored blob; pass it to
/// [`download_file`](crate::KaitenClient::download_file) to retrieve the
/// bytes with the client's authorization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    /// Unique numeric identifier.
    pub id: u64,

    /// Stored file name.
    pub name: Option<String>,

    /// File name as uploaded.
    pub original_name: Option<String>,

    /// URL of the stored blob.
    pub url: Option<String>,

    /// Direct download URL, when provided.
    pub download_url: Option<String>,

    /// Size in bytes.
    pub size: Option<u64>,

    /// MIME type of the content.
    pub mime_type: Option<String>,

    /// Card the file is attached to.
    pub card_id: Option<u64>,

    /// User who uploaded the file.
    pub uploader_id: Option<u64>,

    /// Upload timestamp (ISO 8601).
    pub uploaded_at: Option<String>,
}
