//
//  kaiten-client
//  api/files.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! File attachment operations.
//!
//! Uploads go through the multipart path with the upload header set
//! (authorization only, no JSON content type) and are never retried: a
//! consumed multipart body cannot be replayed. Downloads fetch raw bytes
//! from the attachment's stored URL with the client's authorization; what
//! to do with the bytes is left to the caller.
//!
//! # Example
//!
//! ```rust,no_run
//! use kaiten_client::KaitenClient;
//!
//! # async fn example(client: &KaitenClient) -> Result<(), kaiten_client::KaitenError> {
//! let data = std::fs::read("report.pdf").unwrap();
//! let file = client.upload_file(101, "report.pdf", data).await?;
//!
//! if let Some(url) = &file.url {
//!     let bytes = client.download_file(url).await?;
//!     println!("round-tripped {} bytes", bytes.len());
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::multipart::{Form, Part};

use super::client::KaitenClient;
use super::common::{deserialize_items, deserialize_payload, Result};
use crate::models::File;

impl KaitenClient {
    /// Lists the files attached to a card.
    pub async fn get_card_files(&self, card_id: u64) -> Result<Vec<File>> {
        let payload = self.get(&format!("/cards/{}/files", card_id), &[]).await?;
        deserialize_items(payload)
    }

    /// Uploads a file to a card.
    ///
    /// The multipart form carries the bytes as the `file` part (with the
    /// given file name) and the card id as a text part.
    pub async fn upload_file(
        &self,
        card_id: u64,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<File> {
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new()
            .part("file", part)
            .text("card_id", card_id.to_string());

        let payload = self
            .post_multipart(&format!("/cards/{}/files", card_id), form)
            .await?;
        deserialize_payload(payload)
    }

    /// Downloads the content behind an attachment URL.
    pub async fn download_file(&self, url: &str) -> Result<Vec<u8>> {
        self.get_bytes(url).await
    }

    /// Deletes a file by id.
    pub async fn delete_file(&self, file_id: u64) -> Result<()> {
        self.delete(&format!("/files/{}", file_id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upload_file_multipart() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/cards/101/files")
            .match_header(
                "content-type",
                mockito::Matcher::Regex("^multipart/form-data".to_string()),
            )
            .with_status(200)
            .with_body(r#"{"id": 3, "name": "report.pdf", "card_id": 101, "size": 4}"#)
            .create_async()
            .await;

        let client = KaitenClient::new("testco", "test-token")
            .unwrap()
            .with_base_url(server.url());
        let file = client
            .upload_file(101, "report.pdf", b"data".to_vec())
            .await
            .unwrap();
        assert_eq!(file.name.as_deref(), Some("report.pdf"));
        assert_eq!(file.size, Some(4));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_download_missing_file_is_not_found() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/files/blob/99")
            .with_status(404)
            .create_async()
            .await;

        let client = KaitenClient::new("testco", "test-token")
            .unwrap()
            .with_base_url(server.url());
        let url = format!("{}/files/blob/99", server.url());
        let err = client.download_file(&url).await.unwrap_err();
        assert!(matches!(
            err,
            crate::KaitenError::NotFound { ref endpoint } if endpoint == &url
        ));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_download_file_returns_bytes() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/files/blob/3")
            .with_status(200)
            .with_body("raw-bytes")
            .create_async()
            .await;

        let client = KaitenClient::new("testco", "test-token")
            .unwrap()
            .with_base_url(server.url());
        let bytes = client
            .download_file(&format!("{}/files/blob/3", server.url()))
            .await
            .unwrap();
        assert_eq!(bytes, b"raw-bytes");
        mock.assert_async().await;
    }
}
