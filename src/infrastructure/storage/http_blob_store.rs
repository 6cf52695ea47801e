//! Hosted-storage implementation of the blob store.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::error;

use crate::domain::repositories::BlobStore;
use crate::error::AppError;

/// Bucket holding QR code images.
const BUCKET: &str = "qrs";

const UPLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Blob store backed by the hosted storage service's REST API.
///
/// Objects are uploaded to `{base}/storage/v1/object/qrs/{file}` with bearer
/// authentication; the public URL handed back to callers is
/// `{base}/storage/v1/object/public/qrs/{file}`.
pub struct HttpBlobStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpBlobStore {
    /// Creates a blob store client for the given service base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(UPLOAD_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn upload_url(&self, file_name: &str) -> String {
        format!("{}/storage/v1/object/{BUCKET}/{file_name}", self.base_url)
    }

    fn public_url(&self, file_name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{BUCKET}/{file_name}",
            self.base_url
        )
    }
}

/// Extracts the failure message from a rejected upload response body.
///
/// The storage API reports failures as `{"message": "..."}`; anything else
/// (non-JSON, or JSON without a string `message`) is passed through verbatim
/// so the caller still sees what the backend said.
fn error_message(body: String) -> String {
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or(body)
}

#[async_trait]
impl BlobStore for HttpBlobStore {
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, AppError> {
        let response = self
            .client
            .post(self.upload_url(file_name))
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "image/png")
            .body(bytes)
            .send()
            .await
            .map_err(|e| AppError::storage(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            error!(%status, file_name, "blob upload rejected");
            return Err(AppError::storage(error_message(body)));
        }

        Ok(self.public_url(file_name))
    }
}
