//! Media endpoint client

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::http::{create_http_client, execute_request, parse_json};
use crate::traits::MediaStore;
use crate::types::{LikesUpdate, MediaItem, NewMedia};

const ENDPOINT: &str = "media";

/// HTTP client for the media endpoint.
pub struct HttpMediaStore {
    client: Client,
    base_url: String,
}

impl HttpMediaStore {
    /// Create a client over the given endpoint URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: create_http_client(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl MediaStore for HttpMediaStore {
    async fn list(&self) -> Result<Vec<MediaItem>> {
        let text = execute_request(
            self.client.get(&self.base_url),
            ENDPOINT,
            "GET",
            &self.base_url,
        )
        .await?;
        parse_json(&text, ENDPOINT)
    }

    async fn create(&self, req: &NewMedia) -> Result<()> {
        execute_request(
            self.client.post(&self.base_url).json(req),
            ENDPOINT,
            "POST",
            &self.base_url,
        )
        .await?;
        Ok(())
    }

    async fn update_likes(&self, req: &LikesUpdate) -> Result<()> {
        execute_request(
            self.client.put(&self.base_url).json(req),
            ENDPOINT,
            "PUT",
            &self.base_url,
        )
        .await?;
        Ok(())
    }
}
