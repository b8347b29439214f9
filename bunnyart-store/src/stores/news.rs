//! News endpoint client

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::http::{create_http_client, execute_request, parse_json};
use crate::traits::NewsStore;
use crate::types::{NewNews, NewsItem};

const ENDPOINT: &str = "news";

/// HTTP client for the news endpoint.
pub struct HttpNewsStore {
    client: Client,
    base_url: String,
}

impl HttpNewsStore {
    /// Create a client over the given endpoint URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: create_http_client(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl NewsStore for HttpNewsStore {
    async fn list(&self) -> Result<Vec<NewsItem>> {
        let text = execute_request(
            self.client.get(&self.base_url),
            ENDPOINT,
            "GET",
            &self.base_url,
        )
        .await?;
        parse_json(&text, ENDPOINT)
    }

    async fn create(&self, req: &NewNews) -> Result<()> {
        execute_request(
            self.client.post(&self.base_url).json(req),
            ENDPOINT,
            "POST",
            &self.base_url,
        )
        .await?;
        Ok(())
    }
}
