//! Endpoint configuration

use serde::Deserialize;

/// Production media endpoint.
const MEDIA_URL: &str = "https://functions.poehali.dev/70267a36-8967-4037-bd39-69cef143b46d";
/// Production news endpoint.
const NEWS_URL: &str = "https://functions.poehali.dev/26c10365-5e08-4f37-964b-419be38966ab";

/// Remote endpoint addresses.
///
/// Both collaborators are addressed by fixed absolute URLs; the defaults are
/// the production deployment. Deserializable so a frontend can point a
/// session at another deployment from its own config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// Media endpoint URL
    pub media_url: String,
    /// News endpoint URL
    pub news_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            media_url: MEDIA_URL.to_string(),
            news_url: NEWS_URL.to_string(),
        }
    }
}
