//! Platform-agnostic application bootstrap for BunnyArt.
//!
//! Provides `AppState` (session + publisher container) and `AppStateBuilder`
//! (store injection). Every frontend constructs one `AppState` at startup
//! and drives the session through its lock.

use std::sync::Arc;

use tokio::sync::RwLock;

use bunnyart_core::error::{CoreError, CoreResult};
use bunnyart_core::{Publisher, Session};
use bunnyart_store::{HttpMediaStore, HttpNewsStore, MediaStore, NewsStore};

mod config;

pub use config::Endpoints;

/// Platform-agnostic application state.
pub struct AppState {
    /// Per-session view/collection state
    pub session: RwLock<Session>,
    /// Admin publishing service
    pub publisher: Publisher,
}

impl AppState {
    /// Run the startup sequence: the one-shot initial load of both
    /// collections. Load failures are logged and leave the collections
    /// empty; startup itself never fails.
    pub async fn run_startup(&self) {
        let mut session = self.session.write().await;
        session.load_all().await;
        log::info!(
            "Startup load complete: {} media items, {} news posts",
            session.library().len(),
            session.news().len()
        );
    }
}

/// Builder for constructing `AppState` with injected stores.
///
/// # Optional
/// - `endpoints` — defaults to the production URLs
/// - `media_store` / `news_store` — default to HTTP stores over the
///   configured endpoints; inject mocks or alternate backends here
pub struct AppStateBuilder {
    endpoints: Endpoints,
    media_store: Option<Arc<dyn MediaStore>>,
    news_store: Option<Arc<dyn NewsStore>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            endpoints: Endpoints::default(),
            media_store: None,
            news_store: None,
        }
    }

    #[must_use]
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    #[must_use]
    pub fn media_store(mut self, store: Arc<dyn MediaStore>) -> Self {
        self.media_store = Some(store);
        self
    }

    #[must_use]
    pub fn news_store(mut self, store: Arc<dyn NewsStore>) -> Self {
        self.news_store = Some(store);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::Validation` if a configured endpoint URL is not
    /// an absolute http(s) URL. Injected stores bypass URL validation.
    pub fn build(self) -> CoreResult<AppState> {
        let media_store: Arc<dyn MediaStore> = match self.media_store {
            Some(store) => store,
            None => {
                validate_endpoint_url(&self.endpoints.media_url)?;
                Arc::new(HttpMediaStore::new(self.endpoints.media_url))
            }
        };
        let news_store: Arc<dyn NewsStore> = match self.news_store {
            Some(store) => store,
            None => {
                validate_endpoint_url(&self.endpoints.news_url)?;
                Arc::new(HttpNewsStore::new(self.endpoints.news_url))
            }
        };

        let session = Session::new(Arc::clone(&media_store), Arc::clone(&news_store));
        let publisher = Publisher::new(media_store, news_store);

        Ok(AppState {
            session: RwLock::new(session),
            publisher,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_endpoint_url(value: &str) -> CoreResult<()> {
    let parsed = url::Url::parse(value)
        .map_err(|e| CoreError::Validation(format!("invalid endpoint URL '{value}': {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(CoreError::Validation(format!(
            "endpoint URL '{value}' must be http or https"
        )));
    }
    Ok(())
}
