//! Admin publishing service

use std::sync::Arc;

use bunnyart_store::{MediaStore, NewMedia, NewNews, NewsStore};

use crate::error::{CoreError, CoreResult};

/// Publishing operations backing the admin panel.
///
/// Stateless: after a successful publish the admin page reloads its listings
/// through the session.
pub struct Publisher {
    media_store: Arc<dyn MediaStore>,
    news_store: Arc<dyn NewsStore>,
}

impl Publisher {
    /// Create a publisher over the given stores.
    #[must_use]
    pub fn new(media_store: Arc<dyn MediaStore>, news_store: Arc<dyn NewsStore>) -> Self {
        Self {
            media_store,
            news_store,
        }
    }

    /// Create a media item.
    ///
    /// Title and url are required; a missing or blank thumbnail falls back
    /// to the item url before the request is sent.
    pub async fn publish_media(&self, mut item: NewMedia) -> CoreResult<()> {
        if item.title.trim().is_empty() {
            return Err(CoreError::Validation("media title is required".to_string()));
        }
        if item.url.trim().is_empty() {
            return Err(CoreError::Validation("media url is required".to_string()));
        }
        if item.thumbnail.as_deref().unwrap_or("").trim().is_empty() {
            item.thumbnail = Some(item.url.clone());
        }

        self.media_store.create(&item).await?;
        Ok(())
    }

    /// Create a news post. Title and description are required.
    pub async fn publish_news(&self, post: NewNews) -> CoreResult<()> {
        if post.title.trim().is_empty() {
            return Err(CoreError::Validation("news title is required".to_string()));
        }
        if post.description.trim().is_empty() {
            return Err(CoreError::Validation(
                "news description is required".to_string(),
            ));
        }

        self.news_store.create(&post).await?;
        Ok(())
    }
}
