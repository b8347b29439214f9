use async_trait::async_trait;

use crate::error::Result;
use crate::types::{LikesUpdate, MediaItem, NewMedia, NewNews, NewsItem};

/// Remote media store.
///
/// The contract as consumed by the site: a wholesale ordered listing,
/// creation, and a like-count overwrite. Mutation success is derived from
/// the response status only.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Fetch the full item list, in server order.
    async fn list(&self) -> Result<Vec<MediaItem>>;

    /// Create a media item.
    async fn create(&self, req: &NewMedia) -> Result<()>;

    /// Overwrite the like count for one item.
    async fn update_likes(&self, req: &LikesUpdate) -> Result<()>;
}

/// Remote news store.
#[async_trait]
pub trait NewsStore: Send + Sync {
    /// Fetch the full post list, in server order.
    async fn list(&self) -> Result<Vec<NewsItem>>;

    /// Create a news post.
    async fn create(&self, req: &NewNews) -> Result<()>;
}
