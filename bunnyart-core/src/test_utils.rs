//! Test helpers
//!
//! Mock store implementations and item factories shared by the unit tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use bunnyart_store::{
    Comment, LikesUpdate, MediaCategory, MediaItem, MediaStore, NewMedia, NewNews, NewsItem,
    NewsStore, Result as StoreResult, StoreError,
};

/// Build a media item with the fields the tests care about.
pub fn media_item(id: u64, category: MediaCategory, likes: u32) -> MediaItem {
    MediaItem {
        id,
        title: format!("Item {id}"),
        category,
        url: format!("https://cdn.example.com/{id}.jpg"),
        thumbnail: Some(format!("https://cdn.example.com/{id}_thumb.jpg")),
        likes,
        created_at: Some("2024-11-15 10:00:00".to_string()),
        comments: Vec::<Comment>::new(),
    }
}

/// Build a news post.
pub fn news_item(id: u64) -> NewsItem {
    NewsItem {
        id,
        title: format!("Post {id}"),
        description: "A short description".to_string(),
        content: None,
        image_url: None,
        created_at: "2024-11-15T10:00:00Z".to_string(),
    }
}

fn network_error(endpoint: &str) -> StoreError {
    StoreError::Network {
        endpoint: endpoint.to_string(),
        detail: "connection refused".to_string(),
    }
}

// ===== MockMediaStore =====

/// Configurable mock `MediaStore` with failure injection and recorded calls.
pub struct MockMediaStore {
    items: RwLock<Vec<MediaItem>>,
    fail_list: RwLock<bool>,
    fail_create: RwLock<bool>,
    fail_update: RwLock<bool>,
    created: RwLock<Vec<NewMedia>>,
    /// Recorded `update_likes` request bodies, including failed attempts.
    update_calls: RwLock<Vec<LikesUpdate>>,
}

impl MockMediaStore {
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self {
            items: RwLock::new(items),
            fail_list: RwLock::new(false),
            fail_create: RwLock::new(false),
            fail_update: RwLock::new(false),
            created: RwLock::new(Vec::new()),
            update_calls: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_items(&self, items: Vec<MediaItem>) {
        *self.items.write().await = items;
    }

    pub async fn set_fail_list(&self, fail: bool) {
        *self.fail_list.write().await = fail;
    }

    pub async fn set_fail_create(&self, fail: bool) {
        *self.fail_create.write().await = fail;
    }

    pub async fn set_fail_update(&self, fail: bool) {
        *self.fail_update.write().await = fail;
    }

    pub async fn created(&self) -> Vec<NewMedia> {
        self.created.read().await.clone()
    }

    pub async fn update_calls(&self) -> Vec<LikesUpdate> {
        self.update_calls.read().await.clone()
    }
}

#[async_trait]
impl MediaStore for MockMediaStore {
    async fn list(&self) -> StoreResult<Vec<MediaItem>> {
        if *self.fail_list.read().await {
            return Err(network_error("media"));
        }
        Ok(self.items.read().await.clone())
    }

    async fn create(&self, req: &NewMedia) -> StoreResult<()> {
        if *self.fail_create.read().await {
            return Err(network_error("media"));
        }
        self.created.write().await.push(req.clone());
        Ok(())
    }

    async fn update_likes(&self, req: &LikesUpdate) -> StoreResult<()> {
        self.update_calls.write().await.push(*req);
        if *self.fail_update.read().await {
            return Err(network_error("media"));
        }
        Ok(())
    }
}

// ===== MockNewsStore =====

/// Configurable mock `NewsStore`.
pub struct MockNewsStore {
    items: RwLock<Vec<NewsItem>>,
    fail_list: RwLock<bool>,
    created: RwLock<Vec<NewNews>>,
}

impl MockNewsStore {
    pub fn new(items: Vec<NewsItem>) -> Self {
        Self {
            items: RwLock::new(items),
            fail_list: RwLock::new(false),
            created: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_fail_list(&self, fail: bool) {
        *self.fail_list.write().await = fail;
    }

    pub async fn created(&self) -> Vec<NewNews> {
        self.created.read().await.clone()
    }
}

#[async_trait]
impl NewsStore for MockNewsStore {
    async fn list(&self) -> StoreResult<Vec<NewsItem>> {
        if *self.fail_list.read().await {
            return Err(network_error("news"));
        }
        Ok(self.items.read().await.clone())
    }

    async fn create(&self, req: &NewNews) -> StoreResult<()> {
        self.created.write().await.push(req.clone());
        Ok(())
    }
}
