//! Per-session state holder

use std::sync::Arc;

use bunnyart_store::{
    LikesUpdate, MediaCategory, MediaItem, MediaStore, NewsItem, NewsStore, Result as StoreResult,
};

use crate::feed::NewsFeed;
use crate::library::MediaLibrary;
use crate::types::Section;
use crate::view::ViewState;

/// Single owner of all client state for one session.
///
/// The presentation layer holds a reference to the session and feeds user
/// intents into these methods; it never mutates state directly. The
/// remote-backed intents are best-effort: a transport failure is logged and
/// leaves the state unchanged, ready for a manual retry.
pub struct Session {
    view: ViewState,
    library: MediaLibrary,
    news: NewsFeed,
    media_store: Arc<dyn MediaStore>,
    news_store: Arc<dyn NewsStore>,
}

impl Session {
    /// Create a session over the given stores, with empty collections and
    /// the landing view.
    #[must_use]
    pub fn new(media_store: Arc<dyn MediaStore>, news_store: Arc<dyn NewsStore>) -> Self {
        Self {
            view: ViewState::new(),
            library: MediaLibrary::new(),
            news: NewsFeed::new(),
            media_store,
            news_store,
        }
    }

    // ─── Read access ───────────────────────────────────────

    /// Current view state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Local media collection.
    pub fn library(&self) -> &MediaLibrary {
        &self.library
    }

    /// Local news feed.
    pub fn news(&self) -> &NewsFeed {
        &self.news
    }

    /// Items for a gallery section's grid, in collection order.
    pub fn gallery_items(&self, category: MediaCategory) -> Vec<&MediaItem> {
        self.library.by_category(category).collect()
    }

    // ─── Synchronous intents ───────────────────────────────

    /// Switch the active section.
    pub fn set_section(&mut self, section: Section) {
        self.view.set_section(section);
    }

    /// Open an item in the overlay, or close it with `None`.
    pub fn select_item(&mut self, item: Option<MediaItem>) {
        self.view.select_item(item);
    }

    /// Replace the comment draft.
    pub fn set_comment_draft(&mut self, text: impl Into<String>) {
        self.view.set_comment_draft(text);
    }

    /// Submit the comment draft for an item. See
    /// [`ViewState::submit_comment`] for the acceptance rules.
    pub fn submit_comment(&mut self, item_id: u64) -> bool {
        self.view.submit_comment(item_id)
    }

    // ─── Remote-backed intents ─────────────────────────────

    /// One-shot startup load: fetch both collections concurrently. The two
    /// loads are independent and each is best-effort on its own.
    pub async fn load_all(&mut self) {
        let (media, news) =
            futures::future::join(self.media_store.list(), self.news_store.list()).await;
        self.apply_media(media);
        self.apply_news(news);
    }

    /// Reload the media collection, replacing it wholesale on success.
    /// On failure the previous collection is kept (empty on a first-load
    /// failure).
    pub async fn load_media(&mut self) {
        let result = self.media_store.list().await;
        self.apply_media(result);
    }

    /// Reload the news feed, replacing it wholesale on success.
    pub async fn load_news(&mut self) {
        let result = self.news_store.list().await;
        self.apply_news(result);
    }

    /// Like an item.
    ///
    /// The update is confirmed by the store before any local mutation: the
    /// request carries the snapshot count plus one, and only a success
    /// response bumps the collection copy and the selection mirror. An id
    /// absent from the collection is a no-op without a network call.
    pub async fn like(&mut self, id: u64) {
        let Some(item) = self.library.get(id) else {
            log::warn!("Ignoring like for unknown item {id}");
            return;
        };

        let update = LikesUpdate {
            id,
            likes: item.likes + 1,
        };
        match self.media_store.update_likes(&update).await {
            Ok(()) => {
                self.library.bump_likes(id);
                self.view.bump_selected_likes(id);
            }
            Err(e) => {
                log::warn!("Failed to update likes for item {id}: {e}");
            }
        }
    }

    fn apply_media(&mut self, result: StoreResult<Vec<MediaItem>>) {
        match result {
            Ok(items) => {
                log::debug!("Loaded {} media items", items.len());
                self.view.reconcile_selection(&items);
                self.library.replace_all(items);
            }
            Err(e) => {
                log::warn!(
                    "Failed to load media, keeping {} cached items: {e}",
                    self.library.len()
                );
            }
        }
    }

    fn apply_news(&mut self, result: StoreResult<Vec<NewsItem>>) {
        match result {
            Ok(items) => {
                log::debug!("Loaded {} news posts", items.len());
                self.news.replace_all(items);
            }
            Err(e) => {
                log::warn!(
                    "Failed to load news, keeping {} cached posts: {e}",
                    self.news.len()
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{media_item, news_item, MockMediaStore, MockNewsStore};

    fn session_with(items: Vec<MediaItem>) -> (Session, Arc<MockMediaStore>) {
        let media = Arc::new(MockMediaStore::new(items));
        let news = Arc::new(MockNewsStore::new(Vec::new()));
        let session = Session::new(Arc::clone(&media) as Arc<dyn MediaStore>, news);
        (session, media)
    }

    #[tokio::test]
    async fn load_replaces_collection_wholesale() {
        let (mut session, media) = session_with(vec![media_item(1, MediaCategory::Photo, 0)]);
        session.load_media().await;
        assert_eq!(session.library().len(), 1);

        media
            .set_items(vec![
                media_item(2, MediaCategory::Track, 0),
                media_item(3, MediaCategory::Text, 0),
            ])
            .await;
        session.load_media().await;

        let ids: Vec<u64> = session.library().items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn failed_load_keeps_previous_collection() {
        let (mut session, media) = session_with(vec![media_item(1, MediaCategory::Photo, 7)]);
        session.load_media().await;
        assert_eq!(session.library().len(), 1);

        media.set_fail_list(true).await;
        media.set_items(vec![media_item(2, MediaCategory::Photo, 0)]).await;
        session.load_media().await;

        assert_eq!(session.library().len(), 1);
        assert_eq!(session.library().get(1).unwrap().likes, 7);
    }

    #[tokio::test]
    async fn failed_first_load_leaves_collection_empty() {
        let (mut session, media) = session_with(vec![media_item(1, MediaCategory::Photo, 0)]);
        media.set_fail_list(true).await;
        session.load_media().await;
        assert!(session.library().is_empty());
    }

    #[tokio::test]
    async fn load_all_fills_both_collections() {
        let media = Arc::new(MockMediaStore::new(vec![media_item(
            1,
            MediaCategory::Photo,
            0,
        )]));
        let news = Arc::new(MockNewsStore::new(vec![news_item(1), news_item(2)]));
        let mut session = Session::new(media, news);

        session.load_all().await;
        assert_eq!(session.library().len(), 1);
        assert_eq!(session.news().len(), 2);
    }

    #[tokio::test]
    async fn load_all_failures_are_independent() {
        let media = Arc::new(MockMediaStore::new(vec![media_item(
            1,
            MediaCategory::Photo,
            0,
        )]));
        let news = Arc::new(MockNewsStore::new(vec![news_item(1)]));
        news.set_fail_list(true).await;
        let mut session = Session::new(media, Arc::clone(&news) as Arc<dyn NewsStore>);

        session.load_all().await;
        assert_eq!(session.library().len(), 1);
        assert!(session.news().is_empty());
    }

    #[tokio::test]
    async fn like_confirms_then_increments() {
        let (mut session, media) = session_with(vec![
            media_item(1, MediaCategory::Photo, 42),
            media_item(2, MediaCategory::Photo, 38),
        ]);
        session.load_media().await;

        session.like(1).await;

        let likes: Vec<u32> = session.library().items().iter().map(|i| i.likes).collect();
        assert_eq!(likes, vec![43, 38]);

        // The request body carried the snapshot plus one.
        let calls = media.update_calls().await;
        assert_eq!(calls, vec![LikesUpdate { id: 1, likes: 43 }]);
    }

    #[tokio::test]
    async fn like_unknown_id_issues_no_network_call() {
        let (mut session, media) = session_with(vec![media_item(1, MediaCategory::Photo, 42)]);
        session.load_media().await;

        session.like(99).await;

        assert_eq!(session.library().get(1).unwrap().likes, 42);
        assert!(media.update_calls().await.is_empty());
    }

    #[tokio::test]
    async fn like_failure_leaves_both_copies_unchanged() {
        let (mut session, media) = session_with(vec![media_item(1, MediaCategory::Photo, 42)]);
        session.load_media().await;
        let open = session.library().get(1).cloned();
        session.select_item(open);

        media.set_fail_update(true).await;
        session.like(1).await;

        assert_eq!(session.library().get(1).unwrap().likes, 42);
        assert_eq!(session.view().selected().unwrap().likes, 42);
    }

    #[tokio::test]
    async fn like_keeps_selection_mirror_equal() {
        let (mut session, _media) = session_with(vec![media_item(1, MediaCategory::Photo, 42)]);
        session.load_media().await;
        let open = session.library().get(1).cloned();
        session.select_item(open);

        session.like(1).await;

        let in_library = session.library().get(1).unwrap().likes;
        let in_mirror = session.view().selected().unwrap().likes;
        assert_eq!(in_library, 43);
        assert_eq!(in_mirror, in_library);
    }

    #[tokio::test]
    async fn like_other_item_leaves_mirror_alone() {
        let (mut session, _media) = session_with(vec![
            media_item(1, MediaCategory::Photo, 42),
            media_item(2, MediaCategory::Photo, 38),
        ]);
        session.load_media().await;
        let open = session.library().get(1).cloned();
        session.select_item(open);

        session.like(2).await;

        assert_eq!(session.view().selected().unwrap().likes, 42);
        assert_eq!(session.library().get(2).unwrap().likes, 39);
    }

    #[tokio::test]
    async fn reload_clears_selection_when_item_disappears() {
        let (mut session, media) = session_with(vec![media_item(1, MediaCategory::Photo, 0)]);
        session.load_media().await;
        let open = session.library().get(1).cloned();
        session.select_item(open);

        media.set_items(vec![media_item(2, MediaCategory::Photo, 0)]).await;
        session.load_media().await;

        assert!(session.view().selected().is_none());
    }

    #[tokio::test]
    async fn reload_refreshes_surviving_selection() {
        let (mut session, media) = session_with(vec![media_item(1, MediaCategory::Photo, 5)]);
        session.load_media().await;
        let open = session.library().get(1).cloned();
        session.select_item(open);

        media.set_items(vec![media_item(1, MediaCategory::Photo, 11)]).await;
        session.load_media().await;

        assert_eq!(session.view().selected().unwrap().likes, 11);
    }

    #[tokio::test]
    async fn gallery_items_filters_by_category() {
        let (mut session, _media) = session_with(vec![
            media_item(1, MediaCategory::Photo, 0),
            media_item(2, MediaCategory::Track, 0),
            media_item(3, MediaCategory::Track, 0),
        ]);
        session.load_media().await;

        let ids: Vec<u64> = session
            .gallery_items(MediaCategory::Track)
            .iter()
            .map(|item| item.id)
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn comment_flow_through_session() {
        let (mut session, _media) = session_with(Vec::new());
        session.set_comment_draft("great");
        assert!(session.submit_comment(1));
        assert_eq!(session.view().comment_draft(), "");

        session.set_comment_draft("  ");
        assert!(!session.submit_comment(1));
        assert_eq!(session.view().comment_draft(), "  ");
    }
}
