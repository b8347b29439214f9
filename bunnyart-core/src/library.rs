//! Local media collection

use bunnyart_store::{MediaCategory, MediaItem};

/// Authoritative local copy of the media items, in server order.
#[derive(Debug, Default)]
pub struct MediaLibrary {
    items: Vec<MediaItem>,
}

impl MediaLibrary {
    /// Create an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All items, in original order.
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the library holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace the whole collection with a freshly fetched list.
    /// No merging: stale items do not survive a reload.
    pub fn replace_all(&mut self, items: Vec<MediaItem>) {
        self.items = items;
    }

    /// Items of one category, preserving relative order.
    ///
    /// Collections are small and reloaded wholesale, so this is a plain scan
    /// with no index maintained.
    pub fn by_category(&self, category: MediaCategory) -> impl Iterator<Item = &MediaItem> + '_ {
        self.items.iter().filter(move |item| item.category == category)
    }

    /// Look up an item by id.
    pub fn get(&self, id: u64) -> Option<&MediaItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Whether an item with this id is present.
    pub fn contains(&self, id: u64) -> bool {
        self.get(id).is_some()
    }

    /// Apply a confirmed like to the local copy.
    pub(crate) fn bump_likes(&mut self, id: u64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.likes += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::media_item;

    #[test]
    fn replace_all_is_wholesale() {
        let mut library = MediaLibrary::new();
        library.replace_all(vec![
            media_item(1, MediaCategory::Photo, 0),
            media_item(2, MediaCategory::Track, 0),
        ]);
        assert_eq!(library.len(), 2);

        library.replace_all(vec![media_item(3, MediaCategory::Video, 0)]);
        assert_eq!(library.len(), 1);
        assert!(!library.contains(1));
        assert!(!library.contains(2));
        assert!(library.contains(3));
    }

    #[test]
    fn by_category_filters_and_preserves_order() {
        let mut library = MediaLibrary::new();
        library.replace_all(vec![
            media_item(1, MediaCategory::Photo, 0),
            media_item(2, MediaCategory::Track, 0),
            media_item(3, MediaCategory::Track, 0),
        ]);

        let ids: Vec<u64> = library
            .by_category(MediaCategory::Track)
            .map(|item| item.id)
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn by_category_empty_when_none_match() {
        let mut library = MediaLibrary::new();
        library.replace_all(vec![media_item(1, MediaCategory::Photo, 0)]);

        for category in [MediaCategory::Video, MediaCategory::Track, MediaCategory::Text] {
            assert_eq!(library.by_category(category).count(), 0);
        }
    }

    #[test]
    fn by_category_is_restartable() {
        let mut library = MediaLibrary::new();
        library.replace_all(vec![
            media_item(1, MediaCategory::Text, 0),
            media_item(2, MediaCategory::Text, 0),
        ]);

        assert_eq!(library.by_category(MediaCategory::Text).count(), 2);
        // A second scan over the same state yields the same view.
        assert_eq!(library.by_category(MediaCategory::Text).count(), 2);
    }

    #[test]
    fn bump_likes_targets_one_item() {
        let mut library = MediaLibrary::new();
        library.replace_all(vec![
            media_item(1, MediaCategory::Photo, 42),
            media_item(2, MediaCategory::Photo, 38),
        ]);

        library.bump_likes(1);
        assert_eq!(library.get(1).unwrap().likes, 43);
        assert_eq!(library.get(2).unwrap().likes, 38);

        library.bump_likes(99);
        assert_eq!(library.get(1).unwrap().likes, 43);
        assert_eq!(library.get(2).unwrap().likes, 38);
    }
}
