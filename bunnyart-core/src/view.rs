//! View state: active section, open item, comment draft

use bunnyart_store::MediaItem;

use crate::types::Section;

/// Client view state for one session.
///
/// The section and the selection are orthogonal: the open item is an overlay
/// and survives section changes. The selection holds an owned copy of the
/// library entry rather than a shared reference, so the session keeps the
/// two copies consistent explicitly.
#[derive(Debug, Default)]
pub struct ViewState {
    section: Section,
    selected: Option<MediaItem>,
    comment_draft: String,
}

impl ViewState {
    /// Create the initial view state (landing section, nothing open).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active section.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Switch the active section unconditionally.
    pub fn set_section(&mut self, section: Section) {
        self.section = section;
    }

    /// Currently open media item, if any.
    pub fn selected(&self) -> Option<&MediaItem> {
        self.selected.as_ref()
    }

    /// Open an item, or close the overlay with `None`.
    pub fn select_item(&mut self, item: Option<MediaItem>) {
        self.selected = item;
    }

    /// Whether the item overlay is open.
    pub fn is_item_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Current comment draft text.
    pub fn comment_draft(&self) -> &str {
        &self.comment_draft
    }

    /// Replace the draft text. No trimming or length limit at input time;
    /// blank drafts are rejected at submit time instead.
    pub fn set_comment_draft(&mut self, text: impl Into<String>) {
        self.comment_draft = text.into();
    }

    /// Submit the comment draft for an item.
    ///
    /// An empty or whitespace-only draft is rejected silently and left
    /// unchanged. A non-blank draft is recorded to the log only (comments
    /// are not persisted remotely) and the draft is cleared unconditionally.
    /// Returns whether the draft was accepted.
    pub fn submit_comment(&mut self, item_id: u64) -> bool {
        if self.comment_draft.trim().is_empty() {
            return false;
        }
        log::info!("Comment on item {item_id}: {}", self.comment_draft);
        self.comment_draft.clear();
        true
    }

    /// Bump the mirrored like count if `id` is the open item.
    pub(crate) fn bump_selected_likes(&mut self, id: u64) {
        if let Some(item) = self.selected.as_mut().filter(|item| item.id == id) {
            item.likes += 1;
        }
    }

    /// Reconcile the selection against a freshly loaded collection.
    ///
    /// The mirror is refreshed from the new copy when the open item survived
    /// the reload, and cleared when its id disappeared.
    pub(crate) fn reconcile_selection(&mut self, items: &[MediaItem]) {
        if let Some(open) = self.selected.as_ref() {
            self.selected = items.iter().find(|item| item.id == open.id).cloned();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::media_item;
    use bunnyart_store::MediaCategory;

    #[test]
    fn starts_at_home_with_nothing_open() {
        let view = ViewState::new();
        assert_eq!(view.section(), Section::Home);
        assert!(!view.is_item_open());
        assert_eq!(view.comment_draft(), "");
    }

    #[test]
    fn set_section_replaces_unconditionally() {
        let mut view = ViewState::new();
        view.set_section(Section::Tracks);
        assert_eq!(view.section(), Section::Tracks);
        view.set_section(Section::Tracks);
        assert_eq!(view.section(), Section::Tracks);
    }

    #[test]
    fn selection_survives_section_change() {
        let mut view = ViewState::new();
        view.select_item(Some(media_item(1, MediaCategory::Photo, 5)));
        view.set_section(Section::News);
        assert!(view.is_item_open());
    }

    #[test]
    fn select_none_always_clears() {
        let mut view = ViewState::new();
        view.select_item(None);
        assert!(view.selected().is_none());

        view.select_item(Some(media_item(1, MediaCategory::Photo, 5)));
        view.select_item(None);
        assert!(view.selected().is_none());
    }

    #[test]
    fn submit_clears_non_blank_draft() {
        let mut view = ViewState::new();
        view.set_comment_draft("nice work!");
        assert!(view.submit_comment(1));
        assert_eq!(view.comment_draft(), "");
    }

    #[test]
    fn submit_rejects_blank_draft_unchanged() {
        let mut view = ViewState::new();
        view.set_comment_draft("   \t");
        assert!(!view.submit_comment(1));
        assert_eq!(view.comment_draft(), "   \t");

        view.set_comment_draft("");
        assert!(!view.submit_comment(1));
        assert_eq!(view.comment_draft(), "");
    }

    #[test]
    fn bump_only_affects_matching_item() {
        let mut view = ViewState::new();
        view.select_item(Some(media_item(1, MediaCategory::Photo, 5)));

        view.bump_selected_likes(2);
        assert_eq!(view.selected().unwrap().likes, 5);

        view.bump_selected_likes(1);
        assert_eq!(view.selected().unwrap().likes, 6);
    }

    #[test]
    fn reconcile_refreshes_surviving_selection() {
        let mut view = ViewState::new();
        view.select_item(Some(media_item(1, MediaCategory::Photo, 5)));

        let fresh = vec![media_item(1, MediaCategory::Photo, 9)];
        view.reconcile_selection(&fresh);
        assert_eq!(view.selected().unwrap().likes, 9);
    }

    #[test]
    fn reconcile_clears_vanished_selection() {
        let mut view = ViewState::new();
        view.select_item(Some(media_item(1, MediaCategory::Photo, 5)));

        let fresh = vec![media_item(2, MediaCategory::Photo, 0)];
        view.reconcile_selection(&fresh);
        assert!(view.selected().is_none());
    }
}
