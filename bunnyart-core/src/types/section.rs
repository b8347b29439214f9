//! Section (top-level page) definitions

use bunnyart_store::MediaCategory;
use serde::{Deserialize, Serialize};

/// Top-level site section.
///
/// Exactly one section is active at a time; the open-item overlay is
/// independent of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Landing page
    #[default]
    Home,
    /// Photo gallery
    Photos,
    /// Video gallery
    Videos,
    /// Music collection
    Tracks,
    /// Texts and books
    Texts,
    /// News feed
    News,
    /// Contact page
    Contact,
}

impl Section {
    /// All sections, in navigation order.
    pub const ALL: [Section; 7] = [
        Self::Home,
        Self::Photos,
        Self::Videos,
        Self::Tracks,
        Self::Texts,
        Self::News,
        Self::Contact,
    ];

    /// Navigation label.
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Photos => "Photos",
            Self::Videos => "Videos",
            Self::Tracks => "Tracks",
            Self::Texts => "Texts",
            Self::News => "News",
            Self::Contact => "Contact",
        }
    }

    /// The media category this section displays, if it is a gallery.
    pub fn gallery_category(self) -> Option<MediaCategory> {
        match self {
            Self::Photos => Some(MediaCategory::Photo),
            Self::Videos => Some(MediaCategory::Video),
            Self::Tracks => Some(MediaCategory::Track),
            Self::Texts => Some(MediaCategory::Text),
            Self::Home | Self::News | Self::Contact => None,
        }
    }

    /// Whether this section renders the media grid.
    pub fn is_gallery(self) -> bool {
        self.gallery_category().is_some()
    }
}
