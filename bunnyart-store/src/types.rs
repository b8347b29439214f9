//! Wire type definitions for the media and news endpoints.

use serde::{Deserialize, Serialize};

/// Media item category.
///
/// Closed set; the wire representation is lowercase. Unknown values are a
/// decode failure, not a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    Photo,
    Video,
    Track,
    Text,
}

impl MediaCategory {
    /// All categories, in gallery display order.
    pub const ALL: [MediaCategory; 4] = [Self::Photo, Self::Video, Self::Track, Self::Text];

    /// Wire/display name of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Video => "video",
            Self::Track => "track",
            Self::Text => "text",
        }
    }
}

/// A single gallery entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Server-assigned identifier
    pub id: u64,
    /// Display title
    pub title: String,
    /// Category (wire name `type`)
    #[serde(rename = "type")]
    pub category: MediaCategory,
    /// Primary media URL
    pub url: String,
    /// Thumbnail URL; listings may omit it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Like count. Never decremented by the client; no unlike exists.
    pub likes: u32,
    /// Creation timestamp as reported by the endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Comments in insertion order (= display order). The listing contract
    /// does not carry them, so this defaults empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
}

impl MediaItem {
    /// Number of comments shown on the card badge.
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}

/// A comment on a media item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Identifier, unique within the parent item
    pub id: u64,
    /// Author display name
    pub author: String,
    /// Comment body
    pub text: String,
    /// Creation date as a display string; never parsed
    pub date: String,
}

/// A news post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Server-assigned identifier
    pub id: u64,
    /// Headline
    pub title: String,
    /// Short description shown in the feed
    pub description: String,
    /// Optional long-form content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Optional illustration URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Creation timestamp (ISO-parsable)
    pub created_at: String,
}

impl NewsItem {
    /// Parsed publication timestamp, when the endpoint emitted a form
    /// [`crate::datetime::parse_created_at`] understands.
    pub fn published_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        crate::datetime::parse_created_at(&self.created_at)
    }
}

/// Request body for creating a media item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMedia {
    /// Display title
    pub title: String,
    /// Category (wire name `type`)
    #[serde(rename = "type")]
    pub category: MediaCategory,
    /// Primary media URL
    pub url: String,
    /// Thumbnail URL; the caller fills this with `url` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// Request body for overwriting an item's like count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikesUpdate {
    /// Target item identifier
    pub id: u64,
    /// New like count
    pub likes: u32,
}

/// Request body for creating a news post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNews {
    /// Headline
    pub title: String,
    /// Short description
    pub description: String,
    /// Optional long-form content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Optional illustration URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
