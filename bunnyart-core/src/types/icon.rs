//! Icon identifiers recognized by the presentation layer

use crate::error::{CoreError, CoreResult};

/// Closed set of icon names the UI knows how to render.
///
/// Construction from a string fails fast on unrecognized values instead of
/// silently rendering nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    Home,
    Image,
    Video,
    Music,
    FileText,
    Newspaper,
    Mail,
    Heart,
    MessageCircle,
    Send,
    X,
    Plus,
    Calendar,
    ArrowRight,
    Menu,
    Sparkles,
    Users,
    Inbox,
}

impl IconName {
    /// Renderer-facing name of the icon.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Music => "Music",
            Self::FileText => "FileText",
            Self::Newspaper => "Newspaper",
            Self::Mail => "Mail",
            Self::Heart => "Heart",
            Self::MessageCircle => "MessageCircle",
            Self::Send => "Send",
            Self::X => "X",
            Self::Plus => "Plus",
            Self::Calendar => "Calendar",
            Self::ArrowRight => "ArrowRight",
            Self::Menu => "Menu",
            Self::Sparkles => "Sparkles",
            Self::Users => "Users",
            Self::Inbox => "Inbox",
        }
    }

    /// Look up an icon by name.
    ///
    /// # Errors
    /// Returns `CoreError::UnknownIcon` for names outside the recognized set.
    pub fn from_name(name: &str) -> CoreResult<Self> {
        match name {
            "Home" => Ok(Self::Home),
            "Image" => Ok(Self::Image),
            "Video" => Ok(Self::Video),
            "Music" => Ok(Self::Music),
            "FileText" => Ok(Self::FileText),
            "Newspaper" => Ok(Self::Newspaper),
            "Mail" => Ok(Self::Mail),
            "Heart" => Ok(Self::Heart),
            "MessageCircle" => Ok(Self::MessageCircle),
            "Send" => Ok(Self::Send),
            "X" => Ok(Self::X),
            "Plus" => Ok(Self::Plus),
            "Calendar" => Ok(Self::Calendar),
            "ArrowRight" => Ok(Self::ArrowRight),
            "Menu" => Ok(Self::Menu),
            "Sparkles" => Ok(Self::Sparkles),
            "Users" => Ok(Self::Users),
            "Inbox" => Ok(Self::Inbox),
            _ => Err(CoreError::UnknownIcon(name.to_string())),
        }
    }
}
