//! Navigation model

use bunnyart_store::MediaCategory;

use crate::types::{IconName, Section};

/// Navigation menu entry
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub section: Section,
    pub label: &'static str,
    pub icon: IconName,
}

/// The fixed top navigation, in display order.
pub fn nav_items() -> Vec<NavItem> {
    Section::ALL
        .iter()
        .map(|&section| NavItem {
            section,
            label: section.title(),
            icon: section_icon(section),
        })
        .collect()
}

fn section_icon(section: Section) -> IconName {
    match section {
        Section::Home => IconName::Home,
        Section::Photos => IconName::Image,
        Section::Videos => IconName::Video,
        Section::Tracks => IconName::Music,
        Section::Texts => IconName::FileText,
        Section::News => IconName::Newspaper,
        Section::Contact => IconName::Mail,
    }
}

/// Icon shown on a gallery card for a media category.
pub fn category_icon(category: MediaCategory) -> IconName {
    match category {
        MediaCategory::Photo => IconName::Image,
        MediaCategory::Video => IconName::Video,
        MediaCategory::Track => IconName::Music,
        MediaCategory::Text => IconName::FileText,
    }
}
