//! View-level type definitions

mod icon;
mod nav;
mod section;

pub use icon::IconName;
pub use nav::{category_icon, nav_items, NavItem};
pub use section::Section;
