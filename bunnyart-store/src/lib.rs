//! # bunnyart-store
//!
//! Wire types and HTTP/JSON clients for the two remote collaborators of the
//! BunnyArt portfolio site.
//!
//! ## Endpoints
//!
//! | Endpoint | Operations |
//! |----------|------------|
//! | Media | `GET` full item list, `POST` create item, `PUT` overwrite like count |
//! | News  | `GET` full post list, `POST` create post |
//!
//! Both endpoints are plain unauthenticated JSON services addressed by a
//! fixed absolute URL. Success of mutations is derived from the response
//! status class only; mutation response bodies are ignored. Neither contract
//! carries pagination or query parameters as consumed: listings are always
//! fetched wholesale and filtered client-side.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bunnyart_store::{HttpMediaStore, MediaStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = HttpMediaStore::new("https://example.com/media");
//!     for item in store.list().await? {
//!         println!("{} ({} likes)", item.title, item.likes);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, StoreError>`](StoreError). There is no
//! automatic retry and no in-flight request deduplication: every call is
//! independent, and a failed call leaves the remote state as the caller's
//! problem to re-request.

mod error;
mod http;
mod stores;
mod traits;
mod types;
mod util;

pub mod datetime;

// Re-export error types
pub use error::{Result, StoreError};

// Re-export store traits and HTTP implementations
pub use stores::{HttpMediaStore, HttpNewsStore};
pub use traits::{MediaStore, NewsStore};

// Re-export wire types
pub use types::{Comment, LikesUpdate, MediaCategory, MediaItem, NewMedia, NewNews, NewsItem};
