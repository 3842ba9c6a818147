pub mod error;
pub mod model;
pub mod service;

pub use error::FeedError;
pub use model::FeedItem;
pub use service::FeedService;

use async_trait::async_trait;

/// Source of parsed feed items.
///
/// Implementations fetch a single feed and return its items newest first.
/// A document that cannot be parsed yields an empty list; only transport
/// and HTTP status failures are errors.
#[async_trait]
pub trait FeedRepository: Send + Sync {
    async fn fetch_items(&self, url: &str) -> Result<Vec<FeedItem>, FeedError>;
}
