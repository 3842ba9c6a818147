use super::{FeedItem, FeedRepository};
use crate::domain::category::Category;
use std::sync::Arc;

pub struct FeedService {
    feed_repo: Arc<dyn FeedRepository>,
}

impl FeedService {
    pub fn new(feed_repo: Arc<dyn FeedRepository>) -> Self {
        Self { feed_repo }
    }

    /// Newest item of the first feed in the category that yields any.
    ///
    /// Feeds are tried in order and the walk stops at the first one with
    /// items. Failing or empty feeds are logged and skipped; `None` means no
    /// feed produced anything for this run.
    pub async fn select_latest(&self, category: &Category) -> Option<FeedItem> {
        for url in &category.feeds {
            match self.feed_repo.fetch_items(url).await {
                Ok(items) => match items.into_iter().next() {
                    Some(item) => {
                        tracing::info!(
                            category = %category.name,
                            feed = %url,
                            title = %item.title,
                            "Selected newest feed item"
                        );
                        return Some(item);
                    }
                    None => {
                        tracing::warn!(category = %category.name, feed = %url, "Feed has no items");
                    }
                },
                Err(e) => {
                    tracing::warn!(
                        category = %category.name,
                        feed = %url,
                        error = %e,
                        "Feed unavailable, trying next"
                    );
                }
            }
        }

        tracing::warn!(category = %category.name, "No feed produced an item");
        None
    }
}
