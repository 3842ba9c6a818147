use chrono::{DateTime, Utc};

/// Maximum length, in characters, of the plain-text snippet kept per item
pub const SNIPPET_MAX_CHARS: usize = 400;

#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    /// `None` when the feed omits the date or it cannot be parsed
    pub published_at: Option<DateTime<Utc>>,
    pub snippet: String,
    /// Enclosure or first inline image; empty when the item has neither
    pub image: String,
}

impl FeedItem {
    /// Sort newest first.
    ///
    /// Undated items go after every dated one, and ties keep their
    /// document order.
    pub fn sort_newest_first(items: &mut [FeedItem]) {
        items.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    }
}
