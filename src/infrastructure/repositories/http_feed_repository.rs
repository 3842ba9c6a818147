use crate::domain::feed::model::SNIPPET_MAX_CHARS;
use crate::domain::feed::{FeedError, FeedItem, FeedRepository};
use crate::domain::shared::text::{strip_tags, truncate_chars};
use async_trait::async_trait;
use feed_rs::parser;
use regex::Regex;
use std::sync::LazyLock;

static INLINE_IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<img[^>]+src="([^"]+)""#).unwrap());

/// Fetches RSS/Atom documents over HTTP and normalizes their entries
pub struct HttpFeedRepository {
    http_client: reqwest::Client,
}

impl HttpFeedRepository {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    async fn fetch_document(&self, url: &str) -> Result<String, FeedError> {
        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Fetch {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl FeedRepository for HttpFeedRepository {
    async fn fetch_items(&self, url: &str) -> Result<Vec<FeedItem>, FeedError> {
        tracing::debug!(feed = %url, "Fetching feed");

        let document = self.fetch_document(url).await?;
        let items = parse_feed(&document);

        tracing::info!(
            feed = %url,
            document_bytes = document.len(),
            item_count = items.len(),
            "Feed parsed"
        );

        Ok(items)
    }
}

/// Parse an RSS or Atom document into items sorted newest first.
///
/// A document that cannot be parsed yields no items.
pub fn parse_feed(document: &str) -> Vec<FeedItem> {
    let feed = match parser::parse(document.as_bytes()) {
        Ok(feed) => feed,
        Err(e) => {
            tracing::warn!(error = %e, "Feed document could not be parsed");
            return Vec::new();
        }
    };

    let mut items: Vec<FeedItem> = feed.entries.into_iter().map(to_feed_item).collect();
    FeedItem::sort_newest_first(&mut items);
    items
}

fn to_feed_item(entry: feed_rs::model::Entry) -> FeedItem {
    let title = entry
        .title
        .as_ref()
        .map(|t| t.content.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Untitled".to_string());

    let link = entry
        .links
        .iter()
        .map(|l| l.href.trim())
        .find(|href| !href.is_empty())
        .unwrap_or_default()
        .to_string();

    let published_at = entry.published.or(entry.updated);

    // content:encoded / atom content first, then summary / description
    let raw_content = entry
        .content
        .as_ref()
        .and_then(|c| c.body.clone())
        .filter(|body| !body.trim().is_empty())
        .or_else(|| entry.summary.as_ref().map(|s| s.content.clone()))
        .unwrap_or_default();

    let image = enclosure_url(&entry)
        .or_else(|| first_inline_image(&raw_content))
        .unwrap_or_default();

    let snippet = truncate_chars(&strip_tags(&raw_content), SNIPPET_MAX_CHARS).to_string();

    FeedItem {
        title,
        link,
        published_at,
        snippet,
        image,
    }
}

fn enclosure_url(entry: &feed_rs::model::Entry) -> Option<String> {
    entry
        .media
        .iter()
        .flat_map(|media| media.content.iter())
        .filter_map(|content| content.url.as_ref())
        .map(|url| url.to_string())
        .find(|url| !url.trim().is_empty())
}

fn first_inline_image(html: &str) -> Option<String> {
    INLINE_IMAGE_PATTERN
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
