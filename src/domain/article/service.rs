use super::{ArticleContent, ArticleRepository, ExtractedArticle};
use crate::domain::category::Category;
use crate::domain::feed::FeedItem;
use std::sync::Arc;

/// Extracted text must be longer than this to be preferred over the feed snippet
pub const MIN_EXTRACTED_CHARS: usize = 400;

pub struct ArticleService {
    article_repo: Arc<dyn ArticleRepository>,
}

impl ArticleService {
    pub fn new(article_repo: Arc<dyn ArticleRepository>) -> Self {
        Self { article_repo }
    }

    /// Resolve the text to summarize and the image to show for an item.
    ///
    /// Extraction failures never fail the category: the feed snippet and
    /// feed image stand in, then the category fallback image.
    pub async fn resolve(&self, category: &Category, item: &FeedItem) -> ArticleContent {
        let extracted = match self.article_repo.extract(&item.link).await {
            Ok(extracted) => extracted,
            Err(e) => {
                tracing::warn!(
                    category = %category.name,
                    link = %item.link,
                    error = %e,
                    "Article extraction failed, using feed snippet"
                );
                ExtractedArticle::default()
            }
        };

        let content = choose_content(category, item, extracted);

        tracing::info!(
            category = %category.name,
            text_length = content.text.chars().count(),
            image = %content.image,
            "Article content resolved"
        );

        content
    }
}

fn choose_content(category: &Category, item: &FeedItem, extracted: ExtractedArticle) -> ArticleContent {
    let text = if extracted.text.chars().count() > MIN_EXTRACTED_CHARS {
        extracted.text
    } else {
        item.snippet.clone()
    };

    let image = [extracted.image.as_str(), item.image.as_str()]
        .into_iter()
        .find(|candidate| !candidate.trim().is_empty())
        .unwrap_or(category.fallback_image.as_str())
        .to_string();

    ArticleContent { text, image }
}
