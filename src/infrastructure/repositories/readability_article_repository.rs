use crate::domain::article::{ArticleError, ArticleRepository, ExtractedArticle};
use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static OG_IMAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)property=["']og:image["'][^>]*content=["']([^"']+)["']"#).unwrap()
});

/// Article extraction backed by a readability port
pub struct ReadabilityArticleRepository {
    http_client: reqwest::Client,
}

impl ReadabilityArticleRepository {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl ArticleRepository for ReadabilityArticleRepository {
    async fn extract(&self, url: &str) -> Result<ExtractedArticle, ArticleError> {
        let page_url = Url::parse(url).map_err(|e| ArticleError::InvalidUrl(format!("{}: {}", url, e)))?;

        let response = self.http_client.get(page_url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ArticleError::Fetch {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let html = response.text().await?;
        let article = extract_from_html(&html, &page_url);

        tracing::debug!(
            url = %url,
            html_length = html.len(),
            text_length = article.text.len(),
            has_image = !article.image.is_empty(),
            "Article extracted"
        );

        Ok(article)
    }
}

/// Main readable text plus the page's `og:image`.
///
/// A page readability cannot handle yields empty text; the image scan is
/// independent of it.
pub fn extract_from_html(html: &str, url: &Url) -> ExtractedArticle {
    let mut reader = html.as_bytes();
    let text = match readability::extractor::extract(&mut reader, url) {
        Ok(product) => product.text.trim().to_string(),
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "Readability extraction failed");
            String::new()
        }
    };

    ExtractedArticle {
        text,
        image: og_image(html).unwrap_or_default(),
    }
}

fn og_image(html: &str) -> Option<String> {
    OG_IMAGE_PATTERN
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
