pub mod error;
pub mod model;
pub mod service;

pub use error::ArticleError;
pub use model::{ArticleContent, ExtractedArticle};
pub use service::ArticleService;

use async_trait::async_trait;

/// Extracts readable text and a representative image from an article page
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn extract(&self, url: &str) -> Result<ExtractedArticle, ArticleError>;
}
