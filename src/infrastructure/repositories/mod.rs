pub mod category_repository;
pub mod gemini_summary_repository;
pub mod http_feed_repository;
pub mod perspective_classifier_repository;
pub mod post_repository;
pub mod readability_article_repository;

pub use category_repository::{JsonCategoryRepository, StaticCategoryRepository};
pub use gemini_summary_repository::GeminiSummaryRepository;
pub use http_feed_repository::HttpFeedRepository;
pub use perspective_classifier_repository::PerspectiveClassifierRepository;
pub use post_repository::{PostRepository, StoredPost};
pub use readability_article_repository::ReadabilityArticleRepository;
