/// What could be pulled from the article page itself
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedArticle {
    /// Main readable text, empty when extraction found nothing
    pub text: String,
    /// `og:image` of the page, empty when absent
    pub image: String,
}

/// Text and image chosen for a post after applying the fallbacks
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleContent {
    pub text: String,
    pub image: String,
}
