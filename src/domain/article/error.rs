#[derive(Debug, thiserror::Error)]
pub enum ArticleError {
    #[error("fetch failed for {url}: HTTP {status}")]
    Fetch { url: String, status: u16 },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid article url: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ArticleError {
    fn from(err: reqwest::Error) -> Self {
        ArticleError::Transport(err.to_string())
    }
}
