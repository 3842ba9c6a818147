#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("fetch failed for {url}: HTTP {status}")]
    Fetch { url: String, status: u16 },
    #[error("transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::Transport(err.to_string())
    }
}
