use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),
    #[error("summarization service error: {0}")]
    Service(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SummaryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SummaryError::Decode(err.to_string())
        } else {
            SummaryError::Transport(err.to_string())
        }
    }
}

impl From<SummaryError> for AppError {
    fn from(err: SummaryError) -> Self {
        match err {
            SummaryError::MissingCredential(name) => AppError::MissingCredential(name.to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}
