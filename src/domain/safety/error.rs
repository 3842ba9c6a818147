use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SafetyError {
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SafetyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SafetyError::Decode(err.to_string())
        } else {
            SafetyError::Transport(err.to_string())
        }
    }
}

impl From<SafetyError> for AppError {
    fn from(err: SafetyError) -> Self {
        match err {
            SafetyError::MissingCredential(name) => AppError::MissingCredential(name.to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}
