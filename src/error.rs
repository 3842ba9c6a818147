/// Main application error type
///
/// Only structural failures end up here: anything that is local to one
/// category is handled inside the pipeline and never reaches `main`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Template(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the error reflects misconfiguration rather than a runtime fault
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingCredential(_) | Self::Config(_))
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
