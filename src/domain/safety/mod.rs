pub mod error;
pub mod model;
pub mod service;

pub use error::SafetyError;
pub use model::{Attribute, AttributeScores, Classification, SafetyVerdict};
pub use service::SafetyService;

use async_trait::async_trait;

/// Content-classification backend scoring text on the requested attributes
#[async_trait]
pub trait ClassifierRepository: Send + Sync {
    /// A non-success answer from the service is reported as
    /// `Classification::Unavailable`, not as an error.
    async fn classify(&self, text: &str) -> Result<Classification, SafetyError>;
}
