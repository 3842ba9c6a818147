pub mod error;
pub mod service;

pub use error::SummaryError;
pub use service::{SummaryRequest, SummaryService};

use async_trait::async_trait;

/// Generative text backend.
///
/// Implementations submit the prompt with provider-side content blocking
/// disabled, since the safety gate runs on the output afterwards.
#[async_trait]
pub trait SummaryRepository: Send + Sync {
    /// Returns the generated text, or an empty string when the service
    /// produced no candidates
    async fn generate(&self, prompt: &str) -> Result<String, SummaryError>;
}
