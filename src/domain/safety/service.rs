use super::{Attribute, AttributeScores, Classification, ClassifierRepository, SafetyError, SafetyVerdict};
use std::sync::Arc;

/// A score at or above this value rejects the text
pub const SCORE_THRESHOLD: f64 = 0.5;

pub struct SafetyService {
    classifier_repo: Arc<dyn ClassifierRepository>,
}

impl SafetyService {
    pub fn new(classifier_repo: Arc<dyn ClassifierRepository>) -> Self {
        Self { classifier_repo }
    }

    /// Gate a candidate summary.
    ///
    /// Admits only when every attribute scores strictly below the threshold.
    /// A classifier outage rejects the text instead of letting it through.
    pub async fn check(&self, text: &str) -> Result<SafetyVerdict, SafetyError> {
        let verdict = match self.classifier_repo.classify(text).await? {
            Classification::Scores(scores) => evaluate(&scores),
            Classification::Unavailable { status } => {
                tracing::warn!(status, "Classification service unavailable, rejecting content");
                SafetyVerdict::Unavailable { status }
            }
        };

        tracing::debug!(verdict = ?verdict, "Safety check completed");
        Ok(verdict)
    }
}

/// First attribute (in request order) reaching the threshold decides the verdict
pub fn evaluate(scores: &AttributeScores) -> SafetyVerdict {
    Attribute::ALL
        .iter()
        .map(|&attribute| (attribute, scores.get(attribute)))
        .find(|&(_, score)| score >= SCORE_THRESHOLD)
        .map(|(attribute, score)| SafetyVerdict::Unsafe { attribute, score })
        .unwrap_or(SafetyVerdict::Safe)
}
