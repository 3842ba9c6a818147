use crate::domain::safety::{
    Attribute, AttributeScores, Classification, ClassifierRepository, SafetyError,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeCommentRequest {
    pub comment: Comment,
    pub languages: Vec<String>,
    pub requested_attributes: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct Comment {
    pub text: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeCommentResponse {
    #[serde(default)]
    pub attribute_scores: HashMap<String, AttributeScore>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeScore {
    pub summary_score: Option<SummaryScore>,
}

#[derive(Debug, Deserialize)]
pub struct SummaryScore {
    pub value: Option<f64>,
}

impl AnalyzeCommentRequest {
    pub fn for_text(text: &str) -> Self {
        Self {
            comment: Comment {
                text: text.to_string(),
            },
            languages: vec!["en".to_string()],
            requested_attributes: Attribute::ALL
                .iter()
                .map(|a| (a.as_str().to_string(), Value::Object(Map::new())))
                .collect(),
        }
    }
}

impl AnalyzeCommentResponse {
    pub fn scores(&self) -> AttributeScores {
        let mut scores = AttributeScores::default();
        for attribute in Attribute::ALL {
            let value = self
                .attribute_scores
                .get(attribute.as_str())
                .and_then(|s| s.summary_score.as_ref())
                .and_then(|s| s.value)
                .unwrap_or(0.0);
            scores.set(attribute, value);
        }
        scores
    }
}

/// Perspective `comments:analyze` implementation of the classifier repository
pub struct PerspectiveClassifierRepository {
    http_client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl PerspectiveClassifierRepository {
    pub fn new(http_client: reqwest::Client, api_key: Option<String>, base_url: String) -> Self {
        Self {
            http_client,
            api_key,
            base_url,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1alpha1/comments:analyze",
            self.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl ClassifierRepository for PerspectiveClassifierRepository {
    async fn classify(&self, text: &str) -> Result<Classification, SafetyError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SafetyError::MissingCredential("PERSPECTIVE_API_KEY"))?;

        let response = self
            .http_client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&AnalyzeCommentRequest::for_text(text))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Classification request failed");
            return Ok(Classification::Unavailable {
                status: status.as_u16(),
            });
        }

        let body: AnalyzeCommentResponse = response.json().await?;
        let scores = body.scores();

        tracing::info!(
            provider = "perspective",
            toxicity = scores.toxicity,
            insult = scores.insult,
            threat = scores.threat,
            sexually_explicit = scores.sexually_explicit,
            profanity = scores.profanity,
            "Classification completed"
        );

        Ok(Classification::Scores(scores))
    }
}
