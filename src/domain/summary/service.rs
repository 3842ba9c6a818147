use super::{SummaryError, SummaryRepository};
use crate::domain::shared::text::truncate_chars;
use std::sync::Arc;

/// Article text beyond this many characters is not sent to the service
pub const MAX_ARTICLE_CHARS: usize = 8000;

#[derive(Debug, Clone)]
pub struct SummaryRequest<'a> {
    pub category: &'a str,
    pub title: &'a str,
    pub url: &'a str,
    pub text: &'a str,
}

pub struct SummaryService {
    summary_repo: Arc<dyn SummaryRepository>,
}

impl SummaryService {
    pub fn new(summary_repo: Arc<dyn SummaryRepository>) -> Self {
        Self { summary_repo }
    }

    /// Summarize an article for a general audience.
    ///
    /// The result is trimmed and may be empty; callers decide what an empty
    /// summary means.
    pub async fn summarize(&self, request: &SummaryRequest<'_>) -> Result<String, SummaryError> {
        let prompt = build_prompt(request);

        tracing::info!(
            category = request.category,
            title = request.title,
            text_length = request.text.chars().count(),
            prompt_length = prompt.len(),
            "Requesting summary"
        );

        let summary = self.summary_repo.generate(&prompt).await?;
        let summary = summary.trim().to_string();

        tracing::info!(
            category = request.category,
            word_count = summary.split_whitespace().count(),
            "Summary received"
        );

        Ok(summary)
    }
}

pub fn build_prompt(request: &SummaryRequest<'_>) -> String {
    format!(
        "You are a helpful assistant writing short news summaries in a friendly, conversational tone.
Summarize the following article for a general audience in 150-220 words.
- Keep it factual and neutral.
- Avoid speculation, slurs, adult content, or harassment.
- Include a one-sentence takeaway at the end starting with 'Why it matters:'.
Provide only plain paragraphs without lists.

Title: {title}
URL: {url}
Article text:
{text}
",
        title = request.title,
        url = request.url,
        text = truncate_chars(request.text, MAX_ARTICLE_CHARS),
    )
}
