use super::{CategoryOutcome, PublishedSummary, RunReport};
use crate::domain::article::ArticleService;
use crate::domain::category::Category;
use crate::domain::feed::FeedService;
use crate::domain::homepage::HomepageService;
use crate::domain::post::PostService;
use crate::domain::safety::{SafetyError, SafetyService};
use crate::domain::summary::{SummaryError, SummaryRequest, SummaryService};
use crate::error::AppResult;
use crate::infrastructure::config::Config;
use crate::infrastructure::http::create_http_client;
use crate::infrastructure::repositories::{
    GeminiSummaryRepository, HttpFeedRepository, PerspectiveClassifierRepository, PostRepository,
    ReadabilityArticleRepository,
};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;

/// Drives every category through select, extract, summarize, gate and write,
/// then rebuilds the homepage
pub struct PipelineService {
    config: Arc<Config>,
    feed_service: FeedService,
    article_service: ArticleService,
    summary_service: SummaryService,
    safety_service: SafetyService,
    post_service: PostService,
    homepage_service: HomepageService,
    run_date: NaiveDate,
}

impl PipelineService {
    pub fn new(
        config: Arc<Config>,
        feed_service: FeedService,
        article_service: ArticleService,
        summary_service: SummaryService,
        safety_service: SafetyService,
        post_service: PostService,
        homepage_service: HomepageService,
    ) -> Self {
        Self {
            config,
            feed_service,
            article_service,
            summary_service,
            safety_service,
            post_service,
            homepage_service,
            run_date: Utc::now().date_naive(),
        }
    }

    /// Wire the HTTP-backed repositories described by the configuration
    pub fn from_config(config: Arc<Config>) -> AppResult<Self> {
        let http_client = create_http_client(&config)?;

        let feed_repo = Arc::new(HttpFeedRepository::new(http_client.clone()));
        let article_repo = Arc::new(ReadabilityArticleRepository::new(http_client.clone()));
        let summary_repo = Arc::new(GeminiSummaryRepository::new(
            http_client.clone(),
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
            config.gemini_base_url.clone(),
        ));
        let classifier_repo = Arc::new(PerspectiveClassifierRepository::new(
            http_client,
            config.perspective_api_key.clone(),
            config.perspective_base_url.clone(),
        ));
        let post_repo = Arc::new(PostRepository::new(config.posts_dir.clone()));

        Ok(Self::new(
            config.clone(),
            FeedService::new(feed_repo),
            ArticleService::new(article_repo),
            SummaryService::new(summary_repo),
            SafetyService::new(classifier_repo),
            PostService::new(post_repo.clone()),
            HomepageService::new(
                post_repo,
                config.homepage_template.clone(),
                config.homepage_output.clone(),
                config.homepage_limit,
            ),
        ))
    }

    /// Date stamped on every post written by this run
    pub fn with_run_date(mut self, run_date: NaiveDate) -> Self {
        self.run_date = run_date;
        self
    }

    /// Process every category once, in catalog order.
    ///
    /// Category-local failures are recorded as skips. A missing credential
    /// or a failed post write ends the run with an error before the homepage
    /// is rebuilt.
    pub async fn run(&self) -> AppResult<RunReport> {
        tracing::info!(
            categories = self.config.categories.len(),
            run_date = %self.run_date,
            "Starting run"
        );

        let mut report = RunReport::default();
        for category in &self.config.categories {
            let outcome = self.process_category(category).await?;
            tracing::info!(category = %category.name, outcome = %outcome, "Category finished");
            report.record(&category.name, outcome);
        }

        self.homepage_service.rebuild().await?;

        tracing::info!(
            published = report.published.len(),
            skipped = report.results.len() - report.published.len(),
            "Run completed"
        );

        Ok(report)
    }

    async fn process_category(&self, category: &Category) -> AppResult<CategoryOutcome> {
        let Some(item) = self.feed_service.select_latest(category).await else {
            return Ok(CategoryOutcome::SkippedNoFeed);
        };

        let content = self.article_service.resolve(category, &item).await;

        let request = SummaryRequest {
            category: &category.name,
            title: &item.title,
            url: &item.link,
            text: &content.text,
        };
        let summary = match self.summary_service.summarize(&request).await {
            Ok(summary) => summary,
            Err(e @ SummaryError::MissingCredential(_)) => return Err(e.into()),
            Err(e) => {
                tracing::warn!(category = %category.name, error = %e, "Summarization failed");
                return Ok(CategoryOutcome::SkippedSummarizeFailed);
            }
        };

        if summary.is_empty() {
            tracing::warn!(category = %category.name, "Empty summary");
            return Ok(CategoryOutcome::SkippedEmptySummary);
        }

        match self.safety_service.check(&summary).await {
            Ok(verdict) if verdict.is_safe() => {}
            Ok(verdict) => {
                tracing::warn!(
                    category = %category.name,
                    verdict = ?verdict,
                    "Summary failed safety check"
                );
                return Ok(CategoryOutcome::SkippedUnsafe);
            }
            Err(e @ SafetyError::MissingCredential(_)) => return Err(e.into()),
            Err(e) => {
                tracing::warn!(category = %category.name, error = %e, "Safety check failed");
                return Ok(CategoryOutcome::SkippedUnsafe);
            }
        }

        self.post_service
            .publish(&category.name, &item, &summary, &content.image, self.run_date)
            .await?;

        Ok(CategoryOutcome::Published(PublishedSummary {
            category: category.name.clone(),
            title: item.title,
        }))
    }
}
