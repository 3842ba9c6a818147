use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use cnc_daily::domain::pipeline::PipelineService;
use cnc_daily::infrastructure::config::{Config, LogFormat};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        categories = config.categories.len(),
        posts_dir = %config.posts_dir.display(),
        "Starting CNC Daily run"
    );

    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set, summarization will fail");
    }
    if config.perspective_api_key.is_none() {
        tracing::warn!("PERSPECTIVE_API_KEY is not set, safety checks will fail");
    }

    let pipeline = PipelineService::from_config(Arc::new(config))?;

    let report = pipeline.run().await.map_err(|e| {
        tracing::error!(error = %e, configuration = e.is_configuration(), "Run aborted");
        e
    })?;

    for published in &report.published {
        tracing::info!(
            category = %published.category,
            title = %published.title,
            "Published"
        );
    }

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cnc_daily=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
