use crate::domain::category::{Category, CategoryRepository};
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::{JsonCategoryRepository, StaticCategoryRepository};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_USER_AGENT: &str = "CNC-Daily/1.0";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash-latest";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_PERSPECTIVE_BASE_URL: &str = "https://commentanalyzer.googleapis.com";

/// Immutable run configuration, built once and shared by every component
#[derive(Debug, Clone)]
pub struct Config {
    pub categories: Vec<Category>,
    // Summarization service
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    // Classification service
    pub perspective_api_key: Option<String>,
    pub perspective_base_url: String,
    // Output
    pub posts_dir: PathBuf,
    pub homepage_template: PathBuf,
    pub homepage_output: PathBuf,
    pub homepage_limit: usize,
    // HTTP
    pub user_agent: String,
    pub http_timeout_seconds: u64,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let categories = match env::var("CATEGORIES_FILE") {
            Ok(path) if !path.trim().is_empty() => {
                JsonCategoryRepository::load(&PathBuf::from(path))?.get_all_categories()
            }
            _ => StaticCategoryRepository.get_all_categories(),
        };

        let config = Config {
            categories,
            gemini_api_key: optional_secret("GEMINI_API_KEY"),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            perspective_api_key: optional_secret("PERSPECTIVE_API_KEY"),
            perspective_base_url: env::var("PERSPECTIVE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_PERSPECTIVE_BASE_URL.to_string()),
            posts_dir: env::var("POSTS_DIR")
                .unwrap_or_else(|_| "posts".to_string())
                .into(),
            homepage_template: env::var("HOMEPAGE_TEMPLATE")
                .unwrap_or_else(|_| "templates/index.html".to_string())
                .into(),
            homepage_output: env::var("HOMEPAGE_OUTPUT")
                .unwrap_or_else(|_| "docs/index.html".to_string())
                .into(),
            homepage_limit: parse_var("HOMEPAGE_LIMIT", "50")?,
            user_agent: env::var("USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            http_timeout_seconds: parse_var("HTTP_TIMEOUT_SECONDS", "30")?,
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_default()
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        Ok(config)
    }

    /// Configuration rooted at `root`, with the built-in catalog and no credentials
    pub fn for_directory(root: &std::path::Path) -> Self {
        Self {
            categories: StaticCategoryRepository.get_all_categories(),
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            perspective_api_key: None,
            perspective_base_url: DEFAULT_PERSPECTIVE_BASE_URL.to_string(),
            posts_dir: root.join("posts"),
            homepage_template: root.join("templates").join("index.html"),
            homepage_output: root.join("docs").join("index.html"),
            homepage_limit: 50,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http_timeout_seconds: 30,
            log_format: LogFormat::Pretty,
        }
    }
}

/// Blank values count as missing so an empty CI secret behaves like an absent one
fn optional_secret(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T>(name: &str, default: &str) -> AppResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .trim()
        .parse()
        .map_err(|e| AppError::Config(format!("{} is invalid: {}", name, e)))
}
