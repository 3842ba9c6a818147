use crate::error::AppResult;
use crate::infrastructure::config::Config;
use std::time::Duration;

/// Build the HTTP client shared by every network collaborator.
///
/// Every request carries the configured user agent and timeout.
pub fn create_http_client(config: &Config) -> AppResult<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.http_timeout_seconds))
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()?;

    Ok(client)
}
