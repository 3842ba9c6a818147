use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// Score the classifier reports for a summary mentioning a toxic title
pub const TOXIC_SCORE: f64 = 0.7;

#[derive(Default)]
pub struct MockState {
    feeds: Mutex<HashMap<String, String>>,
    articles: Mutex<HashMap<String, String>>,
    failing_paths: Mutex<HashSet<String>>,
    toxic_titles: Mutex<Vec<String>>,
    classifier_status: Mutex<Option<StatusCode>>,
    requests: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
}

/// Stand-in for every upstream service the pipeline talks to
pub struct MockServer {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockServer {
    pub async fn start() -> anyhow::Result<Self> {
        let state = Arc::new(MockState::default());
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            state,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn serve_feed(&self, path: &str, document: String) {
        self.state
            .feeds
            .lock()
            .unwrap()
            .insert(path.to_string(), document);
    }

    pub fn serve_article(&self, path: &str, html: String) {
        self.state
            .articles
            .lock()
            .unwrap()
            .insert(path.to_string(), html);
    }

    /// Answer `path` with a 500
    pub fn fail(&self, path: &str) {
        self.state
            .failing_paths
            .lock()
            .unwrap()
            .insert(path.to_string());
    }

    /// Summaries of this article will score as toxic
    pub fn mark_toxic(&self, title: &str) {
        self.state
            .toxic_titles
            .lock()
            .unwrap()
            .push(title.to_string());
    }

    pub fn set_classifier_status(&self, status: StatusCode) {
        *self.state.classifier_status.lock().unwrap() = Some(status);
    }

    /// Paths requested so far, in arrival order
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Prompts received by the summarization endpoint
    pub fn prompts(&self) -> Vec<String> {
        self.state.prompts.lock().unwrap().clone()
    }

    pub fn request_count(&self, suffix: &str) -> usize {
        self.requests().iter().filter(|p| p.ends_with(suffix)).count()
    }
}

async fn handle(State(state): State<Arc<MockState>>, uri: Uri, body: Bytes) -> Response {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(path.clone());

    if state.failing_paths.lock().unwrap().contains(&path) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response();
    }
    if path.ends_with(":generateContent") {
        return generate_content(&state, &body);
    }
    if path.ends_with("comments:analyze") {
        return analyze_comment(&state, &body);
    }
    if let Some(document) = state.feeds.lock().unwrap().get(&path) {
        return (
            [(header::CONTENT_TYPE, "application/rss+xml")],
            document.clone(),
        )
            .into_response();
    }
    if let Some(html) = state.articles.lock().unwrap().get(&path) {
        return ([(header::CONTENT_TYPE, "text/html")], html.clone()).into_response();
    }

    StatusCode::NOT_FOUND.into_response()
}

/// Summarizes by quoting the article title found in the prompt
fn generate_content(state: &MockState, body: &[u8]) -> Response {
    let request: Value = serde_json::from_slice(body).unwrap_or_default();
    let prompt = request["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default();
    state.prompts.lock().unwrap().push(prompt.to_string());
    let title = prompt
        .lines()
        .find_map(|line| line.strip_prefix("Title: "))
        .unwrap_or("an unknown article");

    Json(json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{
                    "text": format!(
                        "  A short summary of {}.\n\nWhy it matters: readers care.\n",
                        title
                    )
                }]
            },
            "finishReason": "STOP"
        }]
    }))
    .into_response()
}

fn analyze_comment(state: &MockState, body: &[u8]) -> Response {
    if let Some(status) = *state.classifier_status.lock().unwrap() {
        return (status, "classifier unavailable").into_response();
    }

    let request: Value = serde_json::from_slice(body).unwrap_or_default();
    let text = request["comment"]["text"].as_str().unwrap_or_default();
    let toxic = state
        .toxic_titles
        .lock()
        .unwrap()
        .iter()
        .any(|title| text.contains(title.as_str()));
    let toxicity = if toxic { TOXIC_SCORE } else { 0.02 };

    let score = |value: f64| json!({"summaryScore": {"value": value, "type": "PROBABILITY"}});
    Json(json!({
        "attributeScores": {
            "TOXICITY": score(toxicity),
            "INSULT": score(0.01),
            "THREAT": score(0.01),
            "SEXUALLY_EXPLICIT": score(0.01),
            "PROFANITY": score(0.01)
        },
        "languages": ["en"]
    }))
    .into_response()
}
