use super::{PostCard, EMPTY_MARKUP, POSTS_PLACEHOLDER};
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::PostRepository;
use std::path::PathBuf;
use std::sync::Arc;

pub struct HomepageService {
    post_repo: Arc<PostRepository>,
    template_path: PathBuf,
    output_path: PathBuf,
    limit: usize,
}

impl HomepageService {
    pub fn new(
        post_repo: Arc<PostRepository>,
        template_path: PathBuf,
        output_path: PathBuf,
        limit: usize,
    ) -> Self {
        Self {
            post_repo,
            template_path,
            output_path,
            limit,
        }
    }

    /// Regenerate the homepage from the most recent posts on disk
    pub async fn rebuild(&self) -> AppResult<PathBuf> {
        let template = tokio::fs::read_to_string(&self.template_path)
            .await
            .map_err(|e| {
                AppError::Template(format!(
                    "cannot read {}: {}",
                    self.template_path.display(),
                    e
                ))
            })?;

        let posts = self.post_repo.find_recent(self.limit).await?;
        let markup = render_cards(posts.iter().map(|p| PostCard::from_markdown(&p.content)));
        let page = inject(&template, &markup)?;

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&self.output_path, page).await?;

        tracing::info!(
            path = %self.output_path.display(),
            posts = posts.len(),
            "Homepage rebuilt"
        );
        Ok(self.output_path.clone())
    }
}

fn render_cards(cards: impl Iterator<Item = PostCard>) -> String {
    let rendered: Vec<String> = cards.map(|card| card.to_html()).collect();
    if rendered.is_empty() {
        EMPTY_MARKUP.to_string()
    } else {
        rendered.join("\n")
    }
}

/// Replace the first placeholder occurrence with the rendered markup
pub fn inject(template: &str, markup: &str) -> AppResult<String> {
    if !template.contains(POSTS_PLACEHOLDER) {
        return Err(AppError::Template(format!(
            "template has no {} placeholder",
            POSTS_PLACEHOLDER
        )));
    }
    Ok(template.replacen(POSTS_PLACEHOLDER, markup, 1))
}
