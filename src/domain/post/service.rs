use super::PublishedPost;
use crate::domain::feed::FeedItem;
use crate::error::AppResult;
use crate::infrastructure::repositories::PostRepository;
use chrono::NaiveDate;
use std::path::PathBuf;
use std::sync::Arc;

pub struct PostService {
    post_repo: Arc<PostRepository>,
}

impl PostService {
    pub fn new(post_repo: Arc<PostRepository>) -> Self {
        Self { post_repo }
    }

    /// Persist a post for an admitted summary
    pub async fn publish(
        &self,
        category: &str,
        item: &FeedItem,
        summary: &str,
        image: &str,
        date: NaiveDate,
    ) -> AppResult<PathBuf> {
        let post = compose(category, item, summary, image, date);
        self.post_repo.save(&post).await
    }
}

pub fn compose(
    category: &str,
    item: &FeedItem,
    summary: &str,
    image: &str,
    date: NaiveDate,
) -> PublishedPost {
    let body = format!(
        "**Original:** [{title}]({link})\n\n{summary}\n\n*Source: {link}*",
        title = item.title,
        link = item.link,
        summary = summary,
    );

    PublishedPost {
        title: item.title.clone(),
        date,
        category: category.to_string(),
        image: image.to_string(),
        source: item.link.clone(),
        body,
    }
}
