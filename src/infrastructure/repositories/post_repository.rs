use crate::domain::post::PublishedPost;
use crate::error::AppResult;
use std::path::PathBuf;

/// A post file read back from disk
#[derive(Debug, Clone)]
pub struct StoredPost {
    pub file_name: String,
    pub content: String,
}

/// Markdown posts stored as flat files in one directory
pub struct PostRepository {
    posts_dir: PathBuf,
}

impl PostRepository {
    pub fn new(posts_dir: PathBuf) -> Self {
        Self { posts_dir }
    }

    /// Write a post, replacing any file with the same name
    pub async fn save(&self, post: &PublishedPost) -> AppResult<PathBuf> {
        tokio::fs::create_dir_all(&self.posts_dir).await?;

        let path = self.posts_dir.join(post.file_name());
        tokio::fs::write(&path, post.to_markdown()).await?;

        tracing::info!(path = %path.display(), "Post written");
        Ok(path)
    }

    /// The `limit` most recent posts, newest first by file name.
    ///
    /// File names start with the ISO date, so reverse lexical order is
    /// reverse chronological order. A missing directory holds no posts.
    pub async fn find_recent(&self, limit: usize) -> AppResult<Vec<StoredPost>> {
        let mut entries = match tokio::fs::read_dir(&self.posts_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut file_names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name().to_string_lossy().to_string();
            if file_name.ends_with(".md") && entry.file_type().await?.is_file() {
                file_names.push(file_name);
            }
        }

        file_names.sort_unstable_by(|a, b| b.cmp(a));
        file_names.truncate(limit);

        let mut posts = Vec::with_capacity(file_names.len());
        for file_name in file_names {
            let content = tokio::fs::read_to_string(self.posts_dir.join(&file_name)).await?;
            posts.push(StoredPost { file_name, content });
        }

        Ok(posts)
    }
}
