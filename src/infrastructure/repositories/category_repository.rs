use crate::domain::category::{Category, CategoryRepository};
use crate::error::{AppError, AppResult};
use std::path::Path;
use std::sync::LazyLock;

static CATEGORIES: LazyLock<Vec<Category>> = LazyLock::new(|| {
    vec![
        Category::new(
            "Board Games",
            &["https://boardgamegeek.com/rss/news"],
            "assets/images/board-games.svg",
        ),
        Category::new(
            "Art",
            &["https://www.thisiscolossal.com/feed/"],
            "assets/images/art.svg",
        ),
        Category::new(
            "Video Games",
            &[
                "https://feeds.ign.com/ign/games-all",
                "https://www.polygon.com/rss/index.xml",
            ],
            "assets/images/video-games.svg",
        ),
        Category::new(
            "Technology",
            &[
                "https://feeds.arstechnica.com/arstechnica/index",
                "https://techcrunch.com/feed/",
            ],
            "assets/images/technology.svg",
        ),
        Category::new(
            "Fiction Books",
            &[
                "https://www.tor.com/fiction/feed/",
                "https://www.goodreads.com/blog/feed",
            ],
            "assets/images/fiction-books.svg",
        ),
    ]
});

/// Built-in catalog compiled into the binary
pub struct StaticCategoryRepository;

impl CategoryRepository for StaticCategoryRepository {
    fn get_all_categories(&self) -> Vec<Category> {
        CATEGORIES.clone()
    }
}

/// Catalog read from a JSON file (an array of categories)
pub struct JsonCategoryRepository {
    categories: Vec<Category>,
}

impl JsonCategoryRepository {
    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_json(raw: &str) -> Result<Self, String> {
        let categories: Vec<Category> = serde_json::from_str(raw).map_err(|e| e.to_string())?;

        if categories.is_empty() {
            return Err("category catalog is empty".to_string());
        }
        if let Some(category) = categories.iter().find(|c| c.feeds.is_empty()) {
            return Err(format!("category '{}' has no feeds", category.name));
        }

        Ok(Self { categories })
    }
}

impl CategoryRepository for JsonCategoryRepository {
    fn get_all_categories(&self) -> Vec<Category> {
        self.categories.clone()
    }
}
