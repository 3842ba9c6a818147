use serde::{Deserialize, Serialize};

/// A topical section of the site, fed by an ordered list of feeds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub name: String,
    /// Feeds in priority order; the first one with items wins
    pub feeds: Vec<String>,
    /// Image used when neither the article nor the feed provides one
    pub fallback_image: String,
}

impl Category {
    pub fn new(name: &str, feeds: &[&str], fallback_image: &str) -> Self {
        Self {
            name: name.to_string(),
            feeds: feeds.iter().map(|f| f.to_string()).collect(),
            fallback_image: fallback_image.to_string(),
        }
    }
}

/// Repository trait for accessing the category catalog
pub trait CategoryRepository: Send + Sync {
    fn get_all_categories(&self) -> Vec<Category>;
}
