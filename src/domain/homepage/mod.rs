pub mod card;
pub mod service;

pub use card::PostCard;
pub use service::HomepageService;

/// Token in the homepage template replaced by the rendered cards
pub const POSTS_PLACEHOLDER: &str = "<!-- POSTS_INJECT -->";

/// Markup used instead of the cards when there are no posts
pub const EMPTY_MARKUP: &str = "<p>No posts yet.</p>";
