pub mod model;
pub mod service;

pub use model::{slugify_title, PublishedPost};
pub use service::PostService;
