pub mod article;
pub mod category;
pub mod feed;
pub mod homepage;
pub mod pipeline;
pub mod post;
pub mod safety;
pub mod shared;
pub mod summary;
