pub mod model;
pub mod service;

pub use model::{CategoryOutcome, CategoryResult, PublishedSummary, RunReport};
pub use service::PipelineService;
