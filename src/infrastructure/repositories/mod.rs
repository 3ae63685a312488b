//! Repository Implementations
//!
//! - `DatasetRepository` - JSON inputs (name map, dataset, reactions, manifest)
//! - `CacheStore` - content-addressed cache directories and success stamps

mod cache;
mod dataset;

pub use cache::{CacheStore, SuccessRecord};
pub use dataset::DatasetRepository;
