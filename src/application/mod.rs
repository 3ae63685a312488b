//! Application Layer
//!
//! Use cases that orchestrate the build flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - Stamp, rasterize, generate, materialize, publish
//! - `Rasterizer` - Per-codepoint PNGs and name links
//! - `Materializer` - Cache directory population
//!
//! ## Services
//!
//! - `generate_artifacts` - Stylesheets and lookup tables from the dataset

pub mod build;
pub mod generate;
pub mod materialize;
pub mod rasterize;
#[cfg(test)]
pub(crate) mod testing;

pub use build::{stamp_info, BuildOptions, BuildResult, BuildUseCase, StampInfo};
pub use generate::{emoji_codes, generate_artifacts, GenerateInputs};
pub use materialize::{publish, MaterializeReport, MaterializeRequest, Materializer};
pub use rasterize::{GlyphFailure, GlyphOutcome, LinkFailure, RasterizeReport, Rasterizer};
