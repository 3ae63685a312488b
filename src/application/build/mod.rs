//! Build Module
//!
//! Orchestrates one emoji asset build.
//!
//! ## Structure
//!
//! - `options` - Per-run switches (`BuildOptions`)
//! - `result` - Result types (`BuildResult`, `StampInfo`)
//! - `use_case` - Core use case logic (`BuildUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use emojiforge::application::build::{BuildOptions, BuildUseCase};
//!
//! let use_case = BuildUseCase::new(&fs, loader.as_ref(), &fallback);
//! let result = use_case.execute(&ctx, &BuildOptions::default())?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::BuildOptions;
pub use result::{BuildResult, StampInfo};
pub use use_case::{stamp_info, BuildUseCase};

#[cfg(test)]
mod tests;
