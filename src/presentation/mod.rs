//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating port implementations for the build use case
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Glyph loaders, fallback renderer and event sinks (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::{Cli, Commands};
pub use factory::{create_event_sink, create_fallback_renderer, create_glyph_loader};
