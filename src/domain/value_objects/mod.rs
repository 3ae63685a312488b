//! Value Objects
//!
//! Immutable, validated value types used across the domain layer.

mod cache_stamp;
mod codepoint;
mod sprite_position;

pub use cache_stamp::{CacheStamp, CacheStampBuilder};
pub use codepoint::Codepoint;
pub use sprite_position::{percent, SpritePosition, SHEET_BACKGROUND_SIZE, SHEET_GRID_DIVISOR};
