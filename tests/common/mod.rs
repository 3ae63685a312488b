//! Common test utilities for emojiforge CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project and cache directories plus CLI helpers
//! - Fixtures: Reusable input file contents

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
