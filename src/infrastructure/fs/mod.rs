//! File System Implementations
//!
//! - `LocalFs` - local disk with atomic writes and symlinks

mod local;

pub use local::LocalFs;
