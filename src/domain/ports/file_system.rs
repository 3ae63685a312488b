//! FileSystem port - abstraction over file I/O operations
//!
//! Lets the cache store, rasterizer and materializer run against the local
//! disk in production and against fault-injecting doubles in tests.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(PathBuf, std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Attach the offending path to an I/O error
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(path.to_path_buf(), err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(path, err) => write!(f, "I/O error at {}: {}", path.display(), err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - test doubles that inject failures
pub trait FileSystem {
    /// Read file content
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Write content to file atomically, creating parent directories
    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    /// Check if a path exists (symlinks are followed)
    fn exists(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Copy a file, overwriting the destination
    fn copy(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// Create `link` pointing at `target`; `target` may be relative to `link`
    fn symlink(&self, target: &Path, link: &Path) -> FsResult<()>;

    /// Remove a file, symlink or directory tree; absent paths are fine
    fn remove_all(&self, path: &Path) -> FsResult<()>;

    /// Move a file or directory
    fn rename(&self, from: &Path, to: &Path) -> FsResult<()>;
}
