//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Provides atomic writes (tempfile + rename) and symlink handling.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| FsError::at(path, e))
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| FsError::at(parent, e))?;

        let mut temp = tempfile::NamedTempFile::new_in(parent).map_err(|e| FsError::at(parent, e))?;
        temp.write_all(content).map_err(|e| FsError::at(path, e))?;
        temp.as_file().sync_all().map_err(|e| FsError::at(path, e))?;
        temp.persist(path).map_err(|e| FsError::at(path, e.error))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::at(path, e))
    }

    fn copy(&self, from: &Path, to: &Path) -> FsResult<()> {
        if let Some(parent) = to.parent() {
            std::fs::create_dir_all(parent).map_err(|e| FsError::at(parent, e))?;
        }
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| FsError::at(from, e))
    }

    fn symlink(&self, target: &Path, link: &Path) -> FsResult<()> {
        create_symlink(target, link).map_err(|e| FsError::at(link, e))
    }

    fn remove_all(&self, path: &Path) -> FsResult<()> {
        let meta = match std::fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(FsError::at(path, e)),
        };

        let result = if meta.is_dir() {
            std::fs::remove_dir_all(path)
        } else {
            remove_link_or_file(path)
        };
        result.map_err(|e| FsError::at(path, e))
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        std::fs::rename(from, to).map_err(|e| FsError::at(from, e))
    }
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    let resolved = match link.parent() {
        Some(parent) if target.is_relative() => parent.join(target),
        _ => target.to_path_buf(),
    };
    if resolved.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}

#[cfg(unix)]
fn remove_link_or_file(path: &Path) -> std::io::Result<()> {
    std::fs::remove_file(path)
}

#[cfg(windows)]
fn remove_link_or_file(path: &Path) -> std::io::Result<()> {
    // Directory symlinks on Windows are removed with remove_dir
    std::fs::remove_file(path).or_else(|_| std::fs::remove_dir(path))
}
