//! Asset materializer
//!
//! Moves a finished image tree into its cache directory and writes every
//! other artifact next to it. Publishing the served-assets link is a separate
//! step so callers can stamp the cache directory in between.

use std::path::{Path, PathBuf};

use crate::domain::entities::GeneratedArtifactSet;
use crate::domain::ports::{BuildEvent, BuildEventSink, FileSystem, FsError};
use crate::error::{ForgeError, ForgeResult};

use super::rasterize::LinkFailure;

/// Image tree inside a cache directory
pub const IMAGES_DIR: &str = "images";
/// Brand assets inside the image tree
pub const STATIC_DIR: &str = "static";

/// Everything that goes into one cache directory
#[derive(Debug, Clone)]
pub struct MaterializeRequest<'a> {
    /// Finished image tree in the scratch area
    pub work_images: &'a Path,
    pub cache_dir: &'a Path,
    /// Directory holding the brand assets
    pub brand_dir: &'a Path,
    pub brand_assets: &'a [String],
    /// Sprite sheets as (source file, file name in the cache directory)
    pub sheets: Vec<(PathBuf, String)>,
    pub artifacts: &'a GeneratedArtifactSet,
}

/// What the materializer wrote
#[derive(Debug, Clone, Default)]
pub struct MaterializeReport {
    pub files: usize,
    pub link_failures: Vec<LinkFailure>,
}

impl MaterializeReport {
    pub fn is_success(&self) -> bool {
        self.link_failures.is_empty()
    }
}

/// Writes build outputs into a cache directory
pub struct Materializer<'a, FS: FileSystem> {
    fs: &'a FS,
    events: &'a dyn BuildEventSink,
}

impl<'a, FS: FileSystem> Materializer<'a, FS> {
    pub fn new(fs: &'a FS, events: &'a dyn BuildEventSink) -> Self {
        Self { fs, events }
    }

    pub fn run(&self, request: &MaterializeRequest<'_>) -> ForgeResult<MaterializeReport> {
        let mut report = MaterializeReport::default();
        let images = request.cache_dir.join(IMAGES_DIR);

        self.fs.create_dir_all(request.cache_dir)?;
        self.fs.remove_all(&images)?;
        self.fs.rename(request.work_images, &images)?;

        let static_dir = images.join(STATIC_DIR);
        for asset in request.brand_assets {
            self.copy_input(&request.brand_dir.join(asset), &static_dir.join(asset))?;
            report.files += 1;

            let link = images.join(asset);
            let target = Path::new(STATIC_DIR).join(asset);
            if let Err(e) = self.fs.symlink(&target, &link) {
                log::warn!("cannot link {}: {}", link.display(), e);
                self.events.on_event(BuildEvent::LinkFailed {
                    link: link.clone(),
                    error: e.to_string(),
                });
                report.link_failures.push(LinkFailure {
                    link,
                    error: e.to_string(),
                });
            }
        }

        for (source, file_name) in &request.sheets {
            self.copy_input(source, &request.cache_dir.join(file_name))?;
            report.files += 1;
        }

        for artifact in request.artifacts.files() {
            let path = request.cache_dir.join(&artifact.file_name);
            self.fs.write(&path, artifact.content.as_bytes())?;
            log::debug!("wrote {}", path.display());
            report.files += 1;
        }

        self.events.on_event(BuildEvent::Materialized {
            files: report.files,
        });
        Ok(report)
    }

    fn copy_input(&self, from: &Path, to: &Path) -> ForgeResult<()> {
        self.fs.copy(from, to).map_err(|e| match e {
            FsError::NotFound(_) => ForgeError::MissingInput {
                path: from.to_path_buf(),
            },
            other => other.into(),
        })
    }
}

/// Point the served-assets link at `cache_dir` (remove, then recreate).
pub fn publish<FS: FileSystem>(fs: &FS, cache_dir: &Path, served_link: &Path) -> ForgeResult<()> {
    let symlink_error = |e: FsError| ForgeError::Symlink {
        link: served_link.to_path_buf(),
        target: cache_dir.to_path_buf(),
        source: std::io::Error::other(e.to_string()),
    };

    if let Some(parent) = served_link.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs.create_dir_all(parent).map_err(symlink_error)?;
    }
    fs.remove_all(served_link).map_err(symlink_error)?;
    fs.symlink(cache_dir, served_link).map_err(symlink_error)?;
    log::info!("{} -> {}", served_link.display(), cache_dir.display());
    Ok(())
}
