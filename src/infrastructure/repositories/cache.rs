//! Content-addressed cache store
//!
//! Layout: `<cache-root>/<digest>/` holds one build's artifacts and, once the
//! build fully succeeded, a `.success-stamp` marker.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::CacheStamp;
use crate::error::{ForgeError, ForgeResult};

use super::dataset::DatasetRepository;

/// Contents of the success marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessRecord {
    pub digest: String,
    pub dataset_version: String,
    pub tool_version: String,
    pub generated_at: DateTime<Utc>,
}

/// Cache directory bookkeeping for one cache root
pub struct CacheStore<'a, FS: FileSystem> {
    fs: &'a FS,
    root: PathBuf,
}

impl<'a, FS: FileSystem> CacheStore<'a, FS> {
    pub fn new(fs: &'a FS, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Hash the tracked inputs, in order, plus the version strings.
    pub fn compute_stamp(
        &self,
        inputs: &[PathBuf],
        dataset_version: &str,
        tool_version: &str,
    ) -> ForgeResult<CacheStamp> {
        let repo = DatasetRepository::new(self.fs);
        let mut builder = CacheStamp::builder();
        for input in inputs {
            builder = builder.add_bytes(&repo.read_input(input)?);
        }
        let stamp = builder.add_str(dataset_version).add_str(tool_version).finish();
        log::debug!("cache stamp {} over {} inputs", stamp, inputs.len());
        Ok(stamp)
    }

    pub fn cache_dir(&self, stamp: &CacheStamp) -> PathBuf {
        self.root.join(stamp.as_str())
    }

    pub fn success_path(&self, stamp: &CacheStamp) -> PathBuf {
        self.cache_dir(stamp).join(CacheStamp::SUCCESS_FILE)
    }

    /// Whether a previous run fully populated this stamp's directory
    pub fn is_complete(&self, stamp: &CacheStamp) -> bool {
        self.fs.exists(&self.success_path(stamp))
    }

    pub fn read_success(&self, stamp: &CacheStamp) -> Option<SuccessRecord> {
        let bytes = self.fs.read(&self.success_path(stamp)).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    /// Mark the stamp's directory as complete. Call only after every artifact
    /// has been written.
    pub fn mark_complete(
        &self,
        stamp: &CacheStamp,
        dataset_version: &str,
        tool_version: &str,
    ) -> ForgeResult<()> {
        let record = SuccessRecord {
            digest: stamp.to_string(),
            dataset_version: dataset_version.to_string(),
            tool_version: tool_version.to_string(),
            generated_at: Utc::now(),
        };
        let path = self.success_path(stamp);
        let json = serde_json::to_vec_pretty(&record).map_err(|source| ForgeError::Json {
            file: path.clone(),
            source,
        })?;
        self.fs.write(&path, &json)?;
        Ok(())
    }

    /// Drop the success stamp so the directory no longer counts as complete.
    /// The rest of the directory is left alone.
    pub fn invalidate(&self, stamp: &CacheStamp) -> ForgeResult<()> {
        self.fs.remove_all(&self.success_path(stamp))?;
        Ok(())
    }
}
