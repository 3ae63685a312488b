//! JSON input loading
//!
//! Reads the emoji name map, the third-party dataset, the legacy reactions
//! map and the dependency manifest. Every failure here is structural.

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::entities::{EmojiMap, EmojiRecord, LegacyReactions};
use crate::domain::ports::{FileSystem, FsError};
use crate::error::{ForgeError, ForgeResult};

/// Repository for the build's JSON inputs
pub struct DatasetRepository<'a, FS: FileSystem> {
    fs: &'a FS,
}

impl<'a, FS: FileSystem> DatasetRepository<'a, FS> {
    pub fn new(fs: &'a FS) -> Self {
        Self { fs }
    }

    /// Raw bytes of a required input file
    pub fn read_input(&self, path: &Path) -> ForgeResult<Vec<u8>> {
        self.fs.read(path).map_err(|e| match e {
            FsError::NotFound(_) => ForgeError::MissingInput {
                path: path.to_path_buf(),
            },
            other => other.into(),
        })
    }

    fn load_json<T: DeserializeOwned>(&self, path: &Path) -> ForgeResult<T> {
        let bytes = self.read_input(path)?;
        serde_json::from_slice(&bytes).map_err(|source| ForgeError::Json {
            file: path.to_path_buf(),
            source,
        })
    }

    /// Emoji name -> codepoint map driving rasterization
    pub fn load_emoji_map(&self, path: &Path) -> ForgeResult<EmojiMap> {
        let map: EmojiMap = self.load_json(path)?;
        log::debug!("loaded {} emoji names from {}", map.len(), path.display());
        Ok(map)
    }

    /// Third-party dataset entries
    pub fn load_dataset(&self, path: &Path) -> ForgeResult<Vec<EmojiRecord>> {
        let records: Vec<EmojiRecord> = self.load_json(path)?;
        log::debug!("loaded {} dataset entries from {}", records.len(), path.display());
        Ok(records)
    }

    /// Legacy "unified reactions" name -> codepoint map
    pub fn load_legacy_reactions(&self, path: &Path) -> ForgeResult<LegacyReactions> {
        self.load_json(path)
    }

    /// Version of `package` pinned by the dependency manifest
    pub fn dataset_version(&self, manifest: &Path, package: &str) -> ForgeResult<String> {
        let parsed: PackageManifest = self.load_json(manifest)?;
        parsed
            .dependencies
            .into_iter()
            .chain(parsed.dev_dependencies)
            .find(|(name, _)| name == package)
            .map(|(_, version)| version)
            .filter(|version| !version.trim().is_empty())
            .ok_or_else(|| ForgeError::ManifestVersion {
                package: package.to_string(),
                file: manifest.to_path_buf(),
            })
    }
}

#[derive(Deserialize)]
struct PackageManifest {
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: BTreeMap<String, String>,
}
