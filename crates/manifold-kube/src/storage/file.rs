//! File-based storage driver
//!
//! Stores each release revision in its own file:
//! `<base>/<namespace>/<name>/v<version>.json`, compressed with the
//! configured method.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::{
    StorageConfig, StorageDriver, compress, decompress, deserialize_release, serialize_release,
};
use crate::error::{KubeError, Result};
use crate::release::StoredRelease;

/// File-based storage driver
pub struct FileDriver {
    /// Base directory for storing releases
    base_dir: PathBuf,
    config: StorageConfig,
}

impl FileDriver {
    /// Create a new file driver
    ///
    /// The base directory does not need to exist yet; it is created on the
    /// first write.
    pub fn new(base_dir: impl Into<PathBuf>, config: StorageConfig) -> Self {
        Self {
            base_dir: base_dir.into(),
            config,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn release_path(&self, namespace: &str, name: &str, version: u32) -> PathBuf {
        self.release_dir(namespace, name)
            .join(format!("v{}.json", version))
    }

    fn release_dir(&self, namespace: &str, name: &str) -> PathBuf {
        self.base_dir.join(namespace).join(name)
    }

    fn write_release(&self, path: &Path, release: &StoredRelease) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serialize_release(release)?;
        let data = compress(&json, self.config.compression)?;
        std::fs::write(path, data)?;

        Ok(())
    }

    fn read_release(&self, path: &Path) -> Result<StoredRelease> {
        let data = std::fs::read(path)?;
        let decompressed = decompress(&data, self.config.compression)?;
        deserialize_release(&decompressed)
    }

    /// Revision numbers stored for a release, highest first
    fn versions(&self, namespace: &str, name: &str) -> Result<Vec<u32>> {
        let dir = self.release_dir(namespace, name);

        if !dir.exists() {
            return Err(Self::not_found(namespace, name));
        }

        let mut versions = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().is_none_or(|e| e != "json") {
                continue;
            }
            let version = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(|stem| stem.strip_prefix('v'))
                .and_then(|n| n.parse::<u32>().ok());
            if let Some(version) = version {
                versions.push(version);
            }
        }

        versions.sort_unstable_by(|a, b| b.cmp(a));

        if versions.is_empty() {
            return Err(Self::not_found(namespace, name));
        }

        Ok(versions)
    }

    fn not_found(namespace: &str, name: &str) -> KubeError {
        KubeError::ReleaseNotFound {
            name: name.to_string(),
            namespace: namespace.to_string(),
        }
    }
}

#[async_trait]
impl StorageDriver for FileDriver {
    async fn get(&self, namespace: &str, name: &str, version: u32) -> Result<StoredRelease> {
        let path = self.release_path(namespace, name, version);

        if !path.exists() {
            if !self.release_dir(namespace, name).exists() {
                return Err(Self::not_found(namespace, name));
            }
            return Err(KubeError::RevisionNotFound {
                name: name.to_string(),
                namespace: namespace.to_string(),
                version,
            });
        }

        self.read_release(&path)
    }

    async fn get_latest(&self, namespace: &str, name: &str) -> Result<StoredRelease> {
        let latest = self.versions(namespace, name)?[0];
        tracing::debug!(namespace, name, revision = latest, "reading latest revision");
        self.read_release(&self.release_path(namespace, name, latest))
    }

    async fn history(&self, namespace: &str, name: &str) -> Result<Vec<StoredRelease>> {
        self.versions(namespace, name)?
            .into_iter()
            .map(|version| self.read_release(&self.release_path(namespace, name, version)))
            .collect()
    }

    async fn create(&self, release: &StoredRelease) -> Result<()> {
        let path = self.release_path(&release.namespace, &release.name, release.version);

        if path.exists() {
            return Err(KubeError::ReleaseAlreadyExists {
                name: release.name.clone(),
                namespace: release.namespace.clone(),
                version: release.version,
            });
        }

        self.write_release(&path, release)
    }
}
