//! Mock storage driver for testing
//!
//! Keeps releases in memory and counts operations so tests can assert on
//! how the storage was used.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use super::StorageDriver;
use crate::error::{KubeError, Result};
use crate::release::StoredRelease;

/// namespace -> name -> version -> release
type Store = HashMap<String, HashMap<String, BTreeMap<u32, StoredRelease>>>;

/// In-memory storage driver for testing
#[derive(Clone, Default)]
pub struct MockStorageDriver {
    store: Arc<RwLock<Store>>,
    gets: Arc<AtomicUsize>,
    creates: Arc<AtomicUsize>,
}

/// Counts of operations performed for testing assertions
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OperationCounts {
    /// `get`, `get_latest` and `history` calls
    pub gets: usize,
    pub creates: usize,
}

impl MockStorageDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with pre-populated releases
    pub fn with_releases(releases: Vec<StoredRelease>) -> Self {
        let mut store = Store::new();
        for release in releases {
            store
                .entry(release.namespace.clone())
                .or_default()
                .entry(release.name.clone())
                .or_default()
                .insert(release.version, release);
        }

        Self {
            store: Arc::new(RwLock::new(store)),
            ..Self::default()
        }
    }

    /// Get operation counts for assertions
    pub fn operation_counts(&self) -> OperationCounts {
        OperationCounts {
            gets: self.gets.load(Ordering::SeqCst),
            creates: self.creates.load(Ordering::SeqCst),
        }
    }

    fn versions<T>(
        &self,
        namespace: &str,
        name: &str,
        f: impl FnOnce(&BTreeMap<u32, StoredRelease>) -> Option<T>,
    ) -> Result<T> {
        self.gets.fetch_add(1, Ordering::SeqCst);

        let store = self.store.read().map_err(poisoned)?;
        store
            .get(namespace)
            .and_then(|ns| ns.get(name))
            .and_then(f)
            .ok_or_else(|| KubeError::ReleaseNotFound {
                name: name.to_string(),
                namespace: namespace.to_string(),
            })
    }
}

fn poisoned<T>(_: PoisonError<T>) -> KubeError {
    KubeError::Storage("mock storage lock poisoned".to_string())
}

#[async_trait]
impl StorageDriver for MockStorageDriver {
    async fn get(&self, namespace: &str, name: &str, version: u32) -> Result<StoredRelease> {
        self.versions(namespace, name, |versions| Some(versions.get(&version).cloned()))?
            .ok_or_else(|| KubeError::RevisionNotFound {
                name: name.to_string(),
                namespace: namespace.to_string(),
                version,
            })
    }

    async fn get_latest(&self, namespace: &str, name: &str) -> Result<StoredRelease> {
        self.versions(namespace, name, |versions| {
            versions.last_key_value().map(|(_, r)| r.clone())
        })
    }

    async fn history(&self, namespace: &str, name: &str) -> Result<Vec<StoredRelease>> {
        self.versions(namespace, name, |versions| {
            let releases: Vec<StoredRelease> = versions.values().rev().cloned().collect();
            (!releases.is_empty()).then_some(releases)
        })
    }

    async fn create(&self, release: &StoredRelease) -> Result<()> {
        self.creates.fetch_add(1, Ordering::SeqCst);

        let mut store = self.store.write().map_err(poisoned)?;
        let versions = store
            .entry(release.namespace.clone())
            .or_default()
            .entry(release.name.clone())
            .or_default();

        if versions.contains_key(&release.version) {
            return Err(KubeError::ReleaseAlreadyExists {
                name: release.name.clone(),
                namespace: release.namespace.clone(),
                version: release.version,
            });
        }

        versions.insert(release.version, release.clone());
        Ok(())
    }
}
