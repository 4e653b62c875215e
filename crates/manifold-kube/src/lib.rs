//! Manifold Kube - release storage for Manifold
//!
//! This crate provides:
//! - **Releases**: The stored release record and its lifecycle state
//! - **Storage Drivers**: Persist releases in local files, or in memory for tests
//! - **Actions**: Release retrieval used by the `get` commands

pub mod actions;
pub mod error;
pub mod release;
pub mod storage;

pub use actions::{GetOptions, get_release};
pub use error::{KubeError, Result};
pub use release::{ReleaseState, StoredRelease};
pub use storage::{
    CompressionMethod, FileDriver, MockStorageDriver, OperationCounts, StorageConfig,
    StorageDriver,
};
