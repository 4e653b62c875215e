//! Manifold Core - Core types and utilities for working with release manifests
//!
//! This crate provides the foundational pieces used by the Manifold CLI:
//! - `PackMetadata`: The package a release was deployed from
//! - `release_name`: Release name and namespace validation
//! - `manifest`: Splitting rendered manifests and reading `# Source:` annotations
//! - `selector`: `--show-only` template selectors
//! - `output`: Writing documents to per-template files

pub mod error;
pub mod manifest;
pub mod output;
pub mod pack;
pub mod release_name;
pub mod selector;

pub use error::{CoreError, Result};
pub use manifest::{SourcePath, split_manifests};
pub use output::ManifestWriter;
pub use pack::PackMetadata;
pub use release_name::{
    MAX_NAMESPACE_LEN, MAX_RELEASE_NAME_LEN, validate_namespace, validate_release_name,
};
pub use selector::ShowOnly;
