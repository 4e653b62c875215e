//! Error types for manifold-kube

use thiserror::Error;

/// Result type for manifold-kube operations
pub type Result<T> = std::result::Result<T, KubeError>;

/// Errors that can occur while reading or writing stored releases
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KubeError {
    /// Release not found
    #[error("release '{name}' not found in namespace '{namespace}'")]
    ReleaseNotFound { name: String, namespace: String },

    /// A specific revision of an existing release is missing
    #[error("release '{name}' has no revision {version} in namespace '{namespace}'")]
    RevisionNotFound {
        name: String,
        namespace: String,
        version: u32,
    },

    /// Release already exists
    #[error("release '{name}' revision {version} already exists in namespace '{namespace}'")]
    ReleaseAlreadyExists {
        name: String,
        namespace: String,
        version: u32,
    },

    /// Storage error
    #[error("storage error: {0}")]
    Storage(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Compression error
    #[error("compression error: {0}")]
    Compression(String),

    /// Invalid input rejected before reaching storage
    #[error(transparent)]
    Core(#[from] manifold_core::CoreError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for KubeError {
    fn from(e: serde_json::Error) -> Self {
        KubeError::Serialization(e.to_string())
    }
}

impl KubeError {
    /// Check if the release or revision does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            KubeError::ReleaseNotFound { .. } | KubeError::RevisionNotFound { .. }
        )
    }
}
