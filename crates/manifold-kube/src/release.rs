//! Stored release records

use chrono::{DateTime, Utc};
use manifold_core::PackMetadata;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A stored release revision
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRelease {
    /// Release name
    pub name: String,

    /// Kubernetes namespace
    pub namespace: String,

    /// Revision number (1-indexed, increments with each upgrade)
    pub version: u32,

    /// Current state
    #[serde(default)]
    pub state: ReleaseState,

    /// Pack metadata at deploy time
    pub pack: PackMetadata,

    /// Rendered manifest (all Kubernetes resources)
    pub manifest: String,

    /// Custom labels for filtering/querying
    #[serde(default)]
    pub labels: HashMap<String, String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Notes from NOTES.txt (if present)
    #[serde(default)]
    pub notes: Option<String>,
}

impl StoredRelease {
    /// First revision of a freshly deployed release
    pub fn deployed(
        name: impl Into<String>,
        namespace: impl Into<String>,
        pack: PackMetadata,
        manifest: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            namespace: namespace.into(),
            version: 1,
            state: ReleaseState::Deployed,
            pack,
            manifest: manifest.into(),
            labels: HashMap::new(),
            created_at: now,
            updated_at: now,
            notes: None,
        }
    }

    /// Next revision of this release with a new manifest
    ///
    /// The new revision is deployed; `self` is left untouched.
    pub fn next_revision(&self, manifest: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: self.version + 1,
            state: ReleaseState::Deployed,
            manifest: manifest.into(),
            created_at: now,
            updated_at: now,
            ..self.clone()
        }
    }
}

/// Release lifecycle state
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "kebab-case")]
#[non_exhaustive]
pub enum ReleaseState {
    #[default]
    Deployed,

    Failed { reason: String },

    Uninstalled,

    /// Replaced by a newer revision
    Superseded,

    PendingInstall,

    PendingUpgrade,

    PendingRollback,

    PendingUninstall,
}

impl ReleaseState {
    /// Human-readable status name
    pub fn status_name(&self) -> &'static str {
        match self {
            Self::Deployed => "deployed",
            Self::Failed { .. } => "failed",
            Self::Uninstalled => "uninstalled",
            Self::Superseded => "superseded",
            Self::PendingInstall => "pending-install",
            Self::PendingUpgrade => "pending-upgrade",
            Self::PendingRollback => "pending-rollback",
            Self::PendingUninstall => "pending-uninstall",
        }
    }
}

impl std::fmt::Display for ReleaseState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Failed { reason } => write!(f, "failed: {}", reason),
            other => write!(f, "{}", other.status_name()),
        }
    }
}
