//! Release actions

use manifold_core::{validate_namespace, validate_release_name};

use crate::error::Result;
use crate::release::StoredRelease;
use crate::storage::StorageDriver;

/// Options for retrieving a stored release
#[derive(Debug, Clone)]
pub struct GetOptions {
    /// Release name
    pub name: String,

    /// Namespace the release lives in
    pub namespace: String,

    /// Revision to fetch, `0` for the latest one
    pub revision: u32,
}

impl GetOptions {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            revision: 0,
        }
    }

    pub fn with_revision(mut self, revision: u32) -> Self {
        self.revision = revision;
        self
    }
}

/// Fetch a stored release
///
/// Storage errors are returned as-is so callers can report them unchanged.
pub async fn get_release<S>(storage: &S, options: &GetOptions) -> Result<StoredRelease>
where
    S: StorageDriver + ?Sized,
{
    validate_release_name(&options.name)?;
    validate_namespace(&options.namespace)?;

    let release = if options.revision == 0 {
        storage.get_latest(&options.namespace, &options.name).await?
    } else {
        storage
            .get(&options.namespace, &options.name, options.revision)
            .await?
    };

    tracing::debug!(
        name = %release.name,
        namespace = %release.namespace,
        revision = release.version,
        status = %release.state,
        "retrieved release"
    );

    Ok(release)
}
