//! Get manifest command - split a release manifest into per-template files

use manifold_core::{ManifestWriter, ShowOnly, SourcePath, split_manifests};
use manifold_kube::{GetOptions, StorageDriver, StoredRelease, get_release};
use std::path::PathBuf;

use crate::error::Result;

pub const LONG_ABOUT: &str = "\
This command fetches the generated manifest for a given release.

A manifest is a YAML-encoded representation of the Kubernetes resources that
were generated from this release's pack(s). If a pack depends on other packs,
those resources will also be included in the manifest.

Every document is written to RELEASE_NAME/<template path>, taken from its
`# Source:` annotation. Documents rendered from the same template end up in
the same file, in manifest order.";

/// Run the get manifest command
///
/// Files are written under a directory named after the release, relative to
/// the current directory.
pub async fn run<S>(storage: &S, options: &GetOptions, show_only: &[String]) -> Result<Vec<PathBuf>>
where
    S: StorageDriver + ?Sized,
{
    let mut show_only = ShowOnly::new(show_only)?;
    let release = get_release(storage, options).await?;

    let output_dir = PathBuf::from(&release.name);
    write_manifests(&release, output_dir, &mut show_only)
}

/// Split `release`'s manifest and write each attributable document
pub fn write_manifests(
    release: &StoredRelease,
    output_dir: PathBuf,
    show_only: &mut ShowOnly,
) -> Result<Vec<PathBuf>> {
    let manifest = format!("{}\n", release.manifest.trim());
    let mut writer = ManifestWriter::new(output_dir);

    for document in split_manifests(&manifest) {
        let Some(source) = SourcePath::find(&document) else {
            tracing::debug!("skipping document without a source annotation");
            continue;
        };

        if !show_only.allows(&source) {
            tracing::debug!(source = %source, "skipping document excluded by --show-only");
            continue;
        }

        writer.write(&source, &document)?;
    }

    for selector in show_only.unmatched() {
        tracing::warn!(
            "--show-only {} matched no template in release {}",
            selector,
            release.name
        );
    }

    Ok(writer.written().to_vec())
}
