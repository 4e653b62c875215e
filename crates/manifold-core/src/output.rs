//! Writing manifest documents to per-template files

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use crate::error::{CoreError, Result};
use crate::manifest::SourcePath;

/// Permission mode for directories created under the output directory
pub const DIRECTORY_MODE: u32 = 0o755;

/// Writes documents under `output_dir`, one file per template
///
/// The first document written to a path during the lifetime of the writer
/// replaces any existing file; later documents for the same path are
/// appended after it.
#[derive(Debug)]
pub struct ManifestWriter {
    output_dir: PathBuf,
    written: HashSet<PathBuf>,
    order: Vec<PathBuf>,
}

impl ManifestWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            written: HashSet::new(),
            order: Vec::new(),
        }
    }

    /// Write one document, returning the file it went to
    pub fn write(&mut self, source: &SourcePath, document: &str) -> Result<PathBuf> {
        let relative = source.relative_path();
        ensure_contained(&relative, source)?;

        let path = self.output_dir.join(&relative);
        let append = self.written.contains(&path);

        if let Some(parent) = path.parent() {
            create_dir_all(parent).map_err(|e| write_error(parent, e))?;
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .append(append)
            .truncate(!append)
            .open(&path)
            .map_err(|e| write_error(&path, e))?;

        write!(
            file,
            "---\n# Source: {}\n{}\n",
            relative.display(),
            document
        )
        .map_err(|e| write_error(&path, e))?;

        tracing::debug!(path = %path.display(), append, "wrote manifest");

        if self.written.insert(path.clone()) {
            self.order.push(path.clone());
        }
        Ok(path)
    }

    /// Files written so far, in the order they were first created
    pub fn written(&self) -> &[PathBuf] {
        &self.order
    }
}

fn ensure_contained(relative: &Path, source: &SourcePath) -> Result<()> {
    let safe = relative.components().next().is_some()
        && relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

    if safe {
        Ok(())
    } else {
        Err(CoreError::UnsafeOutputPath {
            path: source.full_name(),
        })
    }
}

fn write_error(path: &Path, source: std::io::Error) -> CoreError {
    CoreError::Write {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(unix)]
fn create_dir_all(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new()
        .recursive(true)
        .mode(DIRECTORY_MODE)
        .create(path)
}

#[cfg(not(unix))]
fn create_dir_all(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}
