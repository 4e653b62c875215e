//! Core error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("invalid release name {name:?}: {reason}")]
    InvalidReleaseName { name: String, reason: String },

    #[error("invalid namespace {namespace:?}: {reason}")]
    InvalidNamespace { namespace: String, reason: String },

    #[error("invalid --show-only selector {pattern:?}: {message}")]
    InvalidSelector { pattern: String, message: String },

    #[error("refusing to write outside the output directory: {path}")]
    UnsafeOutputPath { path: String },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
