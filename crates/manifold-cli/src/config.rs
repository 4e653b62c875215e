//! Storage location and logging setup shared by all commands

use manifold_kube::{FileDriver, StorageConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the release storage directory
pub const STORAGE_DIR_ENV: &str = "MANIFOLD_STORAGE_DIR";

/// Default release storage directory
///
/// `<data dir>/manifold/releases`, or `./manifold/releases` when the platform
/// has no data directory.
pub fn default_storage_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("manifold")
        .join("releases")
}

/// Open the release storage
pub fn open_storage(storage_dir: Option<&Path>) -> FileDriver {
    let dir = storage_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(default_storage_dir);
    tracing::debug!(storage = %dir.display(), "using file storage");
    FileDriver::new(dir, StorageConfig::default())
}

/// Install the stderr log subscriber
///
/// `--debug` forces debug output; otherwise `RUST_LOG` is honoured and
/// falls back to warnings only.
pub fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
