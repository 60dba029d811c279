//! Module snapshot loading.
//!
//! The exporter never parses MIB sources itself. An upstream resolver
//! produces one JSON snapshot per module:
//!
//! ```text
//! {"module": "<NAME>", "nodes": [{"name", "oid", "kind", "syntax?", "description?"}, ...]}
//! ```
//!
//! Snapshots live as `<NAME>.json` files in a snapshot directory, so
//! exporters run without the MIB files being available.

use mibtab_core::Module;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Snapshot loading error.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Snapshot file could not be read.
    #[error("failed to read snapshot {}: {source}", .path.display())]
    Io {
        /// Path of the snapshot file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// Snapshot file is not a valid module document.
    #[error("invalid snapshot {}: {source}", .path.display())]
    Parse {
        /// Path of the snapshot file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Path of the snapshot for `module` inside `dir`.
#[must_use]
pub fn module_path(dir: &Path, module: &str) -> PathBuf {
    dir.join(format!("{module}.json"))
}

/// Load a module snapshot from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse as a
/// module document.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Module, SnapshotError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| SnapshotError::Parse {
        path: path.to_owned(),
        source,
    })
}
