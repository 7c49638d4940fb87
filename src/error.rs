//! Error types for the fallible edges of the crate.
//!
//! Classification itself is total: unsupported hardware becomes data
//! (`HardwareCategory::Incompatible`, tier F, advisories), never an error.
//! Only profile persistence can actually fail.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from saving a detected hardware profile to disk.
#[derive(Debug, Error)]
pub enum ProfileStoreError {
    /// The profile directory could not be created or written.
    #[error("failed to write profile to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The profile could not be serialized.
    #[error("failed to serialize profile: {0}")]
    Serialize(#[from] serde_json::Error),
}
