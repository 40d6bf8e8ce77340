//! Crate error types.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CacheError>;

/// Failures surfaced by cache I/O.
///
/// Lookup misses are not errors (`get` returns `None`); only `load` and
/// `save` produce a `CacheError`.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The backing file could not be read (missing, permission denied, ...).
    #[error("failed to read cache file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but is not valid JSON.
    #[error("cache file {} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The backing file parsed, but its top-level value is not a JSON object.
    #[error("cache file {} does not contain a JSON object", .path.display())]
    NotAnObject { path: PathBuf },

    /// The in-memory store could not be serialized.
    #[error("failed to serialize cache {name}: {source}")]
    Serialize {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The backing file could not be written or replaced.
    #[error("failed to write cache file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
