//! Named key-value cache persisted as one JSON document per cache name.
//!
//! Backing file is `data/.mcache_<name>.json`. Construction warm-starts from
//! the file when one exists; a missing or corrupt file never blocks startup.
//! Mutations stay in memory until an explicit [`NamedCache::save`], which
//! replaces the file atomically (write to a temp file, then rename).

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::cache::log::{CacheLog, TracingLog};
use crate::error::{CacheError, Result};

/// Directory holding every cache's backing file.
const DATA_DIR: &str = "data";
/// Filename literals kept for compatibility with existing cache files.
const FILE_PREFIX: &str = ".mcache_";
const FILE_SUFFIX: &str = ".json";

/// On-disk document: a bare JSON object, key per cache entry.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct CacheStore {
    entries: Map<String, Value>,
}

/// A named in-memory mapping from string keys to JSON values, backed by one
/// JSON file on disk.
///
/// `get` is a plain lookup and never fails; an absent key and a stored JSON
/// `null` are indistinguishable to callers (both report `None`). `put` only
/// mutates memory. Persistence happens exactly when `save` is called — there
/// is no autosave and no flush on drop, so mutations made after the last
/// `save` are lost when the cache is dropped.
///
/// Not synchronized: two instances for the same name are independent copies,
/// and concurrent saves race with the last writer's full mapping winning.
/// Callers needing cross-instance or cross-process safety must serialize
/// access themselves.
pub struct NamedCache {
    name: String,
    path: PathBuf,
    store: CacheStore,
    log: Box<dyn CacheLog>,
}

impl NamedCache {
    /// Create a cache backed by `data/.mcache_<name>.json`, warm-starting
    /// from that file when it exists.
    pub fn new(name: impl Into<String>) -> Self {
        Self::build(Path::new(DATA_DIR), name.into(), Box::new(TracingLog))
    }

    /// Like [`NamedCache::new`] with an injected log sink.
    pub fn with_log(name: impl Into<String>, log: Box<dyn CacheLog>) -> Self {
        Self::build(Path::new(DATA_DIR), name.into(), log)
    }

    /// Create a cache whose backing file lives under `dir` instead of
    /// `data/` (for tests and embedders that relocate their state).
    pub fn in_dir(dir: impl AsRef<Path>, name: impl Into<String>) -> Self {
        Self::build(dir.as_ref(), name.into(), Box::new(TracingLog))
    }

    /// Like [`NamedCache::in_dir`] with an injected log sink.
    pub fn in_dir_with_log(
        dir: impl AsRef<Path>,
        name: impl Into<String>,
        log: Box<dyn CacheLog>,
    ) -> Self {
        Self::build(dir.as_ref(), name.into(), log)
    }

    fn build(dir: &Path, name: String, log: Box<dyn CacheLog>) -> Self {
        let path = dir.join(format!("{FILE_PREFIX}{name}{FILE_SUFFIX}"));
        let mut cache = Self {
            name,
            path,
            store: CacheStore::default(),
            log,
        };
        // Best-effort warm start: any load failure leaves the store empty.
        if let Err(e) = cache.load() {
            debug!(target: "customrpc", cache = %cache.name, "starting empty: {e}");
        }
        cache
    }

    /// Replace the in-memory store wholesale with the backing file's
    /// contents.
    ///
    /// Unlike construction, a direct call propagates every failure: missing
    /// or unreadable file, malformed JSON, or a top-level value that is not
    /// an object.
    pub fn load(&mut self) -> Result<()> {
        let data = std::fs::read_to_string(&self.path).map_err(|e| CacheError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        let parsed: Value = serde_json::from_str(&data).map_err(|e| CacheError::Parse {
            path: self.path.clone(),
            source: e,
        })?;
        let Value::Object(entries) = parsed else {
            return Err(CacheError::NotAnObject {
                path: self.path.clone(),
            });
        };
        self.store.entries = entries;
        self.log.info(&format!(
            "Loaded cache {} ({})",
            self.name,
            self.path.display()
        ));
        Ok(())
    }

    /// Set `key` to `value`, overwriting any prior value. Memory only; the
    /// disk copy is untouched until the next `save`.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.store.entries.insert(key.into(), value.into());
    }

    /// Look up `key`. Returns `None` for an absent key or a stored JSON
    /// `null`; the two cases are deliberately not distinguishable.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self.store.entries.get(key) {
            Some(Value::Null) | None => None,
            found => found,
        }
    }

    /// Serialize the entire store and atomically replace the backing file.
    ///
    /// Fails if the backing directory does not exist or is not writable; the
    /// directory is never created implicitly. On success the previous file
    /// contents are fully replaced — a crash mid-save leaves the old file
    /// intact rather than a truncated one.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string(&self.store).map_err(|e| CacheError::Serialize {
            name: self.name.clone(),
            source: e,
        })?;
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| CacheError::Write {
            path: self.path.clone(),
            source: e,
        })?;
        tmp.write_all(json.as_bytes()).map_err(|e| CacheError::Write {
            path: self.path.clone(),
            source: e,
        })?;
        tmp.persist(&self.path).map_err(|e| CacheError::Write {
            path: self.path.clone(),
            source: e.error,
        })?;
        self.log.info(&format!(
            "Saved cache {} ({})",
            self.name,
            self.path.display()
        ));
        Ok(())
    }

    /// The cache's identifying name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the backing file derived from the name.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of keys currently held in memory, stored nulls included.
    pub fn len(&self) -> usize {
        self.store.entries.len()
    }

    /// Returns `true` if the in-memory store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.store.entries.is_empty()
    }
}
