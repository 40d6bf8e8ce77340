//! mcache — named, file-backed JSON key-value caches.
//!
//! A [`NamedCache`] is an in-memory mapping from string keys to JSON values,
//! persisted as one JSON document per cache name under `data/`. Construction
//! warm-starts from the backing file when one exists; mutations stay in
//! memory until an explicit [`NamedCache::save`].
//!
//! ```no_run
//! use mcache::NamedCache;
//! use serde_json::json;
//!
//! let mut sessions = NamedCache::new("sessions");
//! sessions.put("alice", json!({"score": 42}));
//! assert_eq!(sessions.get("alice"), Some(&json!({"score": 42})));
//! sessions.save()?;
//! # Ok::<(), mcache::CacheError>(())
//! ```

pub mod cache;
pub mod crash;
pub mod error;
pub mod logging;

pub use cache::{CacheLog, NamedCache, TracingLog};
pub use crash::install_panic_hook;
pub use error::{CacheError, Result};
pub use logging::init_logging;
