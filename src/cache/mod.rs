//! Named key-value caches with JSON file persistence.

pub mod log;
pub mod named_cache;

pub use log::{CacheLog, TracingLog};
pub use named_cache::NamedCache;
