//! Logging seam for cache load/save events.
//!
//! The cache reports successful loads and saves through a single-method sink
//! rather than a process-wide logger registry, so embedders can redirect or
//! silence the messages. Logging is side-effect-only: a sink that drops every
//! message changes nothing about cache behavior.

/// Receiver for the cache's informational messages.
pub trait CacheLog: Send + Sync {
    /// Record one informational message.
    fn info(&self, message: &str);
}

/// Default sink: forwards to `tracing` at info level.
///
/// Uses the fixed `customrpc` target so embedding applications can filter
/// cache chatter with `RUST_LOG=customrpc=...`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl CacheLog for TracingLog {
    fn info(&self, message: &str) {
        tracing::info!(target: "customrpc", "{message}");
    }
}
