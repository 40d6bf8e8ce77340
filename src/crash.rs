//! Panic reporting hook.
//!
//! Routes uncaught panics into the log stream with their payload, source
//! location, and a captured backtrace, so crashes in the embedding
//! application show up next to the cache's own log lines instead of only on
//! stderr. Observability only: unwinding behavior is unchanged.

use std::any::Any;
use std::backtrace::Backtrace;

use tracing::error;

/// Install a process-wide panic hook that logs panics through `tracing`.
///
/// The previously installed hook still runs afterwards, so the default
/// stderr report is preserved. Backtrace capture is forced regardless of
/// `RUST_BACKTRACE`.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let backtrace = Backtrace::force_capture();
        let location = info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());
        error!(
            target: "customrpc",
            %location,
            "uncaught panic: {}\n{backtrace}",
            payload_str(info.payload()),
        );
        previous(info);
    }));
}

/// Extract the human-readable message from a panic payload.
///
/// `panic!("literal")` carries a `&str`, formatted panics carry a `String`;
/// anything else is opaque.
fn payload_str(payload: &dyn Any) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "<non-string panic payload>"
    }
}
