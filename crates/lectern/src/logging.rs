//! Tracing subscriber setup for binaries and tests embedding the engine.

use tracing_subscriber::EnvFilter;

/// Installs an env-filtered fmt subscriber.
///
/// Defaults to `info` when `RUST_LOG` is unset. Safe to call more than once;
/// later calls are no-ops (tests init per-process).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
