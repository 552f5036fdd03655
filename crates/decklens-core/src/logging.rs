//! Tracing initialization for the batch binary.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Filter resolution: the `DECKLENS_LOG` environment variable, falling
/// back to `default_filter`. Calling this more than once is harmless; only
/// the first call installs a subscriber.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_env("DECKLENS_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
