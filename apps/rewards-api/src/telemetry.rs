//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (from
/// `REWARDS_LOG`) is used.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();
}
