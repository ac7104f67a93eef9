//! Tracing bootstrap shared by the service binaries.

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global JSON subscriber, filtered by `RUST_LOG`.
///
/// Idempotent: a second call leaves the first subscriber in place.
pub fn init_tracing() {
    let _ = fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
