//! Tracing subscriber bootstrap for embedding shells.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global JSON subscriber, filtered by `RUST_LOG`.
///
/// Safe to call more than once: a subscriber that is already installed
/// (for example by a test harness) wins and the second call is ignored.
pub fn init() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init();
}
