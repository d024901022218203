//! Routing `tracing` events somewhere useful.

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Install a global subscriber that writes events to stderr, filtered by the
/// `RUST_LOG` environment variable.
///
/// Only the first call in a process has any effect, so components may call
/// this whenever they are created.
pub fn initialize_logger() {
    let _ = Registry::default()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().without_time().with_writer(std::io::stderr))
        .try_init();
}
