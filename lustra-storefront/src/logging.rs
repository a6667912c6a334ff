//! Logging Infrastructure
//!
//! Console logging setup for binaries and examples. Library code only
//! emits `tracing` events and never installs a subscriber itself.

use tracing_subscriber::EnvFilter;

/// Initialize console logging. `RUST_LOG` overrides the default level.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
