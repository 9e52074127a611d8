//! Tracing subscriber setup.
//!
//! ```ignore
//! collectives_core::logging::init("collectives=info");
//! tracing::info!("ready");
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber: `RUST_LOG` when set, otherwise
/// `default_directive`, formatted to stderr.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init("debug");
        init("info");
        tracing::info!("logging initialized");
    }
}
