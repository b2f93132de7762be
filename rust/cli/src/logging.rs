//! Tracing setup for the `pokeher` binary.
//!
//! Diagnostics go to stderr so command output on stdout stays clean. The
//! filter comes from `POKEHER_LOG` (same syntax as `RUST_LOG`) and defaults
//! to `warn`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

pub const LOG_ENV: &str = "POKEHER_LOG";
const DEFAULT_FILTER: &str = "warn";

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Calling it twice is harmless.
pub fn init_logging() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init_logging();
        init_logging();
        tracing::info!("logging initialised");
    }
}
