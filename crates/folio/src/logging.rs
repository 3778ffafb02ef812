#![forbid(unsafe_code)]

//! Subscriber bootstrap for binaries.
//!
//! Library crates only emit events; applications call [`init`] once at
//! startup. The filter comes from `RUST_LOG` and falls back to
//! [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Build the filter from `RUST_LOG`, or `fallback` when it is unset or
/// invalid.
#[must_use]
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install a fmt subscriber writing to stderr.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init() -> bool {
    init_with(DEFAULT_FILTER)
}

/// Like [`init`] with a custom fallback filter.
pub fn init_with(fallback: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok()
}
