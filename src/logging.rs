//! Logging initialization for the `cpc` binary.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `CURSOR_POOL_LOG` environment variable. Falls back to `info` level when
//! the variable is unset.
//!
//! # Usage
//!
//! ```bash
//! # Default (info level)
//! cpc status
//!
//! # Debug level
//! CURSOR_POOL_LOG=debug cpc status
//!
//! # Module-specific filtering
//! CURSOR_POOL_LOG=cursor_pool_client=debug,warn cpc status
//! ```

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads the `CURSOR_POOL_LOG` environment variable for filter directives.
/// Falls back to `info` level when the variable is unset or invalid.
///
/// Output is written to stderr so it never mixes with command results on
/// stdout.
///
/// # Panics
///
/// Panics if a global subscriber has already been set (should only be
/// called once, at startup).
pub fn init() {
    let filter = EnvFilter::try_from_env("CURSOR_POOL_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
