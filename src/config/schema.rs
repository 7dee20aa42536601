//! TOML configuration schema for the client.
//!
//! All fields have defaults via `#[serde(default)]`, so a missing file or an
//! empty file is as good as a fully populated one. Duration fields use
//! human-readable strings (e.g. `"500ms"`, `"10s"`) parsed by the
//! `humantime` crate; an unparsable value falls back to the built-in default
//! with a warning rather than failing the load.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::xdg;

/// Default liveness poll interval for `wait_for_cursor_close`.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Default deadline for `wait_for_cursor_close`.
pub const DEFAULT_CLOSE_TIMEOUT: Duration = Duration::from_secs(10);

/// Default per-invocation deadline on the bridge socket.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable overriding the bridge socket path.
pub const SOCKET_ENV: &str = "CURSOR_POOL_SOCKET";

/// Client configuration, the full `config.toml` structure.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Bridge daemon socket path. Empty means automatic resolution:
    /// `$CURSOR_POOL_SOCKET` if set, else the platform runtime directory.
    /// A leading `~` is expanded to the home directory.
    pub socket_path: String,

    /// Liveness poll interval for `wait_for_cursor_close` (e.g. `"500ms"`).
    pub poll_interval: String,

    /// Deadline for `wait_for_cursor_close` (e.g. `"10s"`).
    pub close_timeout: String,

    /// Per-invocation deadline on the bridge socket (e.g. `"30s"`).
    /// `"0s"` disables the deadline.
    pub request_timeout: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            socket_path: String::new(),
            poll_interval: "500ms".to_string(),
            close_timeout: "10s".to_string(),
            request_timeout: "30s".to_string(),
        }
    }
}

impl ClientConfig {
    /// Resolves the bridge socket path.
    ///
    /// Order: explicit `socket_path` value, then [`SOCKET_ENV`], then
    /// [`xdg::socket_path`].
    pub fn resolve_socket_path(&self) -> PathBuf {
        if !self.socket_path.is_empty() {
            return xdg::expand_tilde(&self.socket_path);
        }
        if let Ok(from_env) = std::env::var(SOCKET_ENV) {
            if !from_env.is_empty() {
                return xdg::expand_tilde(&from_env);
            }
        }
        xdg::socket_path()
    }
}

/// Parses a humantime duration field, falling back to `default` when the
/// value does not parse.
pub(crate) fn parse_duration_field(field: &str, value: &str, default: Duration) -> Duration {
    match humantime::parse_duration(value) {
        Ok(parsed) => parsed,
        Err(_) => {
            tracing::warn!(field, value, "unparsable duration, using default");
            default
        }
    }
}
