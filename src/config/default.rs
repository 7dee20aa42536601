//! Default configuration template and file creation utilities.
//!
//! Provides a commented TOML template that matches `ClientConfig::default()`
//! and functions to write it to the XDG config path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

/// A commented TOML template with all default values.
///
/// Every value here must match `ClientConfig::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Cursor Pool client configuration
#
# This file was auto-generated with default values.
# All values shown below are the built-in defaults.
#
# Location: $XDG_CONFIG_HOME/cursor-pool/config.toml

# Path of the bridge daemon's Unix socket.
# Empty means automatic resolution: $CURSOR_POOL_SOCKET if set, otherwise
# $XDG_RUNTIME_DIR/cursor-pool.sock (falling back to /tmp).
# A leading ~ expands to your home directory.
socket_path = ""

# How often to re-check whether Cursor is still running while waiting for
# it to close. Human-readable duration, e.g. "500ms", "1s".
poll_interval = "500ms"

# How long to wait for Cursor to close before giving up.
close_timeout = "10s"

# Deadline for a single bridge invocation (connect through reply).
# "0s" disables the deadline.
request_timeout = "30s"
"#;

/// Writes the default configuration template to the given path.
///
/// Fails with `ConfigError::AlreadyExists` if the file is already there.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::WriteError {
            path: path.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|source| ConfigError::WriteError {
        path: path.to_path_buf(),
        source,
    })
}

/// Creates the default configuration file at the XDG location.
///
/// Returns the path written on success.
pub fn create_default_config() -> Result<PathBuf, ConfigError> {
    let dir = xdg::ensure_config_dir().map_err(|source| ConfigError::WriteError {
        path: xdg::config_dir(),
        source,
    })?;
    let path = dir.join("config.toml");
    write_default_config(&path)?;
    Ok(path)
}
