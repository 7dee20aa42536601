//! Platform-aware path resolution for cursor-pool.
//!
//! On **Linux**, follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/cursor-pool` or `~/.config/cursor-pool`
//! - Runtime/socket: `$XDG_RUNTIME_DIR` or `/tmp`
//!
//! On **macOS**, uses Apple conventions with XDG env var overrides:
//! - Config: `$XDG_CONFIG_HOME/cursor-pool` or `~/Library/Application Support/cursor-pool`
//! - Runtime/socket: `$XDG_RUNTIME_DIR` or `$TMPDIR` or `/tmp`

use std::fs;
use std::path::PathBuf;

const APP_NAME: &str = "cursor-pool";

/// Returns the configuration directory for cursor-pool.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/cursor-pool` (if env var set, any platform)
/// 2. Platform default:
///    - Linux: `~/.config/cursor-pool`
///    - macOS: `~/Library/Application Support/cursor-pool`
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    platform_config_dir().join(APP_NAME)
}

/// Platform-native config base directory (without XDG override).
fn platform_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support
        dirs::config_dir().expect("could not determine config directory")
    }
    #[cfg(not(target_os = "macos"))]
    {
        // ~/.config (XDG default on Linux)
        dirs::home_dir()
            .expect("could not determine home directory")
            .join(".config")
    }
}

/// Returns the path to the main configuration file.
///
/// Resolves to `config_dir()/config.toml`.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns the runtime directory for transient files (sockets, pid files).
///
/// Resolution order:
/// 1. `$XDG_RUNTIME_DIR` (if set, any platform)
/// 2. Platform default:
///    - Linux: `/tmp` (XDG_RUNTIME_DIR is usually set by systemd)
///    - macOS: `$TMPDIR` or `/tmp`
pub fn runtime_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_RUNTIME_DIR") {
        return PathBuf::from(xdg);
    }
    platform_runtime_dir()
}

/// Platform-native runtime directory (without XDG override).
fn platform_runtime_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        // TMPDIR points at a per-user secure directory on macOS.
        std::env::var("TMPDIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
    #[cfg(not(target_os = "macos"))]
    {
        PathBuf::from("/tmp")
    }
}

/// Returns the default path of the bridge daemon's Unix socket.
///
/// Resolves to `runtime_dir()/cursor-pool.sock`.
pub fn socket_path() -> PathBuf {
    runtime_dir().join(format!("{APP_NAME}.sock"))
}

/// Expands a leading `~` in a path string to the user's home directory.
///
/// If the path does not start with `~`, it is returned as-is.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = dirs::home_dir().expect("could not determine home directory");
        home.join(rest)
    } else if path == "~" {
        dirs::home_dir().expect("could not determine home directory")
    } else {
        PathBuf::from(path)
    }
}

/// Creates the configuration directory (mode 0700) if missing, returning its path.
pub fn ensure_config_dir() -> std::io::Result<PathBuf> {
    let dir = config_dir();
    fs::create_dir_all(&dir)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o700))?;
    }
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper: run a closure with env vars temporarily set, then restore.
    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let originals: Vec<_> = vars
            .iter()
            .map(|(k, _)| (*k, std::env::var(k).ok()))
            .collect();

        for (k, v) in vars {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        f();

        for (k, original) in &originals {
            match original {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_path_with_xdg_override() {
        with_env(&[("XDG_CONFIG_HOME", Some("/custom/config"))], || {
            assert_eq!(
                config_path(),
                PathBuf::from("/custom/config/cursor-pool/config.toml")
            );
        });
    }

    #[test]
    #[serial]
    fn test_config_dir_falls_back_to_platform_default() {
        with_env(&[("XDG_CONFIG_HOME", None)], || {
            let dir = config_dir();
            assert!(
                dir.ends_with("cursor-pool"),
                "config dir should end with the app name: {dir:?}"
            );
        });
    }

    #[test]
    #[serial]
    fn test_socket_path_honors_runtime_dir() {
        with_env(&[("XDG_RUNTIME_DIR", Some("/run/user/1000"))], || {
            assert_eq!(
                socket_path(),
                PathBuf::from("/run/user/1000/cursor-pool.sock")
            );
        });
    }

    #[test]
    #[serial]
    fn test_socket_path_without_runtime_dir() {
        with_env(&[("XDG_RUNTIME_DIR", None), ("TMPDIR", None)], || {
            let path = socket_path();
            assert!(
                path.ends_with("cursor-pool.sock"),
                "socket file name should be fixed: {path:?}"
            );
        });
    }

    #[test]
    fn test_expand_tilde_prefix() {
        let expanded = expand_tilde("~/pool.sock");
        assert!(
            !expanded.to_string_lossy().starts_with('~'),
            "tilde should be expanded: {expanded:?}"
        );
        assert!(expanded.ends_with("pool.sock"));
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(
            expand_tilde("/tmp/pool.sock"),
            PathBuf::from("/tmp/pool.sock")
        );
    }
}
