//! The single error surface of the binding layer.
//!
//! Every operation fails with [`ApiError`]; its `Display` output is the
//! human-readable message shown to the user, with no codes beyond the text.

use crate::bridge::BridgeError;

/// Result alias used by every operation in this crate.
pub type ApiResult<T> = Result<T, ApiError>;

/// Diagnostic substring the backend emits when Cursor blocks an operation.
pub(crate) const CURSOR_RUNNING_DIAGNOSTIC: &str = "Cursor进程正在运行";

/// Fuller diagnostic emitted on a blocked account switch.
pub(crate) const CURSOR_RUNNING_SWITCH_DIAGNOSTIC: &str = "Cursor进程正在运行, 请先关闭Cursor";

/// Normalized operation error.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success envelope status.
    #[error("{message}")]
    Api {
        /// Backend `msg`, or the fixed envelope fallback.
        message: String,
    },

    /// The invocation itself failed: the bridge refused it, or the transport
    /// broke underneath it.
    #[error("{message}")]
    Invoke {
        /// Bridge diagnostic (preserved verbatim) or the fixed
        /// operation-specific fallback.
        message: String,
    },

    /// Cursor is still running and blocks the requested operation.
    #[error("请先关闭Cursor, 或选择强制终止Cursor进程")]
    CursorRunning,

    /// [`wait_for_cursor_close`](crate::client::PoolClient::wait_for_cursor_close)
    /// hit its deadline while Cursor kept running.
    #[error("operation timed out waiting for process to close")]
    CloseTimeout,
}

impl ApiError {
    /// Maps a bridge failure into the operation error.
    ///
    /// A rejection carries a backend-authored message and keeps it verbatim
    /// (the busy-process diagnostics travel this path). Transport failures
    /// have no message worth showing; they surface the operation's fixed
    /// fallback and the cause goes to the log.
    pub(crate) fn from_bridge(fallback: &str, err: BridgeError) -> Self {
        match err {
            BridgeError::Rejected { message } => ApiError::Invoke { message },
            other => {
                tracing::warn!(cause = %other, "bridge invocation failed");
                ApiError::Invoke {
                    message: fallback.to_string(),
                }
            }
        }
    }

    /// True when the failure is the busy-process rewrite, letting callers
    /// offer a force-terminate retry.
    pub fn is_cursor_running(&self) -> bool {
        matches!(self, ApiError::CursorRunning)
    }
}

/// Rewrites a caught error into [`ApiError::CursorRunning`] when its message
/// contains the given busy-process diagnostic.
///
/// This is the only place the diagnostic text is interpreted; everything
/// else in the crate treats error messages as opaque.
pub(crate) fn rewrite_cursor_busy(err: ApiError, diagnostic: &str) -> ApiError {
    match &err {
        ApiError::Api { message } | ApiError::Invoke { message }
            if message.contains(diagnostic) =>
        {
            ApiError::CursorRunning
        }
        _ => err,
    }
}
