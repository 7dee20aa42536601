//! Client bindings for the bridge daemon: one async method per backend
//! command.
//!
//! Every operation goes through the same two-step pipeline implemented once
//! in this module: invoke the command over the [`Bridge`], then normalize
//! the raw result. Operations differ only in their command name, argument
//! object, unwrap strategy ([`PoolClient::call`] for enveloped web-API
//! results, [`PoolClient::call_raw`] for direct values) and fixed fallback
//! message. There is exactly one bridge invocation per operation: no
//! retries, no caching, no shared state between calls.
//!
//! The operations are grouped by area:
//! - `account`: registration, login, account profile, quota
//! - `cursor`: Cursor process control, machine ids, update/hook patching
//! - `app`: backend metadata (version, announcements, disclaimer, bug reports)

mod account;
mod app;
mod cursor;

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::bridge::{Bridge, SocketBridge};
use crate::config::schema::{self, ClientConfig};
use crate::error::{ApiError, ApiResult};
use crate::response::ApiResponse;

/// Handle for invoking backend commands through the bridge daemon.
///
/// Safe to share across tasks; no method takes `&mut self`.
pub struct PoolClient {
    /// The opaque native command layer.
    bridge: Arc<dyn Bridge>,
    /// Liveness poll interval for `wait_for_cursor_close`, snapshot from config.
    pub(crate) poll_interval: Duration,
    /// Deadline for `wait_for_cursor_close`, snapshot from config.
    pub(crate) close_timeout: Duration,
}

impl PoolClient {
    /// Creates a client speaking to the bridge daemon's Unix socket, with
    /// the socket path and timing taken from `config`.
    pub fn new(config: &ClientConfig) -> Self {
        let request_timeout = schema::parse_duration_field(
            "request_timeout",
            &config.request_timeout,
            schema::DEFAULT_REQUEST_TIMEOUT,
        );
        let mut bridge = SocketBridge::new(config.resolve_socket_path());
        if !request_timeout.is_zero() {
            bridge = bridge.with_request_timeout(request_timeout);
        }
        Self::with_bridge(Arc::new(bridge), config)
    }

    /// Creates a client over an arbitrary [`Bridge`] implementation.
    ///
    /// Timing still comes from `config`; only the transport is swapped.
    pub fn with_bridge(bridge: Arc<dyn Bridge>, config: &ClientConfig) -> Self {
        Self {
            bridge,
            poll_interval: schema::parse_duration_field(
                "poll_interval",
                &config.poll_interval,
                schema::DEFAULT_POLL_INTERVAL,
            ),
            close_timeout: schema::parse_duration_field(
                "close_timeout",
                &config.close_timeout,
                schema::DEFAULT_CLOSE_TIMEOUT,
            ),
        }
    }

    /// Invokes an enveloped web-API command and normalizes its
    /// `{status, data, msg}` envelope into the payload.
    pub(crate) async fn call<T>(
        &self,
        cmd: &str,
        args: serde_json::Value,
        fallback: &str,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let raw = self.invoke(cmd, args, fallback).await?;
        let envelope: ApiResponse<T> =
            serde_json::from_value(raw).map_err(|cause| shape_error(cmd, fallback, cause))?;
        envelope.into_data()
    }

    /// Invokes a command whose raw result is the value itself (boolean,
    /// void, or plain object) rather than an envelope.
    pub(crate) async fn call_raw<T>(
        &self,
        cmd: &str,
        args: serde_json::Value,
        fallback: &str,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let raw = self.invoke(cmd, args, fallback).await?;
        serde_json::from_value(raw).map_err(|cause| shape_error(cmd, fallback, cause))
    }

    async fn invoke(
        &self,
        cmd: &str,
        args: serde_json::Value,
        fallback: &str,
    ) -> ApiResult<serde_json::Value> {
        self.bridge
            .invoke(cmd, args)
            .await
            .map_err(|err| ApiError::from_bridge(fallback, err))
    }
}

/// Result value did not have the shape the operation expects.
fn shape_error(cmd: &str, fallback: &str, cause: serde_json::Error) -> ApiError {
    tracing::warn!(cmd, %cause, "unexpected result shape from bridge");
    ApiError::Invoke {
        message: fallback.to_string(),
    }
}
