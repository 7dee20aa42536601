//! Cursor Pool client library
//!
//! This crate provides async bindings for every command exposed by the
//! Cursor Pool bridge daemon, plus the `cpc` command line front end. The
//! daemon owns the privileged work (web API access, Cursor process control,
//! machine-id and main.js patching); this crate is the thin boundary layer
//! that invokes commands over its Unix socket and normalizes the results.
//!
//! # Platform Support
//!
//! This crate currently supports **Unix-like systems only** (Linux, macOS):
//! the bridge transport is a Unix domain socket. The daemon itself may
//! manage a Cursor installation on any platform.

/// Transport to the bridge daemon: the [`Bridge`] trait and its Unix socket
/// implementation.
pub mod bridge;

/// One async method per backend command, grouped by area.
pub mod client;

/// Client configuration: file loading, defaults, socket path resolution.
pub mod config;

/// The error type every operation returns.
pub mod error;

/// Wire envelope for requests and replies on the bridge socket.
pub mod ipc;

/// Tracing subscriber setup for the `cpc` binary.
pub mod logging;

/// The `{status, data, msg}` web-API envelope and its normalization.
pub mod response;

/// Payload types carried by the operations.
pub mod types;

pub use bridge::{Bridge, BridgeError, SocketBridge};
pub use client::PoolClient;
pub use config::schema::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use ipc::{IpcReply, IpcRequest, PROTOCOL_VERSION};
pub use response::ApiResponse;
pub use types::{
    ActivateResult, AuthResult, CheckUserResult, DisclaimerInfo, MachineIds, NoticeProps,
    PooledAccount, PublicInfo, UsageInfo, UserInfo, VersionInfo,
};
