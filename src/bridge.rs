//! Transport to the bridge daemon, the opaque native command layer.
//!
//! The binding layer never interprets command results here; it hands the
//! command name plus a flat argument object to [`Bridge::invoke`] and gets
//! back either the raw result value or a rejection carrying the bridge's
//! diagnostic text. [`SocketBridge`] is the production implementation: one
//! Unix socket connection per invocation (connect, write one JSON line,
//! read one JSON line), which keeps every invocation fully independent.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::UnixStream;

use crate::ipc::{IpcReply, IpcRequest, UNKNOWN_ERROR};

/// Transport failure while invoking a bridge command.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// Could not reach the bridge daemon's socket.
    #[error("failed to connect to bridge socket {path:?}: {source}")]
    Connect {
        /// Socket path that was tried.
        path: PathBuf,
        /// Underlying connection error.
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing the connection failed mid-invocation.
    #[error("bridge I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The bridge closed the connection before sending a reply.
    #[error("bridge closed the connection before replying")]
    Closed,

    /// The reply line was not a valid reply envelope.
    #[error("malformed bridge reply: {source}")]
    Decode {
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// No reply arrived within the configured per-request deadline.
    #[error("bridge did not reply within {limit:?}")]
    Timeout {
        /// The deadline that was exceeded.
        limit: Duration,
    },

    /// The bridge refused the invocation and said why.
    #[error("{message}")]
    Rejected {
        /// Diagnostic text authored by the bridge or the backend.
        message: String,
    },
}

/// The native command layer as seen by the binding layer.
///
/// One call maps to exactly one command invocation; implementations must not
/// retry. The raw result value is passed through uninterpreted.
#[async_trait]
pub trait Bridge: Send + Sync {
    /// Invokes `cmd` with the given flat argument object.
    async fn invoke(
        &self,
        cmd: &str,
        args: serde_json::Value,
    ) -> Result<serde_json::Value, BridgeError>;
}

/// Production transport: JSON lines over the bridge daemon's Unix socket.
#[derive(Debug, Clone)]
pub struct SocketBridge {
    /// Socket the bridge daemon listens on.
    socket_path: PathBuf,
    /// Optional whole-invocation deadline (connect through reply).
    request_timeout: Option<Duration>,
}

impl SocketBridge {
    /// Creates a bridge transport for the given socket path.
    pub fn new(socket_path: impl Into<PathBuf>) -> Self {
        Self {
            socket_path: socket_path.into(),
            request_timeout: None,
        }
    }

    /// Sets a deadline covering the whole invocation round trip.
    pub fn with_request_timeout(mut self, limit: Duration) -> Self {
        self.request_timeout = Some(limit);
        self
    }

    /// The socket path this transport connects to.
    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    async fn round_trip(&self, request: &IpcRequest) -> Result<IpcReply, BridgeError> {
        let mut stream =
            UnixStream::connect(&self.socket_path)
                .await
                .map_err(|source| BridgeError::Connect {
                    path: self.socket_path.clone(),
                    source,
                })?;

        stream.write_all(request.to_json_line().as_bytes()).await?;
        stream.flush().await?;

        let mut reader = BufReader::new(stream);
        let mut line = String::new();
        let bytes = reader.read_line(&mut line).await?;
        if bytes == 0 {
            return Err(BridgeError::Closed);
        }

        serde_json::from_str(line.trim()).map_err(|source| BridgeError::Decode { source })
    }
}

#[async_trait]
impl Bridge for SocketBridge {
    async fn invoke(
        &self,
        cmd: &str,
        args: serde_json::Value,
    ) -> Result<serde_json::Value, BridgeError> {
        let request = IpcRequest::new(cmd, args);
        tracing::debug!(cmd, "invoking bridge command");

        let reply = match self.request_timeout {
            Some(limit) => tokio::time::timeout(limit, self.round_trip(&request))
                .await
                .map_err(|_| BridgeError::Timeout { limit })??,
            None => self.round_trip(&request).await?,
        };

        if reply.ok {
            Ok(reply.data.unwrap_or(serde_json::Value::Null))
        } else {
            let message = reply.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string());
            tracing::debug!(cmd, %message, "bridge rejected command");
            Err(BridgeError::Rejected { message })
        }
    }
}
