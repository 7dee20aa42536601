//! Wire types for the JSON Lines protocol spoken with the bridge daemon
//! over its Unix domain socket.

/// Bridge protocol version. Included in every message for forward/backward
/// compatibility.
pub const PROTOCOL_VERSION: u32 = 1;

/// Fallback message when a failed reply carries no error text.
pub(crate) const UNKNOWN_ERROR: &str = "unknown error";

/// A single command invocation sent to the bridge daemon.
///
/// Every message is a single JSON line:
/// `{"version": 1, "cmd": "login", "args": {...}}\n`
///
/// `args` is a flat JSON object keyed by camelCase parameter names; it is
/// omitted from the wire entirely for commands that take no arguments.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IpcRequest {
    /// Protocol version (must be [`PROTOCOL_VERSION`]).
    pub version: u32,
    /// Backend command name (e.g. `login`, `check_cursor_running`).
    pub cmd: String,
    /// Flat argument object, `Null` when the command takes none.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub args: serde_json::Value,
}

impl IpcRequest {
    /// Creates a request for the given command and argument object.
    pub fn new(cmd: impl Into<String>, args: serde_json::Value) -> Self {
        Self {
            version: PROTOCOL_VERSION,
            cmd: cmd.into(),
            args,
        }
    }

    /// Serializes to a JSON line (with trailing newline).
    pub fn to_json_line(&self) -> String {
        let json = serde_json::to_string(self).expect("failed to serialize IpcRequest");
        format!("{}\n", json)
    }
}

/// Reply envelope from the bridge daemon.
///
/// Sent as a single JSON line: `{"version": 1, "ok": true, ...}\n`
///
/// `ok: false` means the invocation itself was refused; `error` carries the
/// bridge's diagnostic text. `ok: true` hands the raw command result back in
/// `data` without interpreting it; for web-API commands that raw value is
/// in turn an [`ApiResponse`](crate::response::ApiResponse) envelope.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IpcReply {
    /// Protocol version.
    pub version: u32,
    /// Whether the invocation was accepted and executed.
    pub ok: bool,
    /// Diagnostic message when `ok` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Raw command result when `ok` is true (absent for void commands).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl IpcReply {
    /// Creates a success reply with an optional raw result.
    pub fn success(data: Option<serde_json::Value>) -> Self {
        Self {
            version: PROTOCOL_VERSION,
            ok: true,
            error: None,
            data,
        }
    }

    /// Creates a rejection reply with the given diagnostic message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            version: PROTOCOL_VERSION,
            ok: false,
            error: Some(message.into()),
            data: None,
        }
    }

    /// Serializes to a JSON line (with trailing newline).
    pub fn to_json_line(&self) -> String {
        let json = serde_json::to_string(self).expect("failed to serialize IpcReply");
        format!("{}\n", json)
    }
}
