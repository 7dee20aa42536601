//! Response envelope normalization for backend web-API commands.
//!
//! Every web-API command resolves to the same envelope shape:
//!
//! ```json
//! { "status": 200, "data": { ... }, "msg": "ok" }
//! ```
//!
//! [`ApiResponse::into_data`] collapses that envelope into a plain
//! `Result<T, ApiError>` so callers never see status codes.

use crate::error::ApiError;

/// Envelope status value that means success.
pub const STATUS_OK: u16 = 200;

/// Message surfaced for a failed envelope that carries no `msg`.
pub const API_REQUEST_FAILED: &str = "API request failed";

/// The backend's response envelope.
///
/// `data` and `msg` are both optional on the wire; a success without `data`
/// is legal and normalizes to `T::default()`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ApiResponse<T> {
    /// Backend status code. `200` is success, anything else is failure.
    pub status: u16,
    /// Payload, present on most successful responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message, usually present on failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Normalizes the envelope into a plain result.
    ///
    /// - status `200` yields the payload, or `T::default()` when the backend
    ///   sent none.
    /// - any other status yields [`ApiError::Api`] with the backend's `msg`,
    ///   or [`API_REQUEST_FAILED`] when the backend sent no message either.
    pub fn into_data(self) -> Result<T, ApiError>
    where
        T: Default,
    {
        if self.status == STATUS_OK {
            Ok(self.data.unwrap_or_default())
        } else {
            Err(ApiError::Api {
                message: self
                    .msg
                    .unwrap_or_else(|| API_REQUEST_FAILED.to_string()),
            })
        }
    }
}
