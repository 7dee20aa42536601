//! Payload types carried by backend responses.
//!
//! These structs define this crate's contract with the bridge: camelCase
//! keys on the wire, unknown fields ignored, missing optional fields
//! defaulted. Every payload implements `Default` because a successful
//! envelope without `data` normalizes to the default value.

use serde::{Deserialize, Serialize};

/// Result of `check_user_exists`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckUserResult {
    /// Whether an account is already registered for the queried email.
    pub exists: bool,
}

/// Credential returned by `login` and `register`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResult {
    /// API token to pass to the account-scoped operations.
    pub token: String,
}

/// Account profile returned by `get_user_info`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// Display name of the account.
    pub username: String,

    /// Membership level (0 = free tier).
    pub level: u32,

    /// Total request quota granted to the account.
    pub total_count: i64,

    /// Requests already consumed.
    pub used_count: i64,

    /// Backend-formatted expiry timestamp, kept opaque.
    #[serde(default)]
    pub expire_time: String,

    /// Whether the membership has lapsed.
    pub is_expired: bool,
}

impl UserInfo {
    /// Quota still available, never negative.
    pub fn remaining_count(&self) -> i64 {
        (self.total_count - self.used_count).max(0)
    }
}

/// A ready-to-use account handed out of the pool by `get_pooled_account`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PooledAccount {
    /// Email of the pooled account.
    pub email: String,

    /// Session token for the pooled account.
    pub token: String,

    /// Requests already consumed on this account.
    #[serde(default)]
    pub used_count: i64,
}

/// Per-tier usage counters returned by `get_usage`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsageInfo {
    /// Premium (fast) requests consumed.
    pub premium_used: i64,

    /// Premium request cap, `None` when unmetered.
    #[serde(default)]
    pub premium_limit: Option<i64>,

    /// Standard requests consumed.
    pub standard_used: i64,

    /// Standard request cap, `None` when unmetered.
    #[serde(default)]
    pub standard_limit: Option<i64>,
}

/// Operator announcement returned by `get_public_info`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublicInfo {
    /// Announcement kind (e.g. `"info"`, `"warning"`).
    #[serde(rename = "type")]
    pub kind: String,

    /// How the client may dismiss it (e.g. `"close"`, `"never"`).
    #[serde(default)]
    pub close_type: String,

    /// Announcement content.
    #[serde(default)]
    pub props: NoticeProps,
}

/// Content block of an announcement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NoticeProps {
    /// Announcement title.
    pub name: String,

    /// HTML body.
    pub html: String,
}

/// Release metadata returned by `get_version`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    /// Latest released client version.
    pub version: String,

    /// Whether older clients must update before continuing.
    pub force_update: bool,

    /// Where to fetch the release.
    #[serde(default)]
    pub download_url: String,

    /// Human-readable release notes.
    #[serde(default)]
    pub change_log: String,
}

/// Result of `activate_license`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivateResult {
    /// New expiry timestamp after activation, backend-formatted.
    #[serde(default)]
    pub expire_time: String,

    /// Membership level granted by the activation code.
    pub level: u32,
}

/// Cursor's telemetry identifiers, returned raw by `get_machine_ids`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MachineIds {
    /// `telemetry.machineId`.
    pub machine_id: String,

    /// `telemetry.macMachineId`.
    pub mac_machine_id: String,

    /// `telemetry.devDeviceId`.
    pub dev_device_id: String,

    /// `telemetry.sqmId`.
    pub sqm_id: String,
}

/// Disclaimer text returned by `get_disclaimer`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisclaimerInfo {
    /// Markdown body the UI must show before first use.
    pub content: String,
}
