//! Cursor process and machine-identity operations.
//!
//! These commands return their values directly (no `{status, data, msg}`
//! envelope): the bridge either hands back the raw result or rejects with a
//! diagnostic. Several patching commands refuse to touch Cursor while it is
//! running; their busy diagnostics are rewritten into one fixed actionable
//! message via [`rewrite_cursor_busy`].

use std::time::{Duration, Instant};

use serde_json::json;

use crate::client::PoolClient;
use crate::error::{
    rewrite_cursor_busy, ApiError, ApiResult, CURSOR_RUNNING_DIAGNOSTIC,
    CURSOR_RUNNING_SWITCH_DIAGNOSTIC,
};
use crate::types::MachineIds;

/// Raised when the bridge reports a completed account switch that did not
/// actually take effect.
const SWITCH_ACCOUNT_FAILED: &str = "切换账户失败";

impl PoolClient {
    /// Regenerates Cursor's machine identifiers.
    ///
    /// `machine_id: None` sends JSON null and lets the bridge generate a
    /// fresh identifier.
    pub async fn reset_machine_id(
        &self,
        force_kill: bool,
        machine_id: Option<&str>,
    ) -> ApiResult<bool> {
        self.call_raw(
            "reset_machine_id",
            json!({ "forceKill": force_kill, "machineId": machine_id }),
            "重置机器码失败",
        )
        .await
    }

    /// Switches the local Cursor installation to the given pool account.
    ///
    /// The bridge reports completion as a boolean; anything but exactly
    /// `true` is a failure. A busy diagnostic is rewritten into the fixed
    /// close-or-kill instruction.
    pub async fn switch_account(
        &self,
        email: &str,
        token: &str,
        force_kill: bool,
    ) -> ApiResult<()> {
        let switched: bool = self
            .call_raw(
                "switch_account",
                json!({ "email": email, "token": token, "forceKill": force_kill }),
                SWITCH_ACCOUNT_FAILED,
            )
            .await
            .map_err(|err| rewrite_cursor_busy(err, CURSOR_RUNNING_SWITCH_DIAGNOSTIC))?;
        if switched {
            Ok(())
        } else {
            Err(ApiError::Api {
                message: SWITCH_ACCOUNT_FAILED.to_string(),
            })
        }
    }

    /// Reads the machine identifiers Cursor currently reports.
    pub async fn get_machine_ids(&self) -> ApiResult<MachineIds> {
        self.call_raw("get_machine_ids", serde_json::Value::Null, "获取机器码失败")
            .await
    }

    /// Reports whether a Cursor process is currently running.
    pub async fn check_cursor_running(&self) -> ApiResult<bool> {
        self.call_raw(
            "check_cursor_running",
            serde_json::Value::Null,
            "检查Cursor状态失败",
        )
        .await
    }

    /// Force-terminates every running Cursor process.
    pub async fn kill_cursor_process(&self) -> ApiResult<()> {
        self.call_raw(
            "kill_cursor_process",
            serde_json::Value::Null,
            "终止Cursor进程失败",
        )
        .await
    }

    /// Reports whether the bridge runs with administrator privileges.
    pub async fn check_admin_privileges(&self) -> ApiResult<bool> {
        self.call_raw(
            "check_admin_privileges",
            serde_json::Value::Null,
            "检查管理员权限失败",
        )
        .await
    }

    /// Patches Cursor's updater so it stops self-updating.
    pub async fn disable_cursor_update(&self, force_kill: bool) -> ApiResult<()> {
        self.call_raw(
            "disable_cursor_update",
            json!({ "forceKill": force_kill }),
            "禁用自动更新失败",
        )
        .await
        .map_err(|err| rewrite_cursor_busy(err, CURSOR_RUNNING_DIAGNOSTIC))
    }

    /// Undoes [`disable_cursor_update`](Self::disable_cursor_update).
    pub async fn restore_cursor_update(&self) -> ApiResult<()> {
        self.call_raw(
            "restore_cursor_update",
            serde_json::Value::Null,
            "恢复自动更新失败",
        )
        .await
        .map_err(|err| rewrite_cursor_busy(err, CURSOR_RUNNING_DIAGNOSTIC))
    }

    /// Reports whether the request hook is already injected into Cursor.
    pub async fn check_hook_installed(&self) -> ApiResult<bool> {
        self.call_raw(
            "check_hook_installed",
            serde_json::Value::Null,
            "检查注入状态失败",
        )
        .await
    }

    /// Injects the request hook into Cursor's main.js.
    pub async fn apply_hook(&self, force_kill: bool) -> ApiResult<()> {
        self.call_raw("apply_hook", json!({ "forceKill": force_kill }), "注入失败")
            .await
            .map_err(|err| rewrite_cursor_busy(err, CURSOR_RUNNING_DIAGNOSTIC))
    }

    /// Restores Cursor's original main.js from backup.
    pub async fn restore_hook(&self, force_kill: bool) -> ApiResult<()> {
        self.call_raw(
            "restore_hook",
            json!({ "forceKill": force_kill }),
            "恢复注入失败",
        )
        .await
        .map_err(|err| rewrite_cursor_busy(err, CURSOR_RUNNING_DIAGNOSTIC))
    }

    /// Reports whether the bridge host is Windows.
    pub async fn check_is_windows(&self) -> ApiResult<bool> {
        self.call_raw(
            "check_is_windows",
            serde_json::Value::Null,
            "检查系统平台失败",
        )
        .await
    }

    /// Asks Cursor to close gracefully.
    pub async fn close_cursor(&self) -> ApiResult<bool> {
        self.call_raw("close_cursor", serde_json::Value::Null, "关闭Cursor失败")
            .await
    }

    /// Launches Cursor.
    pub async fn launch_cursor(&self) -> ApiResult<bool> {
        self.call_raw("launch_cursor", serde_json::Value::Null, "启动Cursor失败")
            .await
    }

    /// Waits until no Cursor process is running, using the configured poll
    /// interval and deadline.
    pub async fn wait_for_cursor_close(&self) -> ApiResult<()> {
        self.wait_for_cursor_close_within(self.close_timeout).await
    }

    /// Waits until no Cursor process is running, polling once per configured
    /// interval with `timeout` as the deadline.
    ///
    /// The first liveness check happens immediately, so an already-closed
    /// Cursor resolves without sleeping. The deadline is checked after each
    /// poll; at most one interval of overshoot is possible. A failed
    /// liveness check propagates immediately.
    pub async fn wait_for_cursor_close_within(&self, timeout: Duration) -> ApiResult<()> {
        tracing::debug!(
            interval = ?self.poll_interval,
            ?timeout,
            "waiting for Cursor process to close"
        );
        let start = Instant::now();
        loop {
            if !self.check_cursor_running().await? {
                return Ok(());
            }
            if start.elapsed() >= timeout {
                return Err(ApiError::CloseTimeout);
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
