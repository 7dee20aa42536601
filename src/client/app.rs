//! Application metadata operations: announcements, version, disclaimer, and
//! bug reports. All enveloped web-API results.

use serde_json::json;

use crate::client::PoolClient;
use crate::error::ApiResult;
use crate::types::{DisclaimerInfo, PublicInfo, VersionInfo};

impl PoolClient {
    /// Fetches the current announcement and its display policy.
    pub async fn get_public_info(&self) -> ApiResult<PublicInfo> {
        self.call(
            "get_public_info",
            serde_json::Value::Null,
            "获取公告信息失败",
        )
        .await
    }

    /// Fetches the latest released version descriptor.
    pub async fn get_version(&self) -> ApiResult<VersionInfo> {
        self.call("get_version", serde_json::Value::Null, "获取版本信息失败")
            .await
    }

    /// Fetches the disclaimer text shown on first launch.
    pub async fn get_disclaimer(&self) -> ApiResult<DisclaimerInfo> {
        self.call(
            "get_disclaimer",
            serde_json::Value::Null,
            "获取免责声明失败",
        )
        .await
    }

    /// Files a bug report. `contact: None` sends JSON null.
    pub async fn report_bug(
        &self,
        severity: &str,
        description: &str,
        contact: Option<&str>,
    ) -> ApiResult<()> {
        self.call(
            "report_bug",
            json!({
                "severity": severity,
                "description": description,
                "contact": contact,
            }),
            "提交反馈失败",
        )
        .await
    }
}
