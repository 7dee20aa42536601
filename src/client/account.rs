//! Account operations: registration, authentication, profile, and quota.
//!
//! All of these resolve through the backend's web API, so every result is a
//! `{status, data, msg}` envelope.

use serde_json::json;

use crate::client::PoolClient;
use crate::error::ApiResult;
use crate::types::{
    ActivateResult, AuthResult, CheckUserResult, PooledAccount, UsageInfo, UserInfo,
};

impl PoolClient {
    /// Checks whether an account is already registered for `email`.
    pub async fn check_user_exists(&self, email: &str) -> ApiResult<CheckUserResult> {
        self.call("check_user_exists", json!({ "email": email }), "检查用户失败")
            .await
    }

    /// Sends a verification code to `email` for registration or password
    /// reset.
    pub async fn send_verification_code(&self, email: &str) -> ApiResult<()> {
        self.call(
            "send_verification_code",
            json!({ "email": email }),
            "发送验证码失败",
        )
        .await
    }

    /// Registers a new account with the code received by mail.
    pub async fn register(&self, email: &str, code: &str, password: &str) -> ApiResult<AuthResult> {
        self.call(
            "register",
            json!({ "email": email, "code": code, "password": password }),
            "注册失败",
        )
        .await
    }

    /// Logs in and returns the account's API token.
    pub async fn login(&self, account: &str, password: &str) -> ApiResult<AuthResult> {
        self.call(
            "login",
            json!({ "account": account, "password": password }),
            "登录失败",
        )
        .await
    }

    /// Invalidates the current session on the backend.
    pub async fn logout(&self) -> ApiResult<()> {
        self.call("logout", serde_json::Value::Null, "退出登录失败")
            .await
    }

    /// Fetches the profile and quota of the account behind `api_key`.
    pub async fn get_user_info(&self, api_key: &str) -> ApiResult<UserInfo> {
        self.call(
            "get_user_info",
            json!({ "apiKey": api_key }),
            "获取用户信息失败",
        )
        .await
    }

    /// Draws a ready-to-use account from the pool.
    pub async fn get_pooled_account(&self) -> ApiResult<PooledAccount> {
        self.call("get_pooled_account", serde_json::Value::Null, "获取账户失败")
            .await
    }

    /// Fetches per-tier usage counters for the account behind `api_key`.
    pub async fn get_usage(&self, api_key: &str) -> ApiResult<UsageInfo> {
        self.call("get_usage", json!({ "apiKey": api_key }), "获取使用情况失败")
            .await
    }

    /// Redeems an activation code on the account behind `api_key`.
    pub async fn activate_license(&self, api_key: &str, code: &str) -> ApiResult<ActivateResult> {
        self.call(
            "activate_license",
            json!({ "apiKey": api_key, "code": code }),
            "激活失败",
        )
        .await
    }

    /// Changes the password of the account behind `api_key`.
    pub async fn change_password(
        &self,
        api_key: &str,
        old_password: &str,
        new_password: &str,
    ) -> ApiResult<()> {
        self.call(
            "change_password",
            json!({
                "apiKey": api_key,
                "oldPassword": old_password,
                "newPassword": new_password,
            }),
            "修改密码失败",
        )
        .await
    }

    /// Resets a forgotten password with a verification code.
    pub async fn reset_password_via_code(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> ApiResult<()> {
        self.call(
            "reset_password_via_code",
            json!({ "email": email, "code": code, "newPassword": new_password }),
            "重置密码失败",
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::testing::{client_with, ScriptedBridge};
    use serde_json::json;

    #[tokio::test]
    async fn test_login_returns_token() {
        let bridge = ScriptedBridge::new(vec![ScriptedBridge::envelope(
            200,
            Some(json!({"token": "ck-123"})),
            None,
        )]);
        let client = client_with(bridge.clone());

        let auth = client
            .login("pool@example.com", "hunter2")
            .await
            .expect("login should succeed");
        assert_eq!(auth.token, "ck-123");

        let calls = bridge.calls();
        assert_eq!(calls[0].0, "login");
        assert_eq!(
            calls[0].1,
            json!({"account": "pool@example.com", "password": "hunter2"})
        );
    }

    #[tokio::test]
    async fn test_login_surfaces_backend_rejection_msg() {
        let bridge =
            ScriptedBridge::new(vec![ScriptedBridge::envelope(401, None, Some("账户或密码错误"))]);
        let client = client_with(bridge);

        let err = client
            .login("pool@example.com", "wrong")
            .await
            .expect_err("401 must fail");
        assert_eq!(err.to_string(), "账户或密码错误");
    }

    #[tokio::test]
    async fn test_register_sends_code_and_password() {
        let bridge = ScriptedBridge::new(vec![ScriptedBridge::envelope(
            200,
            Some(json!({"token": "ck-9"})),
            None,
        )]);
        let client = client_with(bridge.clone());

        client
            .register("new@example.com", "004217", "pw")
            .await
            .expect("register should succeed");
        assert_eq!(
            bridge.calls()[0].1,
            json!({"email": "new@example.com", "code": "004217", "password": "pw"})
        );
    }

    #[tokio::test]
    async fn test_logout_takes_no_args() {
        let bridge = ScriptedBridge::new(vec![ScriptedBridge::envelope(200, None, None)]);
        let client = client_with(bridge.clone());

        client.logout().await.expect("logout should succeed");
        assert!(bridge.calls()[0].1.is_null(), "logout sends no arguments");
    }

    #[tokio::test]
    async fn test_get_user_info_passes_api_key() {
        let bridge = ScriptedBridge::new(vec![ScriptedBridge::envelope(
            200,
            Some(json!({
                "username": "pool-user",
                "level": 1,
                "totalCount": 100,
                "usedCount": 7,
                "isExpired": false
            })),
            None,
        )]);
        let client = client_with(bridge.clone());

        let info = client
            .get_user_info("ck-123")
            .await
            .expect("get_user_info should succeed");
        assert_eq!(info.username, "pool-user");
        assert_eq!(bridge.calls()[0].1, json!({"apiKey": "ck-123"}));
    }

    #[tokio::test]
    async fn test_change_password_is_void_on_success() {
        let bridge = ScriptedBridge::new(vec![ScriptedBridge::envelope(200, None, Some("ok"))]);
        let client = client_with(bridge.clone());

        client
            .change_password("ck-123", "old", "new")
            .await
            .expect("change_password should succeed");
        assert_eq!(bridge.calls()[0].0, "change_password");
    }

    #[tokio::test]
    async fn test_get_pooled_account_yields_credentials() {
        let bridge = ScriptedBridge::new(vec![ScriptedBridge::envelope(
            200,
            Some(json!({"email": "pooled@example.com", "token": "wos-1", "usedCount": 12})),
            None,
        )]);
        let client = client_with(bridge);

        let account = client
            .get_pooled_account()
            .await
            .expect("pool draw should succeed");
        assert_eq!(account.email, "pooled@example.com");
        assert_eq!(account.used_count, 12);
    }
}
