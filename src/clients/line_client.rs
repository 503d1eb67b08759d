/// LINE Notify 推送客户端
use crate::error::AppError;
use crate::services::notifier::Notifier;
use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

/// LINE Notify 接口地址
pub const LINE_NOTIFY_API: &str = "https://notify-api.line.me/api/notify";

/// LINE Notify 客户端
pub struct LineClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
}

impl LineClient {
    /// 创建新的 LINE 客户端
    pub fn new(http: reqwest::Client, token: impl Into<String>) -> Self {
        Self::with_api_url(http, LINE_NOTIFY_API, token)
    }

    /// 使用自定义接口地址创建
    pub fn with_api_url(
        http: reqwest::Client,
        api_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            http,
            api_url: api_url.into(),
            token: token.into(),
        }
    }

    /// 构建表单字段
    pub fn form(text: &str) -> [(&'static str, String); 1] {
        [("message", format!("message: {}", text))]
    }
}

#[async_trait]
impl Notifier for LineClient {
    fn name(&self) -> &str {
        "line"
    }

    async fn notify(&self, text: &str) -> Result<()> {
        debug!("LINE 推送 {} 字符", text.chars().count());

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.token)
            .form(&Self::form(text))
            .send()
            .await
            .map_err(|e| AppError::notify_failed("line", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::notify_rejected("line", status.as_u16()).into());
        }

        Ok(())
    }
}
