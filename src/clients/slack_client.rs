/// Slack 推送客户端
///
/// 通过 Incoming Webhook 发送纯文本消息
use crate::error::AppError;
use crate::services::notifier::Notifier;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

/// Slack Incoming Webhook 客户端
pub struct SlackClient {
    http: reqwest::Client,
    webhook_url: String,
}

impl SlackClient {
    /// 创建新的 Slack 客户端
    pub fn new(http: reqwest::Client, webhook_url: impl Into<String>) -> Self {
        Self {
            http,
            webhook_url: webhook_url.into(),
        }
    }

    /// 构建请求体
    pub fn payload(text: &str) -> serde_json::Value {
        json!({ "text": text })
    }
}

#[async_trait]
impl Notifier for SlackClient {
    fn name(&self) -> &str {
        "slack"
    }

    async fn notify(&self, text: &str) -> Result<()> {
        debug!("Slack 推送 {} 字符", text.chars().count());

        let response = self
            .http
            .post(&self.webhook_url)
            .json(&Self::payload(text))
            .send()
            .await
            .map_err(|e| AppError::notify_failed("slack", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::notify_rejected("slack", status.as_u16()).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_is_text_field() {
        let payload = SlackClient::payload("score: `3.5`");
        assert_eq!(payload, json!({ "text": "score: `3.5`" }));
    }
}
