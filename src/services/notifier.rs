//! 推送能力 - 业务能力层
//!
//! 只负责"把一条文本发出去"，不关心内容怎么来的

use anyhow::Result;
use async_trait::async_trait;

/// 推送渠道
#[async_trait]
pub trait Notifier: Send + Sync {
    /// 渠道名称（用于日志）
    fn name(&self) -> &str;

    /// 发送一条消息
    async fn notify(&self, text: &str) -> Result<()>;
}

/// 只打印到标准输出的推送渠道，用于 `--dry-run`
pub struct StdoutNotifier {
    channel: String,
}

impl StdoutNotifier {
    /// 以被替代的渠道名创建
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
        }
    }
}

#[async_trait]
impl Notifier for StdoutNotifier {
    fn name(&self) -> &str {
        &self.channel
    }

    async fn notify(&self, text: &str) -> Result<()> {
        println!("[{}] {}", self.channel, text);
        Ok(())
    }
}

/// 依次把所有消息发送到一个渠道
pub async fn send_all(notifier: &dyn Notifier, messages: &[String]) -> Result<()> {
    for (idx, message) in messages.iter().enumerate() {
        tracing::debug!(
            "[{}] 发送第 {}/{} 条消息",
            notifier.name(),
            idx + 1,
            messages.len()
        );
        notifier.notify(message).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Collect {
        sent: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Notifier for Collect {
        fn name(&self) -> &str {
            "collect"
        }

        async fn notify(&self, text: &str) -> Result<()> {
            self.sent.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_send_all_in_order() {
        let notifier = Collect {
            sent: Mutex::new(Vec::new()),
        };
        let messages = vec!["banner".to_string(), "one".to_string(), "two".to_string()];
        send_all(&notifier, &messages).await.unwrap();
        assert_eq!(*notifier.sent.lock().unwrap(), messages);
    }

    #[tokio::test]
    async fn test_stdout_notifier_keeps_channel_name() {
        let notifier = StdoutNotifier::new("slack");
        assert_eq!(notifier.name(), "slack");
        notifier.notify("hello").await.unwrap();
    }
}
