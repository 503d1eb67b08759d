//! 翻译能力 - 业务能力层
//!
//! 只暴露"把一段文字从 A 语言翻成 B 语言"的能力，不关心谁在调用

use anyhow::Result;
use async_trait::async_trait;

/// 翻译能力
///
/// 译文可能为空：翻译页面迟迟不给结果时，实现方返回已拿到的内容而不是报错。
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, from_lang: &str, to_lang: &str) -> Result<String>;
}

/// 原样返回输入的翻译器，用于关闭翻译时
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughTranslator;

#[async_trait]
impl Translator for PassthroughTranslator {
    async fn translate(&self, text: &str, _from_lang: &str, _to_lang: &str) -> Result<String> {
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_passthrough_returns_input() {
        let translated = PassthroughTranslator
            .translate("A Diffusion Transformer Model", "en", "ja")
            .await
            .unwrap();
        assert_eq!(translated, "A Diffusion Transformer Model");
    }
}
