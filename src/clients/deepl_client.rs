/// DeepL 网页翻译客户端
///
/// 用浏览器打开 DeepL 翻译页面，轮询页面直到出现译文
use crate::browser::BrowserSession;
use crate::config::TranslationSettings;
use crate::error::AppError;
use crate::services::translator::Translator;
use crate::utils::truncate_text;
use anyhow::Result;
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// DeepL 网页翻译客户端
pub struct DeeplClient {
    session: BrowserSession,
    translator_url: String,
    result_selector: String,
    poll_attempts: u32,
    poll_interval: Duration,
}

impl DeeplClient {
    /// 打开浏览器并创建客户端
    pub async fn open(settings: &TranslationSettings) -> Result<Self> {
        let session = BrowserSession::open(settings).await?;
        Ok(Self {
            session,
            translator_url: settings.translator_url.clone(),
            result_selector: settings.result_selector.clone(),
            poll_attempts: settings.poll_attempts,
            poll_interval: Duration::from_millis(settings.poll_interval_ms),
        })
    }

    /// 关闭浏览器
    pub async fn close(self) {
        self.session.shutdown().await;
    }
}

#[async_trait]
impl Translator for DeeplClient {
    async fn translate(&self, text: &str, from_lang: &str, to_lang: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let url = build_translator_url(&self.translator_url, from_lang, to_lang, text);
        debug!("打开翻译页面: {}", truncate_text(&url, 120));

        let page = self
            .session
            .browser
            .new_page(url.as_str())
            .await
            .map_err(|e| AppError::navigation_failed(&self.translator_url, e))?;

        let mut translated = String::new();
        for attempt in 1..=self.poll_attempts {
            sleep(self.poll_interval).await;

            match page.content().await {
                Ok(html) => translated = extract_translation(&html, &self.result_selector),
                Err(e) => debug!("读取页面失败 (第 {} 次): {}", attempt, e),
            }

            if !translated.is_empty() {
                debug!("第 {} 次轮询拿到译文", attempt);
                break;
            }
        }

        if translated.is_empty() {
            warn!(
                "⚠️ 轮询 {} 次仍未拿到译文: {}",
                self.poll_attempts,
                truncate_text(text, 40)
            );
        }

        if let Err(e) = page.close().await {
            warn!("关闭翻译页面失败: {}", e);
        }

        Ok(translated)
    }
}

/// 构建 DeepL 翻译页面地址 `{base}#{from}/{to}/{encoded text}`
pub fn build_translator_url(base: &str, from_lang: &str, to_lang: &str, text: &str) -> String {
    format!(
        "{}#{}/{}/{}",
        base,
        from_lang,
        to_lang,
        urlencoding::encode(text)
    )
}

/// 从页面 HTML 中取出译文
///
/// 找不到元素或选择器非法时返回空字符串
pub fn extract_translation(html: &str, selector: &str) -> String {
    let selector = match Selector::parse(selector) {
        Ok(selector) => selector,
        Err(e) => {
            warn!("译文选择器非法 '{}': {:?}", selector, e);
            return String::new();
        }
    };

    let document = Html::parse_document(html);
    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}
