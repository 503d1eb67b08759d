use crate::cli::Cli;
use crate::models::{KeywordWeights, Settings};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

/// Slack Incoming Webhook 地址的环境变量名
pub const SLACK_ID_ENV: &str = "SLACK_ID";
/// LINE Notify 令牌的环境变量名
pub const LINE_TOKEN_ENV: &str = "LINE_TOKEN";

/// 翻译相关配置
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TranslationSettings {
    /// 是否翻译标题和摘要
    pub enabled: bool,
    /// 源语言
    pub from_lang: String,
    /// 目标语言
    pub to_lang: String,
    /// 轮询译文的最大次数
    pub poll_attempts: u32,
    /// 每次轮询前的等待时间（毫秒）
    pub poll_interval_ms: u64,
    /// 页面导航超时（秒）
    pub page_timeout_secs: u64,
    /// 浏览器可执行文件路径，为空时自动查找
    pub chrome_executable: Option<String>,
    /// 已开启远程调试的浏览器端口，设置后直接连接而不启动新浏览器
    pub debug_port: Option<u16>,
    /// 翻译页面地址
    pub translator_url: String,
    /// 译文所在元素的 CSS 选择器
    pub result_selector: String,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            from_lang: "en".to_string(),
            to_lang: "ja".to_string(),
            poll_attempts: 30,
            poll_interval_ms: 1000,
            page_timeout_secs: 10,
            chrome_executable: None,
            debug_port: None,
            translator_url: "https://www.deepl.com/translator".to_string(),
            result_selector: ".lmt__translations_as_text__text_btn".to_string(),
        }
    }
}

/// arXiv 接口配置
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArxivSettings {
    pub api_url: String,
    pub max_results: usize,
}

impl Default for ArxivSettings {
    fn default() -> Self {
        Self {
            api_url: "http://export.arxiv.org/api/query".to_string(),
            max_results: 1000,
        }
    }
}

/// 程序运行配置
#[derive(Clone, Debug)]
pub struct Config {
    /// arXiv 检索条件
    pub subject: String,
    /// 关键词权重表
    pub keywords: KeywordWeights,
    pub translation: TranslationSettings,
    pub arxiv: ArxivSettings,
    /// 检索哪一天提交的论文
    pub target_date: NaiveDate,
    // --- 推送目标 ---
    pub slack_id: Option<String>,
    pub line_token: Option<String>,
    /// 只打印推送内容，不真正发送
    pub dry_run: bool,
}

impl Config {
    /// 合并配置文件、命令行参数和环境变量
    pub fn from_sources<F>(settings: Settings, cli: &Cli, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut translation = settings.translation;
        if cli.no_translate {
            translation.enabled = false;
        }

        Self {
            subject: settings.subject,
            keywords: settings.keywords,
            translation,
            arxiv: settings.arxiv,
            target_date: cli.date.unwrap_or_else(yesterday),
            slack_id: first_present([env(SLACK_ID_ENV), cli.slack_id.clone()]),
            line_token: first_present([env(LINE_TOKEN_ENV), cli.line_token.clone()]),
            dry_run: cli.dry_run,
        }
    }

    /// 使用进程环境变量合并配置
    pub fn from_env(settings: Settings, cli: &Cli) -> Self {
        Self::from_sources(settings, cli, |key| std::env::var(key).ok())
    }
}

/// 按顺序返回第一个非空的取值
///
/// 空字符串视为未设置。
pub fn first_present<I>(sources: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    sources
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}

/// 本地日期的前一天
pub fn yesterday() -> NaiveDate {
    let today = Local::now().date_naive();
    today.pred_opt().unwrap_or(today)
}
