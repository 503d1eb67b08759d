//! 每日推送任务 - 编排层
//!
//! 拉取 → 打分过滤 → 翻译 → 排序排版 → 推送，全程顺序执行

use crate::clients::{ArxivClient, DeeplClient, LineClient, SlackClient};
use crate::config::Config;
use crate::models::Article;
use crate::services::notifier::send_all;
use crate::services::{
    calc_score, render_batch, search_keyword, Notifier, PassthroughTranslator, StdoutNotifier,
    Translator,
};
use crate::utils::logging;
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{info, warn};

/// 一次运行的结果
#[derive(Debug, Default)]
pub struct DigestReport {
    /// 拉取到的论文数
    pub fetched: usize,
    /// 得分不为 0 的论文数
    pub matched: usize,
    /// 完成推送的渠道
    pub channels: Vec<String>,
    /// 推送的全部消息
    pub messages: Vec<String>,
}

/// 应用主结构
pub struct App {
    config: Config,
    http: reqwest::Client,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("arxiv_notify/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(60))
            .build()
            .context("无法创建 HTTP 客户端")?;

        Ok(Self { config, http })
    }

    /// 运行一次完整的推送流程
    pub async fn run(&self) -> Result<DigestReport> {
        logging::log_startup(&self.config);

        let arxiv = ArxivClient::new(self.http.clone(), &self.config.arxiv);
        let articles = arxiv
            .fetch_submitted_on(&self.config.subject, self.config.target_date)
            .await?;
        logging::log_articles_fetched(articles.len());

        let notifiers = build_notifiers(&self.config, &self.http);
        if notifiers.is_empty() {
            warn!("⚠️ 未配置 SLACK_ID / LINE_TOKEN，本次不会推送");
        }

        let has_match = articles
            .iter()
            .any(|a| calc_score(&a.summary, &self.config.keywords).0 != 0.0);

        let report = if self.config.translation.enabled && has_match {
            let deepl = DeeplClient::open(&self.config.translation).await?;
            let result = run_digest(&articles, &self.config, &deepl, &notifiers).await;
            deepl.close().await;
            result?
        } else {
            run_digest(&articles, &self.config, &PassthroughTranslator, &notifiers).await?
        };

        logging::print_final_stats(report.fetched, report.matched, &report.channels);
        Ok(report)
    }
}

/// 根据配置创建推送渠道
///
/// 没有凭据的渠道直接跳过；`dry_run` 时用标准输出代替真实推送
pub fn build_notifiers(config: &Config, http: &reqwest::Client) -> Vec<Box<dyn Notifier>> {
    let mut notifiers: Vec<Box<dyn Notifier>> = Vec::new();

    if let Some(slack_id) = &config.slack_id {
        if config.dry_run {
            notifiers.push(Box::new(StdoutNotifier::new("slack")));
        } else {
            notifiers.push(Box::new(SlackClient::new(http.clone(), slack_id)));
        }
    }

    if let Some(line_token) = &config.line_token {
        if config.dry_run {
            notifiers.push(Box::new(StdoutNotifier::new("line")));
        } else {
            notifiers.push(Box::new(LineClient::new(http.clone(), line_token)));
        }
    }

    if config.dry_run && notifiers.is_empty() {
        notifiers.push(Box::new(StdoutNotifier::new("stdout")));
    }

    notifiers
}

/// 对已拉取的论文执行打分、翻译、排版并推送
pub async fn run_digest(
    articles: &[Article],
    config: &Config,
    translator: &dyn Translator,
    notifiers: &[Box<dyn Notifier>],
) -> Result<DigestReport> {
    let results = search_keyword(articles, &config.keywords, translator, &config.translation)
        .await?;
    info!("🎯 命中关键词的论文: {}/{}", results.len(), articles.len());

    let matched = results.len();
    let messages = render_batch(config.target_date, results);

    let mut channels = Vec::new();
    for notifier in notifiers {
        info!("📨 推送到 {} ({} 条消息)", notifier.name(), messages.len());
        send_all(notifier.as_ref(), &messages).await?;
        channels.push(notifier.name().to_string());
    }

    Ok(DigestReport {
        fetched: articles.len(),
        matched,
        channels,
        messages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use crate::models::Settings;
    use clap::Parser;

    fn config_with(args: &[&str], env: &[(&str, &str)]) -> Config {
        let settings =
            Settings::from_toml_str("subject = \"cat:cs.CV\"\n[keywords]\ndiffusion = 2.0\n")
                .unwrap();
        let cli = Cli::parse_from(std::iter::once("arxiv_notify").chain(args.iter().copied()));
        let env: Vec<(String, String)> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_sources(settings, &cli, move |key| {
            env.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
        })
    }

    fn names(notifiers: &[Box<dyn Notifier>]) -> Vec<&str> {
        notifiers.iter().map(|n| n.name()).collect()
    }

    #[test]
    fn test_no_credentials_no_notifiers() {
        let config = config_with(&[], &[]);
        assert!(build_notifiers(&config, &reqwest::Client::new()).is_empty());
    }

    #[test]
    fn test_each_channel_independent() {
        let http = reqwest::Client::new();

        let config = config_with(&["--line-token", "tok"], &[]);
        assert_eq!(names(&build_notifiers(&config, &http)), vec!["line"]);

        let config = config_with(&[], &[("SLACK_ID", "https://hooks.slack.com/x")]);
        assert_eq!(names(&build_notifiers(&config, &http)), vec!["slack"]);

        let config = config_with(
            &["--slack-id", "https://hooks.slack.com/x", "--line-token", "tok"],
            &[],
        );
        assert_eq!(names(&build_notifiers(&config, &http)), vec!["slack", "line"]);
    }

    #[test]
    fn test_dry_run_without_credentials_prints() {
        let config = config_with(&["--dry-run"], &[]);
        assert_eq!(
            names(&build_notifiers(&config, &reqwest::Client::new())),
            vec!["stdout"]
        );
    }
}
