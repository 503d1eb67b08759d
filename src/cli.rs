use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// 每日抓取 arXiv 新论文，按关键词打分并推送到 Slack / LINE
#[derive(Debug, Parser)]
#[command(name = "arxiv_notify", version, about)]
pub struct Cli {
    /// 配置文件路径
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Slack Incoming Webhook 地址（环境变量 SLACK_ID 优先）
    #[arg(long = "slack-id")]
    pub slack_id: Option<String>,

    /// LINE Notify 令牌（环境变量 LINE_TOKEN 优先）
    #[arg(long = "line-token")]
    pub line_token: Option<String>,

    /// 检索指定日期提交的论文，格式 YYYY-MM-DD，默认昨天
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// 不翻译，直接推送原文
    #[arg(long)]
    pub no_translate: bool,

    /// 只打印推送内容，不真正发送
    #[arg(long)]
    pub dry_run: bool,

    /// 输出调试日志
    #[arg(short, long)]
    pub verbose: bool,
}
