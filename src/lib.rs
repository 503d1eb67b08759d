//! # arXiv Notify
//!
//! 每天拉取 arXiv 新论文，按关键词权重打分，翻译命中论文的标题和摘要，
//! 再推送到 Slack / LINE。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Browser）
//! - `browser/` - 启动或连接浏览器，一次运行只持有一个
//!
//! ### ② 外部系统层（Clients）
//! - `ArxivClient` - 按提交日期检索论文
//! - `DeeplClient` - 驱动浏览器打开 DeepL 页面取译文
//! - `SlackClient` / `LineClient` - Webhook 推送
//!
//! ### ③ 业务能力层（Services）
//! - `scoring` - 关键词打分与过滤
//! - `formatter` - 排序、折行与排版
//! - `Translator` / `Notifier` - 翻译与推送能力接口
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/digest_job` - 一次完整运行：拉取 → 打分 → 翻译 → 排版 → 推送
//!
//! ## 模块结构

pub mod browser;
pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use cli::Cli;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Article, KeywordWeights, ScoredResult};
pub use orchestrator::{run_digest, App, DigestReport};
pub use services::{calc_score, Notifier, Translator};
