//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责一次运行的完整调度，是整个系统的"指挥中心"。
//!
//! ### `digest_job` - 每日推送任务
//! - 管理应用生命周期（初始化、运行、清理）
//! - 拉取论文（Vec<Article>）
//! - 按需启动浏览器用于翻译，结束时关闭
//! - 组装推送渠道并依次推送
//! - 输出运行统计信息
//!
//! ## 层次关系
//!
//! ```text
//! digest_job (一次运行)
//!     ↓
//! services (能力层：scoring / formatter / translator / notifier)
//!     ↓
//! clients (外部系统：arXiv / DeepL / Slack / LINE)
//!     ↓
//! browser (基础设施：无头浏览器)
//! ```
//!
//! 全程顺序执行，不并发。

pub mod digest_job;

pub use digest_job::{build_notifiers, run_digest, App, DigestReport};
