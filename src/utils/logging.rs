/// 日志工具模块
///
/// 提供日志初始化和格式化输出的辅助函数
use crate::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则 `verbose` 时为 debug，默认 info
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - arXiv 每日论文推送");
    info!("🔎 检索条件: {}", config.subject);
    info!("📅 检索日期: {}", config.target_date);
    info!("🏷️ 关键词数量: {}", config.keywords.len());
    info!(
        "🌐 翻译: {}",
        if config.translation.enabled {
            format!(
                "{} → {}",
                config.translation.from_lang, config.translation.to_lang
            )
        } else {
            "关闭".to_string()
        }
    );
    info!("{}", "=".repeat(60));
}

/// 记录论文拉取信息
pub fn log_articles_fetched(total: usize) {
    info!("✓ 共拉取到 {} 篇论文", total);
}

/// 打印最终统计信息
///
/// # 参数
/// - `fetched`: 拉取的论文数
/// - `matched`: 命中关键词的论文数
/// - `channels`: 完成推送的渠道名
pub fn print_final_stats(fetched: usize, matched: usize, channels: &[String]) {
    info!("\n{}", "=".repeat(60));
    info!("📊 处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("📄 拉取论文: {}", fetched);
    info!("✅ 命中关键词: {}", matched);
    if channels.is_empty() {
        info!("📭 未配置任何推送渠道");
    } else {
        info!("📨 已推送: {}", channels.join(", "));
    }
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 5), "hello...");
        assert_eq!(truncate_text("拡散モデルの研究", 4), "拡散モデ...");
    }
}
