use anyhow::Result;
use arxiv_notify::models::load_settings;
use arxiv_notify::utils::logging;
use arxiv_notify::{App, Cli, Config};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    logging::init(cli.verbose);

    // 加载配置
    let settings = load_settings(&cli.config).await?;
    let config = Config::from_env(settings, &cli);

    // 初始化并运行应用
    let _report = App::initialize(config)?.run().await?;

    Ok(())
}
