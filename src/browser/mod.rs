pub mod connection;
pub mod headless;

use anyhow::Result;
use chromiumoxide::Browser;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::config::TranslationSettings;

pub use connection::connect_to_browser;
pub use headless::launch_headless_browser;

/// 一次运行期间共用的浏览器
pub struct BrowserSession {
    pub browser: Browser,
    handler: JoinHandle<()>,
    /// 由本程序启动的浏览器需要在结束时关闭
    owned: bool,
}

impl BrowserSession {
    /// 配置了调试端口时连接已有浏览器，否则启动无头浏览器
    pub async fn open(settings: &TranslationSettings) -> Result<Self> {
        let session = match settings.debug_port {
            Some(port) => {
                let (browser, handler) = connect_to_browser(port).await?;
                Self {
                    browser,
                    handler,
                    owned: false,
                }
            }
            None => {
                let (browser, handler) = launch_headless_browser(settings).await?;
                Self {
                    browser,
                    handler,
                    owned: true,
                }
            }
        };
        Ok(session)
    }

    /// 关闭浏览器并停止事件处理
    pub async fn shutdown(mut self) {
        if self.owned {
            if let Err(e) = self.browser.close().await {
                warn!("关闭浏览器失败: {}", e);
            }
            if let Err(e) = self.browser.wait().await {
                warn!("等待浏览器退出失败: {}", e);
            }
        }
        self.handler.abort();
    }
}
