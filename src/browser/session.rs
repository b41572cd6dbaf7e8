use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::ChromePage;

/// 浏览器会话
///
/// 每个阶段独立启动一个浏览器实例并只持有一个页面，
/// 阶段结束时调用 `close` 释放
pub struct BrowserSession {
    browser: Browser,
    page: ChromePage,
    handler_task: Option<JoinHandle<()>>,
}

impl BrowserSession {
    /// 启动浏览器并打开一个空白页面
    pub async fn open(config: &Config) -> AppResult<Self> {
        info!(
            "🚀 启动浏览器 ({})...",
            if config.headless { "无头模式" } else { "有头模式" }
        );

        let builder = if config.headless {
            BrowserConfig::builder().new_headless_mode()
        } else {
            BrowserConfig::builder().with_head()
        };

        let browser_config = builder
            .window_size(config.window_size.0, config.window_size.1)
            .args(vec![
                "--no-sandbox".to_string(),
                "--disable-dev-shm-usage".to_string(),
                format!("--user-agent={}", config.user_agent),
            ])
            .build()
            .map_err(|e| {
                error!("配置浏览器失败: {}", e);
                AppError::Browser(format!("配置浏览器失败: {}", e))
            })?;

        let (browser, mut handler) = Browser::launch(browser_config).await.map_err(|e| {
            error!("启动浏览器失败: {}", e);
            AppError::Browser(format!("启动浏览器失败: {}", e))
        })?;
        debug!("浏览器启动成功");

        // 在后台处理浏览器事件
        let handler_task = tokio::spawn(async move {
            while let Some(h) = handler.next().await {
                if h.is_err() {
                    break;
                }
            }
        });

        // 添加短暂延迟以等待浏览器状态同步
        sleep(Duration::from_millis(300)).await;

        let page = browser.new_page("about:blank").await.map_err(|e| {
            error!("创建页面失败: {}", e);
            AppError::Browser(format!("创建页面失败: {}", e))
        })?;
        debug!("页面创建成功");

        Ok(Self {
            browser,
            page: ChromePage::new(page),
            handler_task: Some(handler_task),
        })
    }

    pub fn page(&self) -> &ChromePage {
        &self.page
    }

    /// 关闭浏览器，错误只记录不抛出
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("关闭浏览器失败: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            warn!("等待浏览器进程退出失败: {}", e);
        }
        if let Some(task) = self.handler_task.take() {
            task.abort();
        }
        debug!("浏览器已关闭");
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        if let Some(task) = self.handler_task.take() {
            task.abort();
        }
    }
}
