//! Chromium 页面 - 基础设施层
//!
//! 持有唯一的 page 资源，通过 `PageDriver` 暴露能力

use std::time::{Duration, Instant};

use async_trait::async_trait;
use chromiumoxide::element::Element;
use chromiumoxide::Page;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tokio::time::sleep;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::infrastructure::page_driver::{PageDriver, Selector};

/// 轮询元素的间隔
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Chromium 页面封装
pub struct ChromePage {
    page: Page,
}

impl ChromePage {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// 执行 JS 代码并返回 JSON 结果
    pub async fn eval(&self, js_code: impl Into<String>) -> AppResult<JsonValue> {
        let result = self.page.evaluate(js_code.into()).await?;
        let json_value = result.into_value()?;
        Ok(json_value)
    }

    /// 执行 JS 代码并反序列化为指定类型
    pub async fn eval_as<T: DeserializeOwned>(&self, js_code: impl Into<String>) -> AppResult<T> {
        let json_value = self.eval(js_code).await?;
        let typed_value = serde_json::from_value(json_value)?;
        Ok(typed_value)
    }

    async fn nth_element(&self, selector: &Selector, nth: usize) -> AppResult<Option<Element>> {
        let mut elements = self.page.find_elements(selector.to_css()).await?;
        if nth < elements.len() {
            Ok(Some(elements.swap_remove(nth)))
        } else {
            Ok(None)
        }
    }
}

#[async_trait]
impl PageDriver for ChromePage {
    async fn goto(&self, url: &str) -> AppResult<()> {
        debug!("导航到: {}", url);
        self.page
            .goto(url)
            .await
            .map_err(|e| AppError::navigation_failed(url, e))?;
        self.page
            .wait_for_navigation()
            .await
            .map_err(|e| AppError::navigation_failed(url, e))?;
        Ok(())
    }

    async fn reload(&self) -> AppResult<()> {
        self.page.reload().await?;
        Ok(())
    }

    async fn scroll_by(&self, dx: i64, dy: i64) -> AppResult<()> {
        self.page
            .evaluate(format!("window.scrollBy({}, {})", dx, dy))
            .await?;
        Ok(())
    }

    async fn count(&self, selector: &Selector) -> AppResult<usize> {
        let elements = self.page.find_elements(selector.to_css()).await?;
        Ok(elements.len())
    }

    async fn inner_text(&self, selector: &Selector, nth: usize) -> AppResult<Option<String>> {
        match self.nth_element(selector, nth).await? {
            Some(element) => Ok(element.inner_text().await?),
            None => Ok(None),
        }
    }

    async fn attribute(
        &self,
        selector: &Selector,
        nth: usize,
        name: &str,
    ) -> AppResult<Option<String>> {
        match self.nth_element(selector, nth).await? {
            Some(element) => Ok(element.attribute(name).await?),
            None => Ok(None),
        }
    }

    async fn wait_for(&self, selector: &Selector, timeout: Duration) -> AppResult<()> {
        let css = selector.to_css();
        let start = Instant::now();

        loop {
            if self.page.find_element(css.as_str()).await.is_ok() {
                debug!("元素已出现: {} ({}ms)", css, start.elapsed().as_millis());
                return Ok(());
            }
            if start.elapsed() >= timeout {
                return Err(AppError::ExtractionTimeout {
                    selector: css,
                    timeout_ms: timeout.as_millis() as u64,
                });
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    async fn all_text_contents(&self, selector: &Selector) -> AppResult<Vec<String>> {
        let js_code = format!(
            "Array.from(document.querySelectorAll({})).map(e => e.textContent || '')",
            serde_json::to_string(&selector.to_css())?
        );
        self.eval_as(js_code).await
    }
}
