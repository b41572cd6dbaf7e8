//! 页面驱动抽象 - 基础设施层
//!
//! 只描述"对一个页面能做什么"，不关心搜索或帖子

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{AppError, AppResult};

/// 元素选择器
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// 按 data-testid 定位
    TestId(String),
    /// CSS 选择器
    Css(String),
}

impl Selector {
    pub fn test_id(id: impl Into<String>) -> Self {
        Selector::TestId(id.into())
    }

    pub fn css(css: impl Into<String>) -> Self {
        Selector::Css(css.into())
    }

    /// 转换为 CSS 选择器文本
    pub fn to_css(&self) -> String {
        match self {
            Selector::TestId(id) => format!(r#"[data-testid="{}"]"#, id),
            Selector::Css(css) => css.clone(),
        }
    }
}

/// 页面驱动
///
/// 职责：
/// - 导航、刷新、滚动
/// - 按选择器读取元素文本和属性
/// - 有界等待元素出现
///
/// 所有调用都是顺序的，同一时刻只有一个操作在进行
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// 导航到指定 URL 并等待加载完成（不设上限，超时由调用方控制）
    async fn goto(&self, url: &str) -> AppResult<()>;

    /// 刷新当前页面
    async fn reload(&self) -> AppResult<()>;

    /// 滚动页面
    async fn scroll_by(&self, dx: i64, dy: i64) -> AppResult<()>;

    /// 匹配的元素数量
    async fn count(&self, selector: &Selector) -> AppResult<usize>;

    /// 第 n 个元素的可见文本
    async fn inner_text(&self, selector: &Selector, nth: usize) -> AppResult<Option<String>>;

    /// 第 n 个元素的属性
    async fn attribute(
        &self,
        selector: &Selector,
        nth: usize,
        name: &str,
    ) -> AppResult<Option<String>>;

    /// 等待元素出现，超时返回 `AppError::ExtractionTimeout`
    async fn wait_for(&self, selector: &Selector, timeout: Duration) -> AppResult<()>;

    /// 所有匹配元素的 textContent
    async fn all_text_contents(&self, selector: &Selector) -> AppResult<Vec<String>>;
}

/// 为导航类操作加上时间上限
pub async fn bounded_navigation<F>(limit: Duration, url: &str, fut: F) -> AppResult<()>
where
    F: Future<Output = AppResult<()>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(AppError::Navigation { url, reason })) => Err(AppError::Navigation { url, reason }),
        Ok(Err(e)) => Err(AppError::navigation_failed(url, e)),
        Err(_) => Err(AppError::navigation_failed(
            url,
            format!("超过 {}s 未完成加载", limit.as_secs_f32()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_to_css() {
        assert_eq!(
            Selector::test_id("post-title-text").to_css(),
            r#"[data-testid="post-title-text"]"#
        );
        assert_eq!(Selector::css("shreddit-comment p").to_css(), "shreddit-comment p");
    }

    #[test]
    fn test_bounded_navigation_expires() {
        let result = tokio_test::block_on(bounded_navigation(
            Duration::from_millis(20),
            "https://www.reddit.com/r/slow",
            async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(())
            },
        ));
        assert!(matches!(result, Err(AppError::Navigation { .. })));
    }

    #[test]
    fn test_bounded_navigation_wraps_other_errors() {
        let result = tokio_test::block_on(bounded_navigation(
            Duration::from_secs(1),
            "https://www.reddit.com/r/x",
            async { Err(AppError::Browser("target closed".into())) },
        ));
        match result {
            Err(AppError::Navigation { url, reason }) => {
                assert_eq!(url, "https://www.reddit.com/r/x");
                assert!(reason.contains("target closed"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
