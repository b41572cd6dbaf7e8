//! 搜索收集服务 - 业务能力层
//!
//! 只负责"把搜索词变成目标链接列表"

use std::time::Duration;

use tracing::{debug, info, warn};
use url::Url;

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::{bounded_navigation, PageDriver, Selector};
use crate::models::SearchResult;

/// 搜索收集服务
///
/// 职责：
/// - 打开搜索页并强制刷新
/// - 读取首屏所有结果的标题和链接
/// - 不翻页、不滚动
pub struct SearchCollector {
    base_url: String,
    result_selector: Selector,
    navigation_timeout: Duration,
}

impl SearchCollector {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            result_selector: Selector::test_id(&config.search_result_test_id),
            navigation_timeout: config.navigation_timeout,
        }
    }

    /// 搜索页 URL
    pub fn search_url(&self, query: &str) -> AppResult<String> {
        let url = Url::parse_with_params(&format!("{}/search/", self.base_url), &[("q", query)])?;
        Ok(url.into())
    }

    /// 收集搜索结果
    ///
    /// 标题取元素的可见文本原样保留；缺少 href 的元素无法定位帖子，
    /// 记录警告后跳过，因此结果数可能少于匹配的元素数
    pub async fn collect<P: PageDriver>(&self, page: &P, query: &str) -> AppResult<Vec<SearchResult>> {
        let search_url = self.search_url(query)?;
        info!("🔍 正在搜索: {}", query);
        debug!("搜索页: {}", search_url);

        bounded_navigation(self.navigation_timeout, &search_url, page.goto(&search_url)).await?;
        bounded_navigation(self.navigation_timeout, &search_url, page.reload()).await?;

        let count = page.count(&self.result_selector).await?;
        debug!("匹配到 {} 个结果元素", count);

        let mut results = Vec::with_capacity(count);
        for index in 0..count {
            let title = page
                .inner_text(&self.result_selector, index)
                .await?
                .unwrap_or_default();

            let Some(href) = page.attribute(&self.result_selector, index, "href").await? else {
                warn!("第 {} 个结果缺少 href，已跳过", index + 1);
                continue;
            };

            results.push(SearchResult::new(title, absolutize(&self.base_url, &href)));
        }

        info!("✓ 搜索完成，找到 {} 个结果", results.len());
        Ok(results)
    }
}

/// 根相对路径补全为绝对 URL，其他保持不变
pub fn absolutize(base_url: &str, href: &str) -> String {
    if href.starts_with('/') {
        format!("{}{}", base_url.trim_end_matches('/'), href)
    } else {
        href.to_string()
    }
}
