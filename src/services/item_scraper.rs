//! 帖子抓取服务 - 业务能力层
//!
//! 只负责单个帖子，不关心批量和顺序

use std::time::Duration;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::{bounded_navigation, PageDriver, Selector};
use crate::models::{ScrapedItem, SearchResult};

/// 帖子抓取服务
pub struct ItemScraper {
    body_selector: Selector,
    comment_selector: Selector,
    navigation_timeout: Duration,
    selector_timeout: Duration,
    scroll_distance: i64,
}

impl ItemScraper {
    pub fn new(config: &Config) -> Self {
        Self {
            body_selector: Selector::css(&config.post_body_selector),
            comment_selector: Selector::css(&config.comment_selector),
            navigation_timeout: config.navigation_timeout,
            selector_timeout: config.selector_timeout,
            scroll_distance: config.scroll_distance,
        }
    }

    /// 抓取单个帖子
    ///
    /// 导航失败返回错误；正文或评论等待超时只会得到空文本
    pub async fn scrape<P: PageDriver>(&self, page: &P, target: &SearchResult) -> AppResult<ScrapedItem> {
        info!("📄 正在抓取: {}", target.url);

        bounded_navigation(self.navigation_timeout, &target.url, page.goto(&target.url)).await?;
        bounded_navigation(self.navigation_timeout, &target.url, page.reload()).await?;

        // 触发懒加载
        page.scroll_by(0, self.scroll_distance).await?;

        self.wait_best_effort(page, &self.body_selector).await?;
        self.wait_best_effort(page, &self.comment_selector).await?;

        let body = page.all_text_contents(&self.body_selector).await?.join("\n");
        let comments_tree = page
            .all_text_contents(&self.comment_selector)
            .await?
            .join("\n");

        debug!(
            "正文 {} 字符, 评论 {} 字符",
            body.chars().count(),
            comments_tree.chars().count()
        );

        Ok(ScrapedItem::new(target, body, comments_tree))
    }

    async fn wait_best_effort<P: PageDriver>(&self, page: &P, selector: &Selector) -> AppResult<()> {
        match page.wait_for(selector, self.selector_timeout).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_extraction_timeout() => {
                debug!("{}，按空内容处理", e);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
