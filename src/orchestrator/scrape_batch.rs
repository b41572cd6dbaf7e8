//! 批量帖子抓取 - 编排层
//!
//! 按搜索结果顺序逐个抓取，单个失败不影响后续

use tracing::{error, info};

use crate::infrastructure::PageDriver;
use crate::models::{BatchReport, ItemOutcome, SearchResult};
use crate::services::ItemScraper;
use crate::utils::logging::log_item_start;

/// 依次抓取所有目标
///
/// 每个目标都对应一个 `ItemOutcome`，顺序与输入一致
pub async fn scrape_all<P: PageDriver>(
    scraper: &ItemScraper,
    page: &P,
    targets: &[SearchResult],
) -> BatchReport {
    let mut report = BatchReport::default();
    let total = targets.len();

    for (index, target) in targets.iter().enumerate() {
        log_item_start(index + 1, total, &target.title);

        match scraper.scrape(page, target).await {
            Ok(item) => {
                info!("[帖子 {}/{}] ✓ 抓取成功", index + 1, total);
                report.push(ItemOutcome::Scraped(item));
            }
            Err(e) => {
                error!("[帖子 {}/{}] ❌ 抓取失败: {}", index + 1, total, e);
                report.push(ItemOutcome::Failed {
                    url: target.url.clone(),
                    title: target.title.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    report
}
