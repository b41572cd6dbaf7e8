//! 应用主流程 - 编排层
//!
//! 1. 搜索阶段：独立浏览器会话，收集目标链接
//! 2. 抓取阶段：新的浏览器会话，逐个抓取
//! 3. 落盘阶段：写入 JSON

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::browser::BrowserSession;
use crate::config::Config;
use crate::models::{BatchReport, SearchResult};
use crate::orchestrator::scrape_batch::scrape_all;
use crate::services::{ItemScraper, ResultWriter, SearchCollector};
use crate::utils::logging::{log_phase_start, log_startup, print_final_stats};

/// 一次运行的结果
#[derive(Debug)]
pub struct RunSummary {
    pub report: BatchReport,
    pub output: Option<PathBuf>,
}

/// 应用主结构
pub struct App {
    config: Config,
    query: String,
}

impl App {
    pub fn new(config: Config, query: impl Into<String>) -> Self {
        Self {
            config,
            query: query.into(),
        }
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<RunSummary> {
        log_startup(&self.query, self.config.headless);

        let targets = self.search_phase().await?;

        let report = if targets.is_empty() {
            warn!("⚠️ 没有找到搜索结果，跳过抓取阶段");
            BatchReport::default()
        } else {
            self.scrape_phase(&targets).await?
        };

        log_phase_start("写入结果");
        let writer = ResultWriter::new(&self.config.output_dir);
        let output = writer.write(&self.query, &report.items());

        print_final_stats(&report, output.as_deref());

        Ok(RunSummary { report, output })
    }

    /// 搜索阶段
    async fn search_phase(&self) -> Result<Vec<SearchResult>> {
        log_phase_start("搜索阶段");

        let session = BrowserSession::open(&self.config)
            .await
            .context("搜索阶段启动浏览器失败")?;

        let collector = SearchCollector::new(&self.config);
        let result = collector.collect(session.page(), &self.query).await;
        session.close().await;

        let targets = result.with_context(|| format!("搜索失败: {}", self.query))?;
        info!("✓ 找到 {} 个目标", targets.len());
        Ok(targets)
    }

    /// 抓取阶段
    async fn scrape_phase(&self, targets: &[SearchResult]) -> Result<BatchReport> {
        log_phase_start("抓取阶段");

        let session = BrowserSession::open(&self.config)
            .await
            .context("抓取阶段启动浏览器失败")?;

        let scraper = ItemScraper::new(&self.config);
        let report = scrape_all(&scraper, session.page(), targets).await;
        session.close().await;

        Ok(report)
    }
}
