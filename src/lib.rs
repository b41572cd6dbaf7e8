//! # Reddit Scraper
//!
//! 用浏览器搜索 Reddit，逐个访问结果帖子并提取正文与评论，最后写入 JSON
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `browser/` - `BrowserSession`，每个阶段独立启动和关闭浏览器
//! - `infrastructure/` - `PageDriver` 抽象与 `ChromePage` 实现，只暴露页面能力
//!
//! ### ② 业务能力层（Services）
//! - `SearchCollector` - 搜索词 → 目标链接
//! - `ItemScraper` - 单个链接 → 正文和评论
//! - `ResultWriter` - 结果 → JSON 文件
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/app` - 搜索、抓取、写入三个阶段
//! - `orchestrator/scrape_batch` - 逐个抓取，单个失败不中断批次

pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use browser::BrowserSession;
pub use cli::{resolve_query, Cli};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{ChromePage, PageDriver, Selector};
pub use models::{BatchReport, ItemOutcome, ScrapedItem, SearchResult};
pub use orchestrator::{App, RunSummary};
