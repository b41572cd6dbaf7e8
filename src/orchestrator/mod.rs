//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! app (搜索 → 抓取 → 写入)
//!     ↓
//! scrape_batch (处理 Vec<SearchResult>)
//!     ↓
//! services (能力层：search / scrape / write)
//!     ↓
//! infrastructure (基础设施：PageDriver)
//! ```
//!
//! 只有编排层打开和关闭 `BrowserSession`

pub mod app;
pub mod scrape_batch;

pub use app::{App, RunSummary};
pub use scrape_batch::scrape_all;
