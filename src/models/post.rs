//! 搜索结果与抓取结果的数据模型

use serde::{Deserialize, Serialize};

/// 标题为空时的占位文本
pub const NO_TITLE: &str = "No title";

/// 搜索结果条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// 标题（可能为空）
    pub title: String,
    /// 绝对 URL
    pub url: String,
}

impl SearchResult {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// 单个帖子的抓取结果，字段顺序即落盘时的键顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedItem {
    pub url: String,
    pub title: String,
    pub scraped_at: String,
    pub body: String,
    pub comments_tree: String,
}

impl ScrapedItem {
    /// 以当前本地时间构建
    pub fn new(target: &SearchResult, body: String, comments_tree: String) -> Self {
        Self::at(target, body, comments_tree, chrono::Local::now())
    }

    pub fn at<Tz: chrono::TimeZone>(
        target: &SearchResult,
        body: String,
        comments_tree: String,
        scraped_at: chrono::DateTime<Tz>,
    ) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let title = if target.title.trim().is_empty() {
            NO_TITLE.to_string()
        } else {
            target.title.clone()
        };

        Self {
            url: target.url.clone(),
            title,
            scraped_at: scraped_at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            body,
            comments_tree,
        }
    }
}

/// 单个目标的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// 抓取成功
    Scraped(ScrapedItem),
    /// 抓取失败，保留原因
    Failed {
        url: String,
        title: String,
        reason: String,
    },
}

impl ItemOutcome {
    pub fn url(&self) -> &str {
        match self {
            ItemOutcome::Scraped(item) => &item.url,
            ItemOutcome::Failed { url, .. } => url,
        }
    }

    pub fn is_scraped(&self) -> bool {
        matches!(self, ItemOutcome::Scraped(_))
    }
}

/// 一批目标的处理结果，保持搜索结果的发现顺序
#[derive(Debug, Default, Clone)]
pub struct BatchReport {
    pub outcomes: Vec<ItemOutcome>,
}

impl BatchReport {
    pub fn push(&mut self, outcome: ItemOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn scraped(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_scraped()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.scraped()
    }

    /// 按顺序取出成功的条目
    pub fn items(&self) -> Vec<ScrapedItem> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                ItemOutcome::Scraped(item) => Some(item.clone()),
                ItemOutcome::Failed { .. } => None,
            })
            .collect()
    }
}
