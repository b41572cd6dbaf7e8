/// 日志工具模块
///
/// 初始化 tracing 订阅器，并提供日志格式化和输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::models::{BatchReport, ItemOutcome};

/// 初始化日志
///
/// `RUST_LOG` 优先，否则按 `verbose` 选择 debug 或 info
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("reddit_scraper={},warn", default_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(query: &str, headless: bool) {
    info!("{}", "=".repeat(60));
    info!("🚀 Starting Reddit scraper with query: '{}'", query);
    info!("🖥️ 浏览器模式: {}", if headless { "无头" } else { "有头" });
    info!("{}", "=".repeat(60));
}

/// 记录阶段开始
pub fn log_phase_start(phase: &str) {
    info!("\n{}", "─".repeat(60));
    info!("📦 {}", phase);
    info!("{}", "─".repeat(60));
}

/// 记录单个目标开始
pub fn log_item_start(index: usize, total: usize, title: &str) {
    info!("[帖子 {}/{}] {}", index, total, truncate_text(title, 60));
}

/// 打印最终统计信息
pub fn print_final_stats(report: &BatchReport, output: Option<&std::path::Path>) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", report.scraped(), report.total());
    info!("❌ 失败: {}", report.failed());
    info!("{}", "=".repeat(60));
    match output {
        Some(path) => info!("\n结果已保存至: {}", path.display()),
        None => info!("\n未生成结果文件"),
    }
}

/// 输出结果摘要到标准输出
pub fn render_summary(report: &BatchReport) -> String {
    let mut out = String::from("\n=== Results ===\n");
    for outcome in &report.outcomes {
        match outcome {
            ItemOutcome::Scraped(item) => {
                out.push_str(&format!("\n{}\n", item.url));
                out.push_str(&format!("  title: {}\n", truncate_text(&item.title, 80)));
                out.push_str(&format!(
                    "  body: {} chars, comments: {} chars\n",
                    item.body.chars().count(),
                    item.comments_tree.chars().count()
                ));
            }
            ItemOutcome::Failed { url, reason, .. } => {
                out.push_str(&format!("\n{}\n", url));
                out.push_str(&format!("  error: {}\n", reason));
            }
        }
    }
    out
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
