//! 结果写入服务 - 业务能力层
//!
//! 只负责把抓取结果落盘为 JSON

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, TimeZone};
use tracing::{error, info, warn};

use crate::error::{AppError, AppResult};
use crate::models::ScrapedItem;

/// 结果写入服务
///
/// - 空结果不创建任何文件
/// - 写入失败只记录日志，不向上抛出
pub struct ResultWriter {
    output_dir: PathBuf,
}

impl ResultWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// 写入结果，返回文件路径
    pub fn write(&self, query: &str, items: &[ScrapedItem]) -> Option<PathBuf> {
        if items.is_empty() {
            warn!("⚠️ no data: 没有可保存的结果");
            return None;
        }

        match self.try_write(query, items) {
            Ok(path) => {
                info!("💾 已保存 {} 条结果至: {}", items.len(), path.display());
                Some(path)
            }
            Err(e) => {
                error!("❌ {}", e);
                None
            }
        }
    }

    fn try_write(&self, query: &str, items: &[ScrapedItem]) -> AppResult<PathBuf> {
        fs::create_dir_all(&self.output_dir)
            .map_err(|e| AppError::write_failed(&self.output_dir, e))?;

        let path = self
            .output_dir
            .join(build_file_name(chrono::Local::now(), query));
        let content = escape_non_ascii(&serde_json::to_string_pretty(items)?);

        fs::write(&path, content).map_err(|e| AppError::write_failed(&path, e))?;
        Ok(path)
    }
}

/// `{YYYY-MM-DD_HH:MM:SS}_{搜索词}.json`，空格替换为下划线
///
/// 搜索词中的路径分隔符替换为 `-`，避免写到输出目录之外
pub fn build_file_name<Tz: TimeZone>(now: DateTime<Tz>, query: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let query: String = query
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' => '-',
            c => c,
        })
        .collect();
    format!("{}_{}.json", now.format("%Y-%m-%d %H:%M:%S"), query).replace(' ', "_")
}

/// 将非 ASCII 字符转义为 `\uXXXX`，超出 BMP 的字符使用代理对
pub fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut buf = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            for unit in c.encode_utf16(&mut buf) {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_build_file_name() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        assert_eq!(
            build_file_name(now, "python programming"),
            "2024-05-01_08:30:00_python_programming.json"
        );
    }

    #[test]
    fn test_build_file_name_strips_separators() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        assert_eq!(
            build_file_name(now, "c/c++ vs ..\\rust"),
            "2024-05-01_08:30:00_c-c++_vs_..-rust.json"
        );
    }

    #[test]
    fn test_escape_non_ascii() {
        assert_eq!(escape_non_ascii(r#"{"a":"é"}"#), r#"{"a":"\u00e9"}"#);
        assert_eq!(escape_non_ascii("😀"), "\\ud83d\\ude00");
        assert_eq!(escape_non_ascii("plain"), "plain");
    }

    #[test]
    fn test_escaped_json_parses_back() {
        let original = vec!["中文".to_string(), "naïve".to_string()];
        let escaped = escape_non_ascii(&serde_json::to_string_pretty(&original).unwrap());
        assert!(escaped.is_ascii());
        let parsed: Vec<String> = serde_json::from_str(&escaped).unwrap();
        assert_eq!(parsed, original);
    }
}
