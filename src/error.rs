use std::path::PathBuf;

use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 搜索词为空或缺失
    #[error("输入无效: {0}")]
    InvalidInput(String),

    /// 页面导航失败（网络、超时、站点错误）
    #[error("导航到 {url} 失败: {reason}")]
    Navigation { url: String, reason: String },

    /// 等待元素超时（非致命）
    #[error("等待选择器 {selector} 超时 ({timeout_ms}ms)")]
    ExtractionTimeout { selector: String, timeout_ms: u64 },

    /// 结果文件写入失败
    #[error("写入文件失败 ({}): {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 用户中断
    #[error("用户中断")]
    Interrupted,

    /// 浏览器启动或 CDP 调用错误
    #[error("浏览器错误: {0}")]
    Browser(String),

    /// JSON 序列化失败
    #[error("JSON序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),
}

// ========== 从常见错误类型转换 ==========

impl From<chromiumoxide::error::CdpError> for AppError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        AppError::Browser(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::InvalidInput(format!("无法构建 URL: {}", err))
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建导航失败错误
    pub fn navigation_failed(url: impl Into<String>, reason: impl ToString) -> Self {
        AppError::Navigation {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// 创建写入失败错误
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Write {
            path: path.into(),
            source,
        }
    }

    /// 是否为可吸收的等待超时
    pub fn is_extraction_timeout(&self) -> bool {
        matches!(self, AppError::ExtractionTimeout { .. })
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
