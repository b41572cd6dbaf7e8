use std::str::FromStr;
use std::time::Duration;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 站点根地址（不带结尾斜杠）
    pub base_url: String,
    /// 是否无头模式
    pub headless: bool,
    /// 浏览器 User-Agent
    pub user_agent: String,
    /// 浏览器窗口大小
    pub window_size: (u32, u32),
    /// 结果输出目录
    pub output_dir: String,
    /// 整页导航超时
    pub navigation_timeout: Duration,
    /// 等待选择器超时（超时不视为失败）
    pub selector_timeout: Duration,
    /// 帖子页滚动距离，用于触发懒加载
    pub scroll_distance: i64,
    // --- 站点选择器 ---
    pub search_result_test_id: String,
    pub post_body_selector: String,
    pub comment_selector: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://www.reddit.com".to_string(),
            headless: false,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            window_size: (1366, 768),
            output_dir: "data".to_string(),
            navigation_timeout: Duration::from_secs(60),
            selector_timeout: Duration::from_millis(5000),
            scroll_distance: 10_000,
            search_result_test_id: "post-title-text".to_string(),
            post_body_selector: r#"shreddit-post [slot="text-body"] p"#.to_string(),
            comment_selector: r#"shreddit-comment [slot="comment"] p"#.to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载，缺失或无法解析的项使用默认值
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            base_url: lookup("BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(default.base_url),
            headless: parse_var(&lookup, "HEADLESS").unwrap_or(default.headless),
            user_agent: lookup("USER_AGENT").unwrap_or(default.user_agent),
            window_size: default.window_size,
            output_dir: lookup("OUTPUT_DIR").unwrap_or(default.output_dir),
            navigation_timeout: parse_var(&lookup, "NAVIGATION_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(default.navigation_timeout),
            selector_timeout: parse_var(&lookup, "SELECTOR_TIMEOUT_MS")
                .map(Duration::from_millis)
                .unwrap_or(default.selector_timeout),
            scroll_distance: parse_var(&lookup, "SCROLL_DISTANCE").unwrap_or(default.scroll_distance),
            search_result_test_id: lookup("SEARCH_RESULT_TEST_ID")
                .unwrap_or(default.search_result_test_id),
            post_body_selector: lookup("POST_BODY_SELECTOR").unwrap_or(default.post_body_selector),
            comment_selector: lookup("COMMENT_SELECTOR").unwrap_or(default.comment_selector),
            verbose_logging: parse_var(&lookup, "VERBOSE_LOGGING").unwrap_or(default.verbose_logging),
        }
    }
}

/// 读取并解析单个配置项
fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}
