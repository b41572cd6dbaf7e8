//! 命令行参数与搜索词来源

use std::future::Future;
use std::io::{BufRead, Write};
use std::thread;

use clap::{CommandFactory, Parser};

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// 交互模式下的提示语
pub const PROMPT: &str = "Enter your Reddit search query: ";

/// Reddit Scraper - Search and extract data from Reddit
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "reddit_scraper", version, about)]
pub struct Cli {
    /// Search query for Reddit
    pub query: Option<String>,

    /// Run in interactive mode
    #[arg(short, long)]
    pub interactive: bool,

    /// Run the browser without a visible window
    #[arg(long)]
    pub headless: bool,

    /// Directory for the JSON output
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// 用命令行参数覆盖配置
    pub fn apply_to(&self, config: &mut Config) {
        if self.headless {
            config.headless = true;
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if self.verbose {
            config.verbose_logging = true;
        }
    }
}

/// 获取搜索词
///
/// 优先使用位置参数；否则在交互模式下提示输入；两者都没有时输出用法并返回错误
pub fn resolve_query<R: BufRead, W: Write>(
    cli: &Cli,
    mut input: R,
    mut output: W,
) -> AppResult<String> {
    if let Some(query) = &cli.query {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput("Search query cannot be empty".into()));
        }
        return Ok(query.clone());
    }

    if !cli.interactive {
        let usage = Cli::command().render_help();
        let _ = writeln!(output, "{}", usage);
        return Err(AppError::InvalidInput("No search query provided".into()));
    }

    write!(output, "{}", PROMPT)
        .and_then(|_| output.flush())
        .map_err(|e| AppError::InvalidInput(format!("无法输出提示: {}", e)))?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| AppError::InvalidInput(format!("无法读取输入: {}", e)))?;

    let query = line.trim();
    if query.is_empty() {
        return Err(AppError::InvalidInput("Search query cannot be empty".into()));
    }
    Ok(query.to_string())
}

/// 在独立线程中执行阻塞读取，`interrupt` 先完成时返回 `AppError::Interrupted`
///
/// 线程不会被等待，进程退出时随之结束
pub async fn until_interrupted<T, F, I>(work: F, interrupt: I) -> AppResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> AppResult<T> + Send + 'static,
    I: Future,
{
    let (tx, rx) = tokio::sync::oneshot::channel();
    thread::spawn(move || {
        let _ = tx.send(work());
    });

    tokio::select! {
        result = rx => result.unwrap_or_else(|_| Err(AppError::InvalidInput("读取输入失败".into()))),
        _ = interrupt => Err(AppError::Interrupted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("reddit_scraper").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_positional_query_used_verbatim() {
        let cli = parse(&["rust vs go"]);
        let mut output = Vec::new();
        let query = resolve_query(&cli, Cursor::new(""), &mut output).unwrap();
        assert_eq!(query, "rust vs go");
        assert!(output.is_empty(), "不应显示提示");
    }

    #[test]
    fn test_interactive_prompt_is_trimmed() {
        let cli = parse(&["-i"]);
        let mut output = Vec::new();
        let query = resolve_query(&cli, Cursor::new("  python programming \n"), &mut output).unwrap();
        assert_eq!(query, "python programming");
        assert_eq!(String::from_utf8(output).unwrap(), PROMPT);
    }

    #[test]
    fn test_interactive_empty_input_is_invalid() {
        let cli = parse(&["--interactive"]);
        let err = resolve_query(&cli, Cursor::new("   \n"), Vec::new()).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_interactive_eof_is_invalid() {
        let cli = parse(&["-i"]);
        let err = resolve_query(&cli, Cursor::new(""), Vec::new()).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_no_query_prints_usage() {
        let cli = parse(&[]);
        let mut output = Vec::new();
        let err = resolve_query(&cli, Cursor::new("ignored\n"), &mut output).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert!(String::from_utf8(output).unwrap().contains("Usage"));
    }

    #[test]
    fn test_blank_positional_is_invalid() {
        let cli = parse(&["   "]);
        let err = resolve_query(&cli, Cursor::new(""), Vec::new()).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_interrupt_during_prompt_returns_interrupted() {
        let (_keep_open, blocked) = std::sync::mpsc::channel::<()>();
        let result = until_interrupted(
            move || {
                let _ = blocked.recv();
                Ok("never".to_string())
            },
            async {},
        )
        .await;
        assert!(matches!(result, Err(AppError::Interrupted)));
    }

    #[tokio::test]
    async fn test_prompt_completes_before_interrupt() {
        let cli = parse(&["-i"]);
        let result = until_interrupted(
            move || resolve_query(&cli, Cursor::new("rust vs go\n"), Vec::new()),
            std::future::pending::<()>(),
        )
        .await;
        assert_eq!(result.unwrap(), "rust vs go");
    }

    #[test]
    fn test_apply_overrides() {
        let cli = parse(&["--headless", "--output-dir", "out", "q"]);
        let mut config = Config::default();
        cli.apply_to(&mut config);
        assert!(config.headless);
        assert_eq!(config.output_dir, "out");
    }
}
