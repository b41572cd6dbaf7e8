use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use reddit_scraper::cli::until_interrupted;
use reddit_scraper::utils::logging;
use reddit_scraper::{resolve_query, App, AppError, Cli, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let mut config = Config::from_env();
    cli.apply_to(&mut config);

    // 初始化日志
    logging::init(config.verbose_logging);

    let prompt_cli = cli.clone();
    let query = match until_interrupted(
        move || resolve_query(&prompt_cli, io::stdin().lock(), io::stdout()),
        tokio::signal::ctrl_c(),
    )
    .await
    {
        Ok(query) => query,
        Err(AppError::Interrupted) => {
            info!("Scraping interrupted by user");
            return Ok(());
        }
        Err(e) => {
            error!("Application error: {}", e);
            return Err(e.into());
        }
    };

    let app = App::new(config, query);

    let outcome = tokio::select! {
        result = app.run() => result,
        _ = tokio::signal::ctrl_c() => Err(AppError::Interrupted.into()),
    };

    match outcome {
        Ok(summary) => {
            info!("Scraping completed successfully");
            println!("{}", logging::render_summary(&summary.report));
            Ok(())
        }
        Err(e) if matches!(e.downcast_ref::<AppError>(), Some(AppError::Interrupted)) => {
            info!("Scraping interrupted by user");
            Ok(())
        }
        Err(e) => {
            error!("Application error: {:#}", e);
            Err(e)
        }
    }
}
