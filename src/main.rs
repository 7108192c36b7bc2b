use clap::Parser;
use review_scraper::{cli, config, error, logging, runner};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Some(Commands::Config { show, set_user_agent, reset }) => {
            let mut config = config;

            if reset {
                config.reset()?;
                println!("✔ 設定を初期値に戻しました");
            }

            if let Some(ua) = set_user_agent {
                config.set_user_agent(ua)?;
                println!("✔ User-Agentを設定しました");
            }

            if show {
                println!("設定: {}", Config::config_path()?.display());
                println!("  User-Agent: {}", config.effective_user_agent());
                println!("  Accept-Language: {}", config.accept_language);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  ブラウザ待機: {}秒 (+{}秒)", config.browser_wait_seconds, config.browser_settle_seconds);
            }

            Ok(ExitCode::SUCCESS)
        }
        None => {
            let outcome = runner::run_scrape(&cli.scrape, &config).await?;
            Ok(ExitCode::from(outcome.exit_code()))
        }
    }
}
