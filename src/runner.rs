//! レビュー取得から保存までの一連の処理

use crate::cli::{Engine, ScrapeArgs};
use crate::config::Config;
use crate::error::Result;
use crate::export;
use crate::fetcher::{self, HttpFetcher, PageFetcher};
use crate::paginator::{self, ScrapeOptions, ScrapeReport, StopReason};
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// 実行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Saved { count: usize, paths: Vec<PathBuf> },
    NothingScraped,
}

impl RunOutcome {
    /// プロセス終了コード（保存できれば0、0件なら1）
    pub fn exit_code(&self) -> u8 {
        match self {
            RunOutcome::Saved { .. } => 0,
            RunOutcome::NothingScraped => 1,
        }
    }
}

pub async fn run_scrape(args: &ScrapeArgs, config: &Config) -> Result<RunOutcome> {
    println!("🔎 review-scraper - レビュー取得\n");

    let url = Url::parse(&args.url)?;
    let options = ScrapeOptions {
        max_pages: args.pages,
        ..Default::default()
    };

    // 1. 取得
    println!("[1/2] レビューを取得中... (最大{}ページ)", options.max_pages);
    let mut fetcher = fetcher::connect(args.engine, config)?;
    let mut report = scrape_with_spinner(&mut fetcher, &url, &options).await;

    if needs_http_retry(args.engine, fetcher.name(), &report) {
        drop(fetcher);
        tracing::warn!(reason = %report.stop_reason, "browser run found nothing, retrying over http");
        let mut http = HttpFetcher::new(config)?;
        report = scrape_with_spinner(&mut http, &url, &options).await;
    }

    println!(
        "✔ {}件のレビューを取得 ({}ページ, {})\n",
        report.reviews.len(),
        report.pages,
        report.stop_reason
    );

    if report.reviews.is_empty() {
        println!("レビューを取得できませんでした。URLまたはセレクタを確認してください。");
        return Ok(RunOutcome::NothingScraped);
    }

    // 2. 保存
    println!("[2/2] 保存中...");
    let paths = export::export_reviews(&report.reviews, args.format, &args.output, url.as_str())?;
    for path in &paths {
        println!("✔ 出力: {}", path.display());
    }

    println!("\n✅ {}件のレビューを保存しました", report.reviews.len());
    Ok(RunOutcome::Saved {
        count: report.reviews.len(),
        paths,
    })
}

async fn scrape_with_spinner<F: PageFetcher>(
    fetcher: &mut F,
    url: &Url,
    options: &ScrapeOptions,
) -> ScrapeReport {
    let engine = fetcher.name();
    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(120));
    let report = paginator::scrape_reviews_with_progress(fetcher, url, options, |page| {
        spinner.set_message(format!("{}ページ目を取得中 ({})", page, engine));
    })
    .await;
    spinner.finish_and_clear();
    report
}

/// `auto` でブラウザが1ページ目から何も得られなかった場合はHTTPでやり直す
pub fn needs_http_retry(engine: Engine, fetcher_name: &str, report: &ScrapeReport) -> bool {
    engine == Engine::Auto
        && fetcher_name == "browser"
        && report.reviews.is_empty()
        && matches!(
            report.stop_reason,
            StopReason::EmptyPage { page: 1 } | StopReason::FetchFailed { page: 1 }
        )
}
