//! ローカルHTTPサーバーを相手にした取得〜保存の統合テスト

use review_scraper::cli::{Engine, ExportFormat, ScrapeArgs};
use review_scraper::config::Config;
use review_scraper::error::ScraperError;
use review_scraper::fetcher::{HttpFetcher, PageFetcher};
use review_scraper::paginator::{scrape_reviews, ScrapeOptions, StopReason};
use review_scraper::runner::{run_scrape, RunOutcome};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;
use tempfile::tempdir;
use url::Url;

fn ld_page(start: usize, count: usize, next: bool) -> String {
    let reviews: Vec<String> = (start..start + count)
        .map(|i| {
            format!(
                r#"{{"@type": "Review", "author": {{"name": "Klant {i}"}}, "reviewRating": {{"ratingValue": {}}}, "description": "Review {i}"}}"#,
                i % 10 + 1
            )
        })
        .collect();
    let next_link = if next { r#"<link rel="next" href="?page=2">"# } else { "" };
    format!(
        r#"<html><head>{next_link}<script type="application/ld+json">{{"@type": "Organization", "review": [{}]}}</script></head><body></body></html>"#,
        reviews.join(",")
    )
}

/// パスごとに (ステータス, 本文) を返すサーバーを起動してベースURLを返す
///
/// 登録されていないパスは 404。
fn serve(routes: Vec<(&'static str, u16, String)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind失敗");
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            if reader.read_line(&mut request_line).is_err() {
                continue;
            }
            loop {
                let mut line = String::new();
                match reader.read_line(&mut line) {
                    Ok(0) | Err(_) => break,
                    Ok(_) if line == "\r\n" => break,
                    Ok(_) => {}
                }
            }

            let target = request_line.split_whitespace().nth(1).unwrap_or("/").to_string();
            let (status, body) = routes
                .iter()
                .find(|(path, _, _)| *path == target)
                .map(|(_, status, body)| (*status, body.clone()))
                .unwrap_or((404, String::new()));
            let reason = if status == 200 { "OK" } else { "Not Found" };

            let _ = write!(
                stream,
                "HTTP/1.1 {status} {reason}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.flush();
        }
    });

    format!("http://{}", addr)
}

fn args(url: String, output: std::path::PathBuf) -> ScrapeArgs {
    ScrapeArgs {
        url,
        pages: 10,
        output,
        format: ExportFormat::Excel,
        engine: Engine::Http,
    }
}

#[tokio::test]
async fn test_not_found_on_second_page_halts_with_first_page() {
    let base = serve(vec![("/reviews", 200, ld_page(0, 10, true)), ("/reviews?page=2", 404, String::new())]);
    let url = Url::parse(&format!("{}/reviews", base)).unwrap();
    let mut fetcher = HttpFetcher::new(&Config::default()).unwrap();

    let report = scrape_reviews(&mut fetcher, &url, &ScrapeOptions::default()).await;

    assert_eq!(report.reviews.len(), 10);
    assert_eq!(report.pages, 1);
    assert_eq!(report.stop_reason, StopReason::FetchFailed { page: 2 });
    assert_eq!(report.reviews[9].reviewer, "Klant 9");
}

#[tokio::test]
async fn test_fetch_rejects_non_success_status() {
    let base = serve(vec![]);
    let url = Url::parse(&format!("{}/missing", base)).unwrap();
    let mut fetcher = HttpFetcher::new(&Config::default()).unwrap();

    let result = fetcher.fetch(&url).await;

    assert!(matches!(result, Err(ScraperError::Http(_))));
}

#[tokio::test]
async fn test_fetch_returns_body() {
    let base = serve(vec![("/ok", 200, "<html><body>hallo</body></html>".to_string())]);
    let url = Url::parse(&format!("{}/ok", base)).unwrap();
    let mut fetcher = HttpFetcher::new(&Config::default()).unwrap();

    let body = fetcher.fetch(&url).await.unwrap();

    assert!(body.contains("hallo"));
}

#[tokio::test]
async fn test_run_with_no_reviews_exits_with_one() {
    let base = serve(vec![("/empty", 200, "<html><body><p>Geen reviews</p></body></html>".to_string())]);
    let dir = tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("reviews.xlsx");

    let outcome = run_scrape(&args(format!("{}/empty", base), output.clone()), &Config::default())
        .await
        .unwrap();

    assert_eq!(outcome, RunOutcome::NothingScraped);
    assert_eq!(outcome.exit_code(), 1);
    assert!(!output.exists(), "0件なのにファイルが作成された");
}

#[tokio::test]
async fn test_run_saves_reviews_and_exits_with_zero() {
    let base = serve(vec![("/reviews", 200, ld_page(0, 10, true)), ("/reviews?page=2", 200, ld_page(10, 3, false))]);
    let dir = tempdir().expect("Failed to create temp dir");
    let output = dir.path().join("reviews.xlsx");

    let outcome = run_scrape(&args(format!("{}/reviews", base), output.clone()), &Config::default())
        .await
        .unwrap();

    assert_eq!(outcome, RunOutcome::Saved { count: 13, paths: vec![output.clone()] });
    assert_eq!(outcome.exit_code(), 0);
    assert!(output.exists());
}
