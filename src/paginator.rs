//! ページ送りしながらレビューを収集
//!
//! 1ページ目から順に取得し、以下のいずれかで停止する:
//! - 取得失敗（それまでの結果は保持）
//! - レビュー0件のページ
//! - 次ページの手がかりがない
//! - ページのレビュー数がしきい値未満
//! - 最大ページ数に到達

use crate::extractor::{extract_reviews, Extraction};
use crate::fetcher::{page_url, PageFetcher};
use review_scraper_common::Review;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// これ未満のレビュー数なら最終ページとみなす
pub const FULL_PAGE_THRESHOLD: usize = 10;

pub const DEFAULT_MAX_PAGES: u32 = 10;

lazy_static::lazy_static! {
    static ref NEXT_LINK: Selector = Selector::parse("link[rel=next], a[rel=next]").unwrap();
    static ref NEXT_CONTROL: Selector =
        Selector::parse(".pagination .next, .pager .next, a[aria-label='Next']").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub max_pages: u32,
    pub full_page_threshold: usize,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            full_page_threshold: FULL_PAGE_THRESHOLD,
        }
    }
}

/// 停止理由
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    FetchFailed { page: u32 },
    EmptyPage { page: u32 },
    NoNextPage { page: u32 },
    ShortPage { page: u32, count: usize },
    MaxPages,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::FetchFailed { page } => write!(f, "{}ページ目の取得に失敗", page),
            StopReason::EmptyPage { page } => write!(f, "{}ページ目にレビューなし", page),
            StopReason::NoNextPage { page } => write!(f, "{}ページ目が最終ページ", page),
            StopReason::ShortPage { page, count } => {
                write!(f, "{}ページ目のレビューが{}件のみ", page, count)
            }
            StopReason::MaxPages => write!(f, "最大ページ数に到達"),
        }
    }
}

/// 収集結果
#[derive(Debug, Clone)]
pub struct ScrapeReport {
    pub reviews: Vec<Review>,
    /// レビューを取得できたページ数
    pub pages: u32,
    pub stop_reason: StopReason,
}

/// 1ページの解析結果
#[derive(Debug, Clone)]
pub struct PageResult {
    pub extraction: Extraction,
    pub has_next: bool,
}

/// HTMLを解析してレビューと次ページの有無を得る
pub fn parse_page(html: &str) -> PageResult {
    let document = Html::parse_document(html);
    PageResult {
        extraction: extract_reviews(&document),
        has_next: has_next_page(&document),
    }
}

/// 次ページの手がかり: rel=next のリンク、または無効化されていない「次へ」
pub fn has_next_page(document: &Html) -> bool {
    if document.select(&NEXT_LINK).next().is_some() {
        return true;
    }

    document.select(&NEXT_CONTROL).any(|control| !is_disabled(control))
}

fn is_disabled(element: ElementRef<'_>) -> bool {
    let el = element.value();
    el.classes().any(|c| c == "disabled")
        || el.attr("disabled").is_some()
        || el
            .attr("aria-disabled")
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

pub async fn scrape_reviews<F: PageFetcher>(
    fetcher: &mut F,
    url: &Url,
    options: &ScrapeOptions,
) -> ScrapeReport {
    scrape_reviews_with_progress(fetcher, url, options, |_| {}).await
}

/// レビューを収集（ページ取得前に `on_page` を呼ぶ）
pub async fn scrape_reviews_with_progress<F, P>(
    fetcher: &mut F,
    url: &Url,
    options: &ScrapeOptions,
    mut on_page: P,
) -> ScrapeReport
where
    F: PageFetcher,
    P: FnMut(u32),
{
    let mut reviews = Vec::new();
    let mut pages = 0;

    for page in 1..=options.max_pages {
        on_page(page);
        let target = page_url(url, page);

        let html = match fetcher.fetch(&target).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(page, url = %target, error = %e, fetcher = fetcher.name(), "fetch failed, stopping");
                return finish(reviews, pages, StopReason::FetchFailed { page });
            }
        };

        let PageResult { extraction, has_next } = parse_page(&html);
        let count = extraction.reviews.len();

        if count == 0 {
            return finish(reviews, pages, StopReason::EmptyPage { page });
        }

        tracing::info!(
            page,
            count,
            strategy = ?extraction.strategy,
            has_next,
            "page scraped"
        );
        reviews.extend(extraction.reviews);
        pages = page;

        if !has_next {
            return finish(reviews, pages, StopReason::NoNextPage { page });
        }
        if count < options.full_page_threshold {
            return finish(reviews, pages, StopReason::ShortPage { page, count });
        }
    }

    finish(reviews, pages, StopReason::MaxPages)
}

fn finish(reviews: Vec<Review>, pages: u32, stop_reason: StopReason) -> ScrapeReport {
    tracing::info!(total = reviews.len(), pages, reason = %stop_reason, "pagination stopped");
    ScrapeReport {
        reviews,
        pages,
        stop_reason,
    }
}
