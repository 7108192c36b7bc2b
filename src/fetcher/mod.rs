//! ページ取得
//!
//! 1回の取得処理につき1つのフェッチャー（HTTPクライアント
//! またはブラウザタブ）を使い回す。

mod http;
#[cfg(feature = "browser")]
mod browser;

pub use http::HttpFetcher;
#[cfg(feature = "browser")]
pub use browser::BrowserFetcher;

use crate::cli::Engine;
use crate::config::Config;
use crate::error::Result;
#[cfg(not(feature = "browser"))]
use crate::error::ScraperError;
use url::Url;

const PAGE_PARAM: &str = "page";

/// ページHTMLの取得元
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    /// 取得方式名（ログ用）
    fn name(&self) -> &'static str;

    /// ページを取得して文書全体のHTMLを返す
    async fn fetch(&mut self, url: &Url) -> Result<String>;
}

/// `--engine` の選択結果
pub enum Fetcher {
    Http(HttpFetcher),
    #[cfg(feature = "browser")]
    Browser(BrowserFetcher),
}

impl PageFetcher for Fetcher {
    fn name(&self) -> &'static str {
        match self {
            Fetcher::Http(f) => f.name(),
            #[cfg(feature = "browser")]
            Fetcher::Browser(f) => f.name(),
        }
    }

    async fn fetch(&mut self, url: &Url) -> Result<String> {
        match self {
            Fetcher::Http(f) => f.fetch(url).await,
            #[cfg(feature = "browser")]
            Fetcher::Browser(f) => f.fetch(url).await,
        }
    }
}

/// 取得方式に応じてフェッチャーを用意
///
/// `Auto` はブラウザを優先し、起動できなければHTTPに切り替える。
pub fn connect(engine: Engine, config: &Config) -> Result<Fetcher> {
    match engine {
        Engine::Http => Ok(Fetcher::Http(HttpFetcher::new(config)?)),
        #[cfg(feature = "browser")]
        Engine::Browser => Ok(Fetcher::Browser(BrowserFetcher::launch(config)?)),
        #[cfg(not(feature = "browser"))]
        Engine::Browser => Err(ScraperError::Browser(
            "ブラウザ機能なしでビルドされています (`--features browser` で再ビルドしてください)".into(),
        )),
        #[cfg(feature = "browser")]
        Engine::Auto => match BrowserFetcher::launch(config) {
            Ok(browser) => Ok(Fetcher::Browser(browser)),
            Err(e) => {
                tracing::warn!(error = %e, "browser unavailable, falling back to http");
                Ok(Fetcher::Http(HttpFetcher::new(config)?))
            }
        },
        #[cfg(not(feature = "browser"))]
        Engine::Auto => Ok(Fetcher::Http(HttpFetcher::new(config)?)),
    }
}

/// n ページ目のURL
///
/// 1ページ目は元のURLのまま。2ページ目以降は `page` パラメータを
/// 設定する（既存の `page` は置き換える）。
pub fn page_url(base: &Url, page: u32) -> Url {
    if page <= 1 {
        return base.clone();
    }

    let kept: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| key != PAGE_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut url = base.clone();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(PAGE_PARAM, &page.to_string());
    url
}
