//! ヘッドレスブラウザでページを取得
//!
//! ページ内スクリプト実行後のDOMを読む。ブラウザとタブは
//! 1回の取得処理の間だけ保持し、drop時に終了する。

use super::PageFetcher;
use crate::config::Config;
use crate::error::{Result, ScraperError};
use crate::extractor::CONTAINER_SELECTOR;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

const LD_JSON_SELECTOR: &str = r#"script[type="application/ld+json"]"#;

pub struct BrowserFetcher {
    // tab より後に drop されるよう browser を後ろに置く
    tab: Arc<Tab>,
    _browser: Browser,
    wait: Duration,
    settle: Duration,
}

impl BrowserFetcher {
    pub fn launch(config: &Config) -> Result<Self> {
        let (browser, tab) = start(config).map_err(browser_error)?;
        tracing::info!("headless browser started");
        Ok(Self {
            tab,
            _browser: browser,
            wait: config.browser_wait(),
            settle: config.browser_settle(),
        })
    }

    fn render(&self, url: &Url) -> anyhow::Result<String> {
        self.tab.navigate_to(url.as_str())?;
        self.tab.wait_until_navigated()?;

        // レビュー要素の出現を待つ（タイムアウトしてもそのまま読む）
        let selector = format!("{}, {}", LD_JSON_SELECTOR, CONTAINER_SELECTOR);
        if let Err(e) = self.tab.wait_for_element_with_custom_timeout(&selector, self.wait) {
            tracing::warn!(%url, error = %e, "review elements did not appear in time");
        }

        std::thread::sleep(self.settle);
        self.tab.get_content()
    }
}

fn start(config: &Config) -> anyhow::Result<(Browser, Arc<Tab>)> {
    let options = LaunchOptions::default_builder()
        .headless(true)
        .sandbox(false)
        .idle_browser_timeout(config.timeout() + config.browser_wait() + config.browser_settle())
        .build()
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let browser = Browser::new(options)?;
    let tab = browser.new_tab()?;
    tab.set_user_agent(
        &config.effective_user_agent(),
        Some(&config.accept_language),
        None,
    )?;
    tab.set_default_timeout(config.timeout());
    Ok((browser, tab))
}

fn browser_error(e: anyhow::Error) -> ScraperError {
    ScraperError::Browser(e.to_string())
}

impl PageFetcher for BrowserFetcher {
    fn name(&self) -> &'static str {
        "browser"
    }

    async fn fetch(&mut self, url: &Url) -> Result<String> {
        tracing::debug!(%url, "browser navigate");
        tokio::task::block_in_place(|| self.render(url)).map_err(browser_error)
    }
}
