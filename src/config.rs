use crate::error::{Result, ScraperError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const USER_AGENT_ENV: &str = "REVIEW_SCRAPER_USER_AGENT";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9,nl;q=0.8";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub user_agent: String,
    pub accept_language: String,
    pub timeout_seconds: u64,
    /// ブラウザ: 要素出現を待つ上限
    pub browser_wait_seconds: u64,
    /// ブラウザ: 要素出現後の追加待機
    pub browser_settle_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.into(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.into(),
            timeout_seconds: 30,
            browser_wait_seconds: 15,
            browser_settle_seconds: 3,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ScraperError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("review-scraper").join("config.json"))
    }

    pub fn effective_user_agent(&self) -> String {
        // 環境変数を優先
        match std::env::var(USER_AGENT_ENV) {
            Ok(ua) if !ua.trim().is_empty() => ua,
            _ => self.user_agent.clone(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn browser_wait(&self) -> Duration {
        Duration::from_secs(self.browser_wait_seconds)
    }

    pub fn browser_settle(&self) -> Duration {
        Duration::from_secs(self.browser_settle_seconds)
    }

    pub fn set_user_agent(&mut self, user_agent: String) -> Result<()> {
        if user_agent.trim().is_empty() {
            return Err(ScraperError::Config("User-Agentが空です".into()));
        }
        self.user_agent = user_agent;
        self.save()
    }

    pub fn reset(&mut self) -> Result<()> {
        *self = Self::default();
        self.save()
    }
}
