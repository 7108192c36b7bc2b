use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("URLが不正です: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ブラウザエラー: {0}")]
    Browser(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] review_scraper_common::Error),
}

pub type Result<T> = std::result::Result<T, ScraperError>;
