//! Review Scraper Common Library
//!
//! レビュー型・構造化データ抽出・Excel生成の共通部分

pub mod types;
pub mod layout;
pub mod error;
pub mod structured;
pub mod export;

pub use types::{Review, ReviewRow, DEFAULT_COMMENT, DEFAULT_REVIEWER, DEFAULT_SCORE};
pub use layout::{ColumnDef, REVIEW_COLUMNS, SHEET_NAME};
pub use error::{Error, Result};
pub use structured::{extract_reviews_from_value, parse_structured_payload};
