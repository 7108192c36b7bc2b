//! Excel生成（CLI版）
//!
//! 共通ライブラリでバッファを生成してファイルに書き出す

use crate::error::{Result, ScraperError};
use review_scraper_common::export::excel_core::generate_excel_buffer;
use review_scraper_common::Review;
use std::path::Path;

/// レビューをExcelファイルに保存
///
/// レビューが0件なら何も書かずに `Ok(false)` を返す。
pub fn save_to_excel(reviews: &[Review], output_path: &Path) -> Result<bool> {
    if reviews.is_empty() {
        return Ok(false);
    }

    let buffer = generate_excel_buffer(reviews)
        .map_err(|e| ScraperError::ExcelGeneration(e.to_string()))?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_path, buffer)?;

    tracing::debug!(path = %output_path.display(), rows = reviews.len(), "excel written");
    Ok(true)
}
