use crate::error::Result;
use review_scraper_common::{Review, ReviewRow};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExport<'a> {
    source: &'a str,
    scraped_at: String,
    count: usize,
    reviews: Vec<ReviewRow>,
}

/// レビューをJSONファイルに保存（行形式は Excel と同じ）
///
/// レビューが0件なら何も書かずに `Ok(false)` を返す。
pub fn save_to_json(reviews: &[Review], output_path: &Path, source: &str) -> Result<bool> {
    if reviews.is_empty() {
        return Ok(false);
    }

    let payload = JsonExport {
        source,
        scraped_at: chrono::Local::now().to_rfc3339(),
        count: reviews.len(),
        reviews: reviews.iter().map(Review::to_row).collect(),
    };

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(output_path, json)?;
    Ok(true)
}
