pub mod excel;
pub mod json;

pub use excel::save_to_excel;
pub use json::save_to_json;

use crate::cli::ExportFormat;
use crate::error::Result;
use review_scraper_common::Review;
use std::path::{Path, PathBuf};

fn with_extension(output: &Path, extension: &str) -> PathBuf {
    let mut path = output.to_path_buf();
    path.set_extension(extension);
    path
}

/// 書き出し先1件分
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Excel(PathBuf),
    Json(PathBuf),
}

impl OutputTarget {
    pub fn path(&self) -> &Path {
        match self {
            OutputTarget::Excel(path) | OutputTarget::Json(path) => path,
        }
    }
}

/// 出力形式ごとの書き出し先
///
/// Excel は指定されたファイル名をそのまま使う。JSON は同じ名前で拡張子を
/// .json にしたもの。`both` で指定名が .json の場合のみ Excel 側を .xlsx にする。
pub fn output_targets(output: &Path, format: ExportFormat) -> Vec<OutputTarget> {
    let json_path = with_extension(output, "json");
    match format {
        ExportFormat::Excel => vec![OutputTarget::Excel(output.to_path_buf())],
        ExportFormat::Json => vec![OutputTarget::Json(json_path)],
        ExportFormat::Both => {
            let excel_path = if output == json_path {
                with_extension(output, "xlsx")
            } else {
                output.to_path_buf()
            };
            vec![OutputTarget::Excel(excel_path), OutputTarget::Json(json_path)]
        }
    }
}

/// レビューを指定形式で保存し、書き出したパスを返す
///
/// レビューが0件なら何も書かず空のVecを返す。
pub fn export_reviews(
    reviews: &[Review],
    format: ExportFormat,
    output: &Path,
    source: &str,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for target in output_targets(output, format) {
        let saved = match &target {
            OutputTarget::Excel(path) => save_to_excel(reviews, path)?,
            OutputTarget::Json(path) => save_to_json(reviews, path, source)?,
        };
        if saved {
            written.push(target.path().to_path_buf());
        }
    }

    Ok(written)
}
