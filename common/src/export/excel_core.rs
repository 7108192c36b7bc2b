//! Excel生成（共通ライブラリ）
//!
//! layout.rs の定義を使用してレビュー一覧シートを生成

use crate::error::{Error, Result};
use crate::layout::{REVIEW_COLUMNS, SHEET_NAME};
use crate::types::Review;
use rust_xlsxwriter::*;

/// Excelをバッファに生成
///
/// 1行目に見出し、2行目以降にレビューを1件1行で書き出す。
/// 空フィールドは `Review::to_row` の既定値で埋める。
///
/// # Arguments
/// * `reviews` - 出力するレビュー（この順序で行になる）
pub fn generate_excel_buffer(reviews: &[Review]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let value_format = Format::new().set_align(FormatAlign::Top);
    let wrap_format = Format::new().set_align(FormatAlign::Top).set_text_wrap();

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| Error::Excel(format!("シート名設定エラー: {}", e)))?;

    for (col, column) in REVIEW_COLUMNS.iter().enumerate() {
        let col = col as u16;
        worksheet
            .set_column_width(col, column.width)
            .map_err(|e| Error::Excel(format!("列幅設定エラー: {}", e)))?;
        worksheet
            .write_string_with_format(0, col, column.header, &header_format)
            .map_err(|e| Error::Excel(format!("見出し書き込みエラー: {}", e)))?;
    }

    for (idx, review) in reviews.iter().enumerate() {
        let row_num = idx as u32 + 1;
        let row = review.to_row();

        for (col, (value, column)) in row.cells().iter().zip(REVIEW_COLUMNS.iter()).enumerate() {
            let format = if column.wrap { &wrap_format } else { &value_format };
            worksheet
                .write_string_with_format(row_num, col as u16, *value, format)
                .map_err(|e| Error::Excel(format!("値書き込みエラー: {}", e)))?;
        }
    }

    // 見出し行を固定
    worksheet
        .set_freeze_panes(1, 0)
        .map_err(|e| Error::Excel(format!("ウィンドウ枠固定エラー: {}", e)))?;

    workbook
        .save_to_buffer()
        .map_err(|e| Error::Excel(format!("Excel保存エラー: {}", e)))
}
