//! シートレイアウト定義
//!
//! Excel出力のシート名・列見出し・列幅

/// 出力シート名
pub const SHEET_NAME: &str = "Reviews";

/// 列定義
#[derive(Debug, Clone, Copy)]
pub struct ColumnDef {
    pub header: &'static str,
    /// Excel列幅（文字数単位）
    pub width: f64,
    /// 折り返し表示
    pub wrap: bool,
}

/// 出力列（この順序で書き出す）
pub const REVIEW_COLUMNS: [ColumnDef; 3] = [
    ColumnDef { header: "Reviewer Name", width: 24.0, wrap: false },
    ColumnDef { header: "Score", width: 8.0, wrap: false },
    ColumnDef { header: "Comments", width: 80.0, wrap: true },
];
