//! レビューの型定義
//!
//! CLIとエクスポートで共有される型:
//! - Review: 抽出結果（空フィールドを許容）
//! - ReviewRow: 出力行（既定値を適用済み）

use serde::{Deserialize, Serialize};

/// 投稿者名が空の場合の既定値
pub const DEFAULT_REVIEWER: &str = "Anonymous";
/// スコアが空の場合の既定値
pub const DEFAULT_SCORE: &str = "N/A";
/// コメントが空の場合の既定値
pub const DEFAULT_COMMENT: &str = "No comment";

/// 1件のレビュー
///
/// 各フィールドは抽出したままの値を保持する。
/// 既定値の補完は `to_row` でのみ行う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    pub reviewer: String,
    pub score: String,
    pub comment: String,
}

impl Review {
    pub fn new(
        reviewer: impl Into<String>,
        score: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            reviewer: reviewer.into(),
            score: score.into(),
            comment: comment.into(),
        }
    }

    /// 3フィールドすべてが空（空白のみを含む）か
    pub fn is_blank(&self) -> bool {
        self.reviewer.trim().is_empty()
            && self.score.trim().is_empty()
            && self.comment.trim().is_empty()
    }

    /// 出力行に変換（空フィールドに既定値を補完）
    pub fn to_row(&self) -> ReviewRow {
        ReviewRow {
            reviewer_name: or_default(&self.reviewer, DEFAULT_REVIEWER),
            score: or_default(&self.score, DEFAULT_SCORE),
            comments: or_default(&self.comment, DEFAULT_COMMENT),
        }
    }
}

fn or_default(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// 出力行（列順は `REVIEW_COLUMNS` と一致）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRow {
    #[serde(rename = "Reviewer Name")]
    pub reviewer_name: String,
    #[serde(rename = "Score")]
    pub score: String,
    #[serde(rename = "Comments")]
    pub comments: String,
}

impl ReviewRow {
    /// 列順に並べたセル値
    pub fn cells(&self) -> [&str; 3] {
        [&self.reviewer_name, &self.score, &self.comments]
    }
}
