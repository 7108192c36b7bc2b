//! 構造化データ（JSON-LD）からのレビュー抽出
//!
//! `@type` が `Review`（大文字小文字を区別しない）のノードを
//! 木全体から再帰的に探し、1ノードにつき1件のレビューを生成する。
//! レビューとして採用したノードの内側も探索を続ける。

use crate::types::Review;
use serde_json::{Map, Value};

const REVIEW_TYPE: &str = "review";

/// JSON-LDペイロード文字列をパースしてレビューを抽出
///
/// 空文字列・不正なJSONは空のVecを返す（エラーにしない）。
///
/// # Examples
/// ```
/// use review_scraper_common::parse_structured_payload;
///
/// let payload = r#"{"@type": "Review", "author": {"name": "Jan"}, "reviewRating": {"ratingValue": 9}}"#;
/// let reviews = parse_structured_payload(payload);
/// assert_eq!(reviews.len(), 1);
/// assert_eq!(reviews[0].reviewer, "Jan");
/// assert_eq!(reviews[0].score, "9");
///
/// assert!(parse_structured_payload("{ not json").is_empty());
/// ```
pub fn parse_structured_payload(payload: &str) -> Vec<Review> {
    let payload = payload.trim();
    if payload.is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Value>(payload) {
        Ok(value) => extract_reviews_from_value(&value),
        Err(_) => Vec::new(),
    }
}

/// JSON値の木からレビューを抽出（文書順）
pub fn extract_reviews_from_value(value: &Value) -> Vec<Review> {
    let mut reviews = Vec::new();
    walk(value, &mut reviews);
    reviews
}

fn walk(value: &Value, out: &mut Vec<Review>) {
    match value {
        Value::Object(map) => {
            if is_review_node(map) {
                out.push(review_from_node(map));
            }
            for child in map.values() {
                walk(child, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(item, out);
            }
        }
        _ => {}
    }
}

/// `@type` は文字列、または文字列の配列
fn is_review_node(map: &Map<String, Value>) -> bool {
    match map.get("@type") {
        Some(Value::String(t)) => t.eq_ignore_ascii_case(REVIEW_TYPE),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .any(|t| t.eq_ignore_ascii_case(REVIEW_TYPE)),
        _ => false,
    }
}

fn review_from_node(map: &Map<String, Value>) -> Review {
    let reviewer = map.get("author").map(author_name).unwrap_or_default();

    let score = match map.get("reviewRating") {
        Some(Value::Object(rating)) => rating.get("ratingValue").map(scalar_text),
        Some(other) => Some(scalar_text(other)),
        None => None,
    }
    .unwrap_or_default();

    let comment = ["description", "reviewBody"]
        .iter()
        .filter_map(|key| map.get(*key))
        .map(scalar_text)
        .find(|text| !text.is_empty())
        .unwrap_or_default();

    Review::new(reviewer, score, comment)
}

/// 投稿者: 文字列 / {"name": ...} / それらの配列
fn author_name(author: &Value) -> String {
    match author {
        Value::Object(obj) => obj.get("name").map(scalar_text).unwrap_or_default(),
        Value::Array(items) => items
            .iter()
            .map(author_name)
            .filter(|name| !name.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        other => scalar_text(other),
    }
}

/// スカラー値を前後空白除去した文字列へ（null・オブジェクト・配列は空）
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
