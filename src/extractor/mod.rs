//! レビュー抽出
//!
//! 抽出方式を優先順に試し、最初に結果を返した方式を採用する:
//! 1. 構造化データ（JSON-LD）
//! 2. DOMヒューリスティック

mod dom;
mod structured;

pub use dom::{element_text, extract_dom_reviews, CONTAINER_SELECTOR};
pub use structured::extract_structured_reviews;

use review_scraper_common::Review;
use scraper::Html;

/// 抽出方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    StructuredData,
    Dom,
}

impl Strategy {
    /// 試行順
    pub const ORDERED: [Strategy; 2] = [Strategy::StructuredData, Strategy::Dom];

    pub fn extract(&self, document: &Html) -> Vec<Review> {
        match self {
            Strategy::StructuredData => extract_structured_reviews(document),
            Strategy::Dom => extract_dom_reviews(document),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::StructuredData => write!(f, "structured-data"),
            Strategy::Dom => write!(f, "dom"),
        }
    }
}

/// 1ページ分の抽出結果
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// 結果を返した方式（どれも空なら None）
    pub strategy: Option<Strategy>,
    pub reviews: Vec<Review>,
}

/// 方式を順に試し、最初の空でない結果を返す
pub fn extract_reviews(document: &Html) -> Extraction {
    for strategy in Strategy::ORDERED {
        let reviews = strategy.extract(document);
        if !reviews.is_empty() {
            tracing::debug!(%strategy, count = reviews.len(), "strategy matched");
            return Extraction {
                strategy: Some(strategy),
                reviews,
            };
        }
        tracing::debug!(%strategy, "strategy found nothing");
    }

    Extraction::default()
}
