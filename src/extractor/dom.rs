//! DOMヒューリスティックによるレビュー抽出
//!
//! レビューらしき要素（コンテナ）を選び、フィールドごとに
//! 候補セレクタを順に試して最初に空でないテキストを採用する。

use review_scraper_common::Review;
use scraper::{ElementRef, Html, Selector};

/// コンテナ候補（microdata → class名 → article）
pub const CONTAINER_SELECTOR: &str = r#"[itemtype*="Schema.org/Review"], [itemtype*="schema.org/Review"], .review, .review-item, article"#;

const REVIEWER_SELECTORS: &[&str] = &[
    "[itemprop=author]",
    "[itemprop='name']",
    ".reviewer-name",
    ".author",
    "header strong",
];

const SCORE_SELECTORS: &[&str] = &[
    "[itemprop='ratingValue']",
    "[itemprop='reviewRating']",
    ".rating",
    ".score",
    "[class*='star']",
];

const COMMENT_SELECTORS: &[&str] = &[
    "[itemprop='description']",
    "[itemprop='reviewBody']",
    ".review-text",
    ".comment",
    "[class*='content']",
];

lazy_static::lazy_static! {
    static ref CONTAINERS: Selector = Selector::parse(CONTAINER_SELECTOR).unwrap();
    static ref REVIEWER: Vec<Selector> = compile(REVIEWER_SELECTORS);
    static ref SCORE: Vec<Selector> = compile(SCORE_SELECTORS);
    static ref COMMENT: Vec<Selector> = compile(COMMENT_SELECTORS);
}

fn compile(patterns: &[&str]) -> Vec<Selector> {
    patterns
        .iter()
        .map(|p| Selector::parse(p).unwrap())
        .collect()
}

/// 文書からコンテナ単位でレビューを抽出（文書順）
///
/// 3フィールドすべてが空のコンテナは捨てる。
pub fn extract_dom_reviews(document: &Html) -> Vec<Review> {
    let mut reviews = Vec::new();
    let mut containers = 0usize;

    for container in document.select(&CONTAINERS) {
        containers += 1;

        let review = Review::new(
            first_text(container, &REVIEWER).unwrap_or_default(),
            first_text(container, &SCORE).unwrap_or_default(),
            first_text(container, &COMMENT).unwrap_or_default(),
        );

        if !review.is_blank() {
            reviews.push(review);
        }
    }

    tracing::debug!(containers, reviews = reviews.len(), "dom containers scanned");
    reviews
}

/// セレクタを順に試し、最初の一致要素のテキストが空でなければ採用
///
/// 各セレクタで見るのは最初に一致した子孫要素のみ。
fn first_text(container: ElementRef<'_>, selectors: &[Selector]) -> Option<String> {
    selectors.iter().find_map(|selector| {
        container
            .select(selector)
            .next()
            .map(element_text)
            .filter(|text| !text.is_empty())
    })
}

/// 子孫テキスト片を前後空白除去し、空でないものを空白1つで連結
pub fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> Vec<Review> {
        extract_dom_reviews(&Html::parse_document(html))
    }

    #[test]
    fn test_microdata_review() {
        let html = r#"
            <div itemscope itemtype="https://schema.org/Review">
                <span itemprop="author">Jan</span>
                <div itemprop="reviewRating"><span itemprop="ratingValue">9</span></div>
                <p itemprop="reviewBody">Snelle levering</p>
            </div>"#;
        assert_eq!(extract(html), vec![Review::new("Jan", "9", "Snelle levering")]);
    }

    #[test]
    fn test_class_based_review() {
        let html = r#"
            <div class="review-item">
                <div class="reviewer-name"> Piet </div>
                <div class="score">7,5</div>
                <div class="review-text">Goed geholpen</div>
            </div>"#;
        assert_eq!(extract(html), vec![Review::new("Piet", "7,5", "Goed geholpen")]);
    }

    #[test]
    fn test_selector_priority() {
        let html = r#"
            <div class="review">
                <span class="author">Second</span>
                <span itemprop="author">First</span>
            </div>"#;
        assert_eq!(extract(html)[0].reviewer, "First");
    }

    #[test]
    fn test_empty_first_match_falls_to_next_selector() {
        let html = r#"
            <div class="review">
                <span itemprop="author">   </span>
                <span itemprop="author">Hidden</span>
                <span class="author">Fallback</span>
            </div>"#;
        // 最初の一致が空なら次のセレクタへ（同じセレクタの2件目は見ない）
        assert_eq!(extract(html)[0].reviewer, "Fallback");
    }

    #[test]
    fn test_partial_fields_left_empty() {
        let html = r#"<article><div class="comment">Alleen tekst</div></article>"#;
        assert_eq!(extract(html), vec![Review::new("", "", "Alleen tekst")]);
    }

    #[test]
    fn test_blank_containers_discarded() {
        let html = r#"
            <article><p>geen velden</p></article>
            <div class="review"><span class="rating">  </span></div>
            <div class="review"><span class="rating">8</span></div>"#;
        assert_eq!(extract(html), vec![Review::new("", "8", "")]);
    }

    #[test]
    fn test_star_and_content_substrings() {
        let html = r#"
            <div class="review">
                <header><strong>Kees</strong></header>
                <div class="stars-wrapper">5</div>
                <div class="review-content">Top</div>
            </div>"#;
        assert_eq!(extract(html), vec![Review::new("Kees", "5", "Top")]);
    }

    #[test]
    fn test_nested_text_joined() {
        let html = r#"<div class="review"><p class="comment">Heel <b>erg</b>
            goed</p></div>"#;
        assert_eq!(extract(html)[0].comment, "Heel erg goed");
    }

    #[test]
    fn test_document_order_and_no_duplicates() {
        // .review かつ article の要素は1回だけ
        let html = r#"
            <article class="review"><span class="author">A</span></article>
            <div class="review-item"><span class="author">B</span></div>"#;
        let names: Vec<_> = extract(html).into_iter().map(|r| r.reviewer).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_container_itself_not_matched_as_field() {
        let html = r#"<div class="review comment"><span class="author">A</span></div>"#;
        assert_eq!(extract(html), vec![Review::new("A", "", "")]);
    }

    #[test]
    fn test_no_containers() {
        assert!(extract("<html><body><p>Niets</p></body></html>").is_empty());
    }
}
