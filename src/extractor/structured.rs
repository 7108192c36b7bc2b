use review_scraper_common::{parse_structured_payload, Review};
use scraper::{Html, Selector};

lazy_static::lazy_static! {
    static ref LD_JSON: Selector =
        Selector::parse(r#"script[type="application/ld+json"]"#).unwrap();
}

/// JSON-LDスクリプトブロックからレビューを抽出
///
/// 不正なJSONのブロックは読み飛ばす。
pub fn extract_structured_reviews(document: &Html) -> Vec<Review> {
    let mut reviews = Vec::new();
    let mut blocks = 0usize;

    for script in document.select(&LD_JSON) {
        blocks += 1;
        let payload: String = script.text().collect();
        let found = parse_structured_payload(&payload);
        if found.is_empty() {
            tracing::debug!(block = blocks, "ld+json block without reviews");
        }
        reviews.extend(found);
    }

    tracing::debug!(blocks, reviews = reviews.len(), "ld+json blocks scanned");
    reviews
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_blocks_and_malformed_skipped() {
        let html = r#"<html><head>
            <script type="application/ld+json">{"@type": "Review", "author": "A"}</script>
            <script type="application/ld+json">{ this is not json</script>
            <script type="application/ld+json"></script>
            <script type="application/ld+json">[{"@type": "Review", "author": "B"}]</script>
            <script type="text/javascript">{"@type": "Review", "author": "C"}</script>
        </head><body></body></html>"#;
        let reviews = extract_structured_reviews(&Html::parse_document(html));
        let names: Vec<_> = reviews.iter().map(|r| r.reviewer.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_no_blocks() {
        let document = Html::parse_document("<p>Geen data</p>");
        assert!(extract_structured_reviews(&document).is_empty());
    }
}
