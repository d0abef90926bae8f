//! Pulls the result text out of a fetched page.
//!
//! The page carries its results twice: as the `articleBody` of a JSON-LD
//! `NewsArticle`, and as styled number cells. The body is preferred; the
//! cells only cover the headline tiers.

use scraper::{ElementRef, Html, Selector};
use serde_json::Value;

use crate::parser::{NOISE_BACK2, NOISE_BACK3, ParsedPrizes};

/// Text every usable result article contains.
pub const FIRST_PRIZE_MARKER: &str = "รางวัลที่ 1";

const JSON_LD_SELECTOR: &str = r#"script[type="application/ld+json"]"#;
const FIRST_PRIZE_SELECTOR: &str = ".lotto_number--first";
const COLUMN_SELECTOR: &str = ".lottocheck_column";
const NUMBER_SELECTOR: &str = ".lotto_number";

pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid css selector")
}

/// `articleBody` of the first `NewsArticle` node on the page, provided it
/// mentions the first prize. Scripts that are not valid JSON are skipped.
pub fn extract_article_body(document: &Html) -> Option<String> {
    let scripts = selector(JSON_LD_SELECTOR);

    let article = document.select(&scripts).find_map(|script| {
        let raw = script.text().collect::<String>();
        let value: Value = serde_json::from_str(raw.trim()).ok()?;
        first_news_article(&value).cloned()
    })?;

    article
        .get("articleBody")
        .and_then(Value::as_str)
        .filter(|body| body.contains(FIRST_PRIZE_MARKER))
        .map(str::to_string)
}

fn first_news_article(value: &Value) -> Option<&Value> {
    match value {
        Value::Object(map) => {
            if is_news_article(map.get("@type")) {
                return Some(value);
            }
            map.get("@graph").and_then(first_news_article)
        }
        Value::Array(items) => items.iter().find_map(first_news_article),
        _ => None,
    }
}

fn is_news_article(node_type: Option<&Value>) -> bool {
    match node_type {
        Some(Value::String(kind)) => kind == "NewsArticle",
        Some(Value::Array(kinds)) => kinds
            .iter()
            .filter_map(Value::as_str)
            .any(|kind| kind == "NewsArticle"),
        _ => false,
    }
}

fn cell_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn is_digits(text: &str, width: usize) -> bool {
    text.len() == width && text.bytes().all(|b| b.is_ascii_digit())
}

/// Headline tiers read from the number cells of the page layout.
///
/// Column 2 holds front-3, column 3 back-3 and column 4 back-2. Pairs need
/// both cells present; `000` and `00` cells are dropped as noise.
pub fn extract_dom_prizes(document: &Html) -> ParsedPrizes {
    let mut prizes = ParsedPrizes {
        first_prize: document
            .select(&selector(FIRST_PRIZE_SELECTOR))
            .map(cell_text)
            .find(|text| is_digits(text, 6)),
        ..Default::default()
    };

    let number = selector(NUMBER_SELECTOR);
    let columns: Vec<Vec<String>> = document
        .select(&selector(COLUMN_SELECTOR))
        .map(|column| column.select(&number).map(cell_text).collect())
        .collect();

    let pair = |cells: Option<&Vec<String>>| match cells.map(Vec::as_slice) {
        Some([a, b, ..]) => Some([a.clone(), b.clone()]),
        _ => None,
    };
    prizes.front3 = pair(columns.get(1));
    prizes.back3 = pair(columns.get(2))
        .filter(|cells| !cells.iter().any(|c| c == NOISE_BACK3));
    prizes.back2 = columns
        .get(3)
        .and_then(|cells| cells.first())
        .filter(|text| !text.is_empty() && text.as_str() != NOISE_BACK2)
        .cloned();

    prizes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(json_ld: &str, body_html: &str) -> String {
        format!(
            "<html><head><script type=\"application/ld+json\">{json_ld}</script></head>\
             <body>{body_html}</body></html>"
        )
    }

    #[test]
    fn test_extracts_news_article_body() {
        let html = page(
            r#"{"@type":"NewsArticle","headline":"ตรวจหวย","articleBody":"รางวัลที่ 1 123456"}"#,
            "",
        );
        let body = extract_article_body(&parse_document(&html));
        assert_eq!(body.as_deref(), Some("รางวัลที่ 1 123456"));
    }

    #[test]
    fn test_extracts_from_graph_and_type_arrays() {
        let html = page(
            r#"{"@context":"https://schema.org","@graph":[
                {"@type":"BreadcrumbList"},
                {"@type":["NewsArticle","Article"],"articleBody":"รางวัลที่ 1 654321"}
            ]}"#,
            "",
        );
        let body = extract_article_body(&parse_document(&html));
        assert_eq!(body.as_deref(), Some("รางวัลที่ 1 654321"));
    }

    #[test]
    fn test_skips_invalid_json_blocks() {
        let html = format!(
            "<html><head>\
             <script type=\"application/ld+json\">{{not json</script>\
             <script type=\"application/ld+json\">{}</script>\
             <script type=\"application/ld+json\">{}</script>\
             </head><body></body></html>",
            r#"{"@type":"Organization","name":"Sanook"}"#,
            r#"{"@type":"NewsArticle","articleBody":"รางวัลที่ 1 111111"}"#,
        );
        let body = extract_article_body(&parse_document(&html));
        assert_eq!(body.as_deref(), Some("รางวัลที่ 1 111111"));
    }

    #[test]
    fn test_first_article_without_marker_means_fallback() {
        let html = format!(
            "<html><head>\
             <script type=\"application/ld+json\">{}</script>\
             <script type=\"application/ld+json\">{}</script>\
             </head><body></body></html>",
            r#"{"@type":"NewsArticle","articleBody":"ข่าวทั่วไป"}"#,
            r#"{"@type":"NewsArticle","articleBody":"รางวัลที่ 1 111111"}"#,
        );
        assert_eq!(extract_article_body(&parse_document(&html)), None);
    }

    #[test]
    fn test_no_article_body() {
        let html = page(r#"{"@type":"WebPage","name":"หน้าแรก"}"#, "");
        assert_eq!(extract_article_body(&parse_document(&html)), None);
    }

    #[test]
    fn test_dom_prizes_from_columns() {
        let html = page(
            "{}",
            r#"<div class="lottocheck_column"><strong class="lotto_number lotto_number--first"> 659214 </strong></div>
               <div class="lottocheck_column"><span class="lotto_number">119</span><span class="lotto_number">358</span></div>
               <div class="lottocheck_column"><span class="lotto_number">270</span><span class="lotto_number">851</span></div>
               <div class="lottocheck_column"><span class="lotto_number">26</span></div>"#,
        );
        let prizes = extract_dom_prizes(&parse_document(&html));
        assert_eq!(prizes.first_prize.as_deref(), Some("659214"));
        assert_eq!(prizes.front3, Some(["119".to_string(), "358".to_string()]));
        assert_eq!(prizes.back3, Some(["270".to_string(), "851".to_string()]));
        assert_eq!(prizes.back2.as_deref(), Some("26"));
        assert!(prizes.tier2.is_empty());
    }

    #[test]
    fn test_dom_pair_needs_two_cells() {
        let html = page(
            "{}",
            r#"<div class="lottocheck_column"></div>
               <div class="lottocheck_column"><span class="lotto_number">119</span></div>"#,
        );
        let prizes = extract_dom_prizes(&parse_document(&html));
        assert_eq!(prizes.first_prize, None);
        assert_eq!(prizes.front3, None);
        assert_eq!(prizes.back2, None);
    }

    #[test]
    fn test_dom_drops_noise_cells() {
        let html = page(
            "{}",
            r#"<div class="lottocheck_column"></div>
               <div class="lottocheck_column"><span class="lotto_number">119</span><span class="lotto_number">358</span></div>
               <div class="lottocheck_column"><span class="lotto_number">000</span><span class="lotto_number">000</span></div>
               <div class="lottocheck_column"><span class="lotto_number">00</span></div>"#,
        );
        let prizes = extract_dom_prizes(&parse_document(&html));
        assert_eq!(prizes.front3, Some(["119".to_string(), "358".to_string()]));
        assert_eq!(prizes.back3, None);
        assert_eq!(prizes.back2, None);
    }
}
