use crate::config::selectors::SelectorSet;
use crate::domain::model::ListingRecord;
use crate::utils::error::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Parses listing and detail documents with a compiled selector set.
///
/// Parsing never fails: an empty or structurally incompatible document
/// yields an empty sequence, and a listing node missing its title or link
/// is dropped rather than surfaced as a partial record. Document order is
/// preserved throughout; it encodes the source's own ranking.
pub struct ListingParser {
    listing_item: Selector,
    title: Selector,
    link: Selector,
    thumbnail: Selector,
    inline_summary: Selector,
    detail_summary: Selector,
    base: Url,
}

impl ListingParser {
    pub fn new(selectors: &SelectorSet, base: Url) -> Result<Self> {
        Ok(Self {
            listing_item: compile_selector("selectors.listing_item", &selectors.listing_item)?,
            title: compile_selector("selectors.title", &selectors.title)?,
            link: compile_selector("selectors.link", &selectors.link)?,
            thumbnail: compile_selector("selectors.thumbnail", &selectors.thumbnail)?,
            inline_summary: compile_selector(
                "selectors.inline_summary",
                &selectors.inline_summary,
            )?,
            detail_summary: compile_selector(
                "selectors.detail_summary",
                &selectors.detail_summary,
            )?,
            base,
        })
    }

    /// 解析列表頁，最多回傳 limit 筆
    pub fn parse(&self, html: &str, limit: usize) -> Vec<ListingRecord> {
        let document = Html::parse_document(html);
        let mut records = Vec::new();

        for item in document.select(&self.listing_item) {
            if records.len() >= limit {
                break;
            }
            if let Some(record) = self.parse_item(&item) {
                records.push(record);
            }
        }

        records
    }

    /// Extracts the supplementary description from a detail page.
    pub fn parse_detail_summary(&self, html: &str) -> Option<String> {
        let document = Html::parse_document(html);
        let node = document.select(&self.detail_summary).next()?;
        non_empty_text(&node)
    }

    fn parse_item(&self, item: &ElementRef) -> Option<ListingRecord> {
        let title = item
            .select(&self.title)
            .next()
            .and_then(|node| non_empty_text(&node))?;

        let href = item
            .select(&self.link)
            .next()
            .and_then(|node| node.value().attr("href"))?;
        // Relative hrefs are joined against the source origin.
        let detail_link = self.base.join(href).ok()?;

        // Last <img> wins: the site's lazy loader keeps a placeholder in
        // the first tag and the real image in the final one.
        let thumbnail_url = item
            .select(&self.thumbnail)
            .last()
            .and_then(|img| img.value().attr("src"))
            .and_then(|src| self.base.join(src).ok());

        let inline_summary = item
            .select(&self.inline_summary)
            .next()
            .and_then(|node| non_empty_text(&node));

        Some(ListingRecord {
            title,
            detail_link,
            thumbnail_url,
            inline_summary,
        })
    }
}

fn compile_selector(field: &str, value: &str) -> Result<Selector> {
    Selector::parse(value).map_err(|e| ScrapeError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: format!("Invalid CSS selector: {}", e),
    })
}

fn non_empty_text(node: &ElementRef) -> Option<String> {
    let text = node.text().collect::<String>().trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_selectors() -> SelectorSet {
        SelectorSet {
            listing_item: "li.item".to_string(),
            title: "span.title".to_string(),
            link: "a.detail".to_string(),
            thumbnail: "img".to_string(),
            inline_summary: "p.desc".to_string(),
            detail_summary: "div.summary".to_string(),
        }
    }

    fn test_parser() -> ListingParser {
        let base = Url::parse("https://recipes.example.com").unwrap();
        ListingParser::new(&test_selectors(), base).unwrap()
    }

    fn listing_page() -> &'static str {
        r#"<html><body><ul>
            <li class="item">
                <a class="detail" href="/recipe/1"><span class="title">Kimchi Stew</span></a>
                <img src="/img/placeholder.gif"><img src="/img/1.jpg">
                <p class="desc">A classic.</p>
            </li>
            <li class="item">
                <a class="detail" href="https://recipes.example.com/recipe/2">
                    <span class="title">Bibimbap</span>
                </a>
            </li>
            <li class="item">
                <a class="detail" href="/recipe/3"><span class="title">Bulgogi</span></a>
            </li>
        </ul></body></html>"#
    }

    #[test]
    fn test_parse_preserves_document_order() {
        let records = test_parser().parse(listing_page(), 10);

        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Kimchi Stew", "Bibimbap", "Bulgogi"]);
    }

    #[test]
    fn test_parse_resolves_relative_links_against_base() {
        let records = test_parser().parse(listing_page(), 10);

        assert_eq!(
            records[0].detail_link.as_str(),
            "https://recipes.example.com/recipe/1"
        );
        assert_eq!(
            records[1].detail_link.as_str(),
            "https://recipes.example.com/recipe/2"
        );
    }

    #[test]
    fn test_parse_prefers_last_img_for_thumbnail() {
        let records = test_parser().parse(listing_page(), 10);

        assert_eq!(
            records[0].thumbnail_url.as_ref().unwrap().as_str(),
            "https://recipes.example.com/img/1.jpg"
        );
        assert!(records[1].thumbnail_url.is_none());
    }

    #[test]
    fn test_parse_extracts_optional_inline_summary() {
        let records = test_parser().parse(listing_page(), 10);

        assert_eq!(records[0].inline_summary.as_deref(), Some("A classic."));
        assert!(records[1].inline_summary.is_none());
    }

    #[test]
    fn test_parse_truncates_to_limit() {
        let records = test_parser().parse(listing_page(), 2);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Kimchi Stew");
        assert_eq!(records[1].title, "Bibimbap");
    }

    #[test]
    fn test_parse_with_zero_limit_returns_nothing() {
        assert!(test_parser().parse(listing_page(), 0).is_empty());
    }

    #[test]
    fn test_parse_drops_malformed_items() {
        let html = r#"<html><body><ul>
            <li class="item">
                <a class="detail" href="/recipe/1"><span class="title">Valid</span></a>
            </li>
            <li class="item"><span class="title">No link here</span></li>
            <li class="item"><a class="detail" href="/recipe/3"><span class="title">   </span></a></li>
            <li class="item"><a class="detail" href="/recipe/4"></a></li>
        </ul></body></html>"#;

        let records = test_parser().parse(html, 10);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Valid");
    }

    #[test]
    fn test_malformed_items_do_not_consume_the_limit() {
        let html = r#"<html><body><ul>
            <li class="item"><span class="title">Broken</span></li>
            <li class="item">
                <a class="detail" href="/recipe/1"><span class="title">First</span></a>
            </li>
            <li class="item">
                <a class="detail" href="/recipe/2"><span class="title">Second</span></a>
            </li>
        </ul></body></html>"#;

        let records = test_parser().parse(html, 2);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "First");
        assert_eq!(records[1].title, "Second");
    }

    #[test]
    fn test_parse_incompatible_document_returns_empty() {
        assert!(test_parser().parse("", 10).is_empty());
        assert!(test_parser().parse("not html at all", 10).is_empty());
        assert!(test_parser()
            .parse("<html><body><p>no listings</p></body></html>", 10)
            .is_empty());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let parser = test_parser();
        let first = parser.parse(listing_page(), 10);
        let second = parser.parse(listing_page(), 10);
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_detail_summary() {
        let parser = test_parser();

        let html = r#"<html><body>
            <div class="summary">  Rich beef broth simmered overnight.  </div>
        </body></html>"#;
        assert_eq!(
            parser.parse_detail_summary(html).as_deref(),
            Some("Rich beef broth simmered overnight.")
        );

        assert!(parser.parse_detail_summary("<html></html>").is_none());
        assert!(parser
            .parse_detail_summary(r#"<div class="summary">   </div>"#)
            .is_none());
    }

    #[test]
    fn test_invalid_selector_is_a_config_error() {
        let mut selectors = test_selectors();
        selectors.listing_item = ":::".to_string();
        let base = Url::parse("https://recipes.example.com").unwrap();
        assert!(ListingParser::new(&selectors, base).is_err());
    }
}
