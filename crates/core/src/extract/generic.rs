//! `<title>` fallback used when no site-specific extractor answers.

use std::sync::LazyLock;

use regex::Regex;

use super::text::clean;
use super::{Extraction, Extractor};
use crate::Summary;

pub const TITLE_TEMPLATE: &str = "{color}{green}Title{color}: {bold}{title}{bold}";

static TITLE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<title[^>]*>([^<]+)</title>").expect("TITLE_TAG regex"));

/// Fallback that reads the page's `<title>` element.
///
/// Some sites emit a short placeholder title ahead of the real one, so when
/// several title tags are present the longest wins. Ties go to the earliest.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericExtractor;

impl GenericExtractor {
    /// Raw text of the longest title tag, before decoding or trimming.
    pub fn longest_title(body: &str) -> Option<&str> {
        TITLE_TAG
            .captures_iter(body)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .fold(None, |best: Option<&str>, candidate| match best {
                Some(current) if current.chars().count() >= candidate.chars().count() => Some(current),
                _ => Some(candidate),
            })
    }

    pub fn title(&self, body: &str) -> Option<Summary> {
        let title = clean(Self::longest_title(body)?);
        if title.is_empty() {
            return None;
        }
        Some(Summary::new(TITLE_TEMPLATE).field("title", title))
    }
}

impl Extractor for GenericExtractor {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn attempt(&self, _url: &str, body: &str) -> Extraction {
        match self.title(body) {
            Some(summary) => Extraction::Summary(summary),
            None => Extraction::NoMatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Style;

    fn title_of(body: &str) -> Option<String> {
        GenericExtractor.title(body).and_then(|s| s.get("title").map(str::to_string))
    }

    #[test]
    fn test_single_title() {
        let body = "<html><head><title>UC Santa Cruz Removes Catholic Mission Bell</title></head></html>";
        assert_eq!(
            title_of(body).as_deref(),
            Some("UC Santa Cruz Removes Catholic Mission Bell")
        );
    }

    #[test]
    fn test_title_with_attributes_and_whitespace() {
        let body = r#"<title data-rh="true">   Spaced   Out  </title>"#;
        assert_eq!(title_of(body).as_deref(), Some("Spaced   Out"));
    }

    #[test]
    fn test_longest_title_wins() {
        let body = "<title>A</title><svg><title>icon</title></svg><title>A much longer real article title</title>";
        assert_eq!(GenericExtractor::longest_title(body), Some("A much longer real article title"));
        assert_eq!(title_of(body).as_deref(), Some("A much longer real article title"));
    }

    #[test]
    fn test_tie_keeps_first() {
        assert_eq!(GenericExtractor::longest_title("<title>abc</title><title>xyz</title>"), Some("abc"));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let body = "<title>\u{e9}\u{e9}\u{e9}</title><title>abcd</title>";
        assert_eq!(GenericExtractor::longest_title(body), Some("abcd"));
    }

    #[test]
    fn test_entities_decoded() {
        assert_eq!(title_of("<title>Q&amp;A &#8211; Part 1</title>").as_deref(), Some("Q&A \u{2013} Part 1"));
    }

    #[test]
    fn test_no_title() {
        assert!(title_of("<html><body><h1>Heading only</h1></body></html>").is_none());
        assert!(title_of("<title></title>").is_none());
        assert!(title_of("<title>   </title>").is_none());
    }

    #[test]
    fn test_attempt() {
        assert!(matches!(
            GenericExtractor.attempt("https://example.com", "<title>x</title>"),
            Extraction::Summary(_)
        ));
        assert_eq!(GenericExtractor.attempt("https://example.com", "<p>x</p>"), Extraction::NoMatch);
    }

    #[test]
    fn test_render() {
        let summary = GenericExtractor.title("<title>Rust</title>").unwrap();
        assert_eq!(summary.render(Style::Plain), "Title: Rust");
    }
}
