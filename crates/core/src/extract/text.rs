//! Markup helpers shared by the extractors.
//!
//! These work on raw text with targeted patterns. Nothing here builds a DOM
//! for the whole page.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("TAG regex"));

static CHAR_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#[0-9]{1,7}|#[xX][0-9A-Fa-f]{1,6}|[A-Za-z][A-Za-z0-9]{0,31});").expect("CHAR_REF regex")
});

static META_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<meta\s[^>]*>").expect("META_TAG regex"));

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("ATTRIBUTE regex")
});

/// Decode character references (`&amp;`, `&#39;`, `&eacute;`, ...).
///
/// Only the references are handed to the HTML parser; the text around them,
/// including any literal `<`, is left alone. Unknown names stay as written.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    CHAR_REF
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let reference = &caps[0];
            let decoded: String = Html::parse_fragment(reference).root_element().text().collect();
            if decoded.is_empty() { reference.to_string() } else { decoded }
        })
        .into_owned()
}

/// Remove anything that looks like a tag.
pub fn strip_tags(text: &str) -> String {
    TAG.replace_all(text, "").into_owned()
}

/// Decode, strip leftover markup and trim.
pub fn clean(text: &str) -> String {
    strip_tags(&decode_entities(text)).trim().to_string()
}

/// Attribute name/value pairs of a single start tag.
pub fn attributes(tag: &str) -> Vec<(String, String)> {
    ATTRIBUTE
        .captures_iter(tag)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str().to_ascii_lowercase();
            let value = caps.get(2).or_else(|| caps.get(3))?.as_str().to_string();
            Some((name, value))
        })
        .collect()
}

/// Value of `attr` in a start tag.
pub fn attribute(tag: &str, attr: &str) -> Option<String> {
    attributes(tag).into_iter().find(|(name, _)| name == attr).map(|(_, value)| value)
}

/// `content` of the first `<meta>` whose `property` or `name` equals `key`.
///
/// Attribute order and quoting style do not matter. The value is returned
/// raw, still entity-encoded.
pub fn meta_content(body: &str, key: &str) -> Option<String> {
    META_TAG.find_iter(body).find_map(|tag| {
        let attrs = attributes(tag.as_str());
        let matches_key = attrs
            .iter()
            .any(|(name, value)| (name == "property" || name == "name") && value.eq_ignore_ascii_case(key));
        if !matches_key {
            return None;
        }
        attrs.into_iter().find(|(name, _)| name == "content").map(|(_, value)| value)
    })
}
