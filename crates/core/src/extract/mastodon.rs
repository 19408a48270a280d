//! Mastodon statuses, read from the profile and Open Graph meta tags.

use super::text::{decode_entities, meta_content};
use super::{Extraction, Extractor};
use crate::Summary;

pub const STATUS_TEMPLATE: &str = "{color}{green}{user}{color}: {bold}{status}{bold}";

/// Mastodon status pages: the author's handle and the post text.
#[derive(Debug, Clone, Copy, Default)]
pub struct MastodonExtractor;

impl MastodonExtractor {
    pub fn status(&self, body: &str) -> Option<Summary> {
        let user = field(body, "profile:username")?;
        let status = field(body, "og:description")?;
        Some(Summary::new(STATUS_TEMPLATE).field("user", user).field("status", status))
    }
}

fn field(body: &str, key: &str) -> Option<String> {
    let value = decode_entities(&meta_content(body, key)?).trim().to_string();
    (!value.is_empty()).then_some(value)
}

impl Extractor for MastodonExtractor {
    fn name(&self) -> &'static str {
        "mastodon"
    }

    fn attempt(&self, _url: &str, body: &str) -> Extraction {
        match self.status(body) {
            Some(summary) => Extraction::Summary(summary),
            None => Extraction::NoMatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Style;

    const STATUS_PAGE: &str = concat!(
        r#"<meta content="Ferris (@ferris@hachyderm.io)" property="og:title">"#,
        r#"<meta content="  Shipping 1.0 &amp; it&#39;s great  " property="og:description">"#,
        r#"<meta content="ferris@hachyderm.io" property="profile:username">"#,
        "<title>Ferris: &quot;Shipping&quot; - Hachyderm</title>"
    );

    #[test]
    fn test_status() {
        let summary = MastodonExtractor.status(STATUS_PAGE).unwrap();
        assert_eq!(summary.get("user"), Some("ferris@hachyderm.io"));
        assert_eq!(summary.get("status"), Some("Shipping 1.0 & it's great"));
        assert_eq!(summary.render(Style::Plain), "ferris@hachyderm.io: Shipping 1.0 & it's great");
    }

    #[test]
    fn test_missing_username() {
        let body = r#"<meta property="og:description" content="An ordinary article">"#;
        assert_eq!(MastodonExtractor.attempt("https://example.com", body), Extraction::NoMatch);
    }

    #[test]
    fn test_missing_description() {
        let body = r#"<meta content="ferris@hachyderm.io" property="profile:username">"#;
        assert_eq!(MastodonExtractor.attempt("https://example.com", body), Extraction::NoMatch);
    }
}
