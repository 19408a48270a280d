//! Federated Lemmy posts.
//!
//! A post viewed through another instance lives at `/post/{host}/{id}`; the
//! extractor points the resolver at the copy on the instance it was fetched
//! from instead of reading the mirror page.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::text::meta_content;
use super::{Extraction, Extractor};

static POST_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/post/(?P<host>[^/]+)/(?P<id>\d+)").expect("POST_PATH regex"));

/// Lemmy instances route federated posts through `/post/{instance}/{id}`
/// paths whose pages carry no usable title. Those are redirected to the
/// plain `/post/{id}` page on the same host.
#[derive(Debug, Clone, Copy, Default)]
pub struct LemmyExtractor;

impl LemmyExtractor {
    /// Whether the page declares itself as served by Lemmy.
    pub fn is_lemmy(body: &str) -> bool {
        meta_content(body, "keywords").is_some_and(|keywords| {
            keywords.split(|c: char| c == ',' || c.is_whitespace()).any(|k| k.eq_ignore_ascii_case("lemmy"))
        })
    }

    /// Canonical same-host post URL for a federated post path.
    pub fn post_url(url: &str) -> Option<String> {
        let mut parsed = Url::parse(url).ok()?;
        let id = POST_PATH.captures(parsed.path())?.name("id")?.as_str().to_string();

        parsed.set_path(&format!("/post/{id}"));
        parsed.set_query(None);
        parsed.set_fragment(None);
        Some(parsed.to_string())
    }
}

impl Extractor for LemmyExtractor {
    fn name(&self) -> &'static str {
        "lemmy"
    }

    fn attempt(&self, url: &str, body: &str) -> Extraction {
        if !Self::is_lemmy(body) {
            return Extraction::NoMatch;
        }
        match Self::post_url(url) {
            Some(post) => Extraction::Follow(post),
            None => {
                tracing::debug!(url, "lemmy page without a federated post path");
                Extraction::NoMatch
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEMMY_HEAD: &str = r#"<head><meta name="Keywords" content="Lemmy,link aggregator,fediverse"><title>Lemmy</title></head>"#;

    #[test]
    fn test_detects_marker() {
        assert!(LemmyExtractor::is_lemmy(LEMMY_HEAD));
        assert!(!LemmyExtractor::is_lemmy(r#"<meta name="keywords" content="lemmyish, other">"#));
        assert!(!LemmyExtractor::is_lemmy("<title>Not lemmy</title>"));
    }

    #[test]
    fn test_post_url() {
        assert_eq!(
            LemmyExtractor::post_url("https://lemmy.world/post/lemmy.ml/12345?scrollToComments=true#top").as_deref(),
            Some("https://lemmy.world/post/12345")
        );
        assert_eq!(
            LemmyExtractor::post_url("http://127.0.0.1:8080/post/beehaw.org/7").as_deref(),
            Some("http://127.0.0.1:8080/post/7")
        );
    }

    #[test]
    fn test_post_url_requires_shape() {
        assert_eq!(LemmyExtractor::post_url("https://lemmy.world/post/12345"), None);
        assert_eq!(LemmyExtractor::post_url("https://lemmy.world/post/lemmy.ml/abc"), None);
        assert_eq!(LemmyExtractor::post_url("https://lemmy.world/c/rust"), None);
    }

    #[test]
    fn test_attempt() {
        let follow = LemmyExtractor.attempt("https://lemmy.world/post/lemmy.ml/42", LEMMY_HEAD);
        assert_eq!(follow, Extraction::Follow("https://lemmy.world/post/42".to_string()));

        let other_path = LemmyExtractor.attempt("https://lemmy.world/post/42", LEMMY_HEAD);
        assert_eq!(other_path, Extraction::NoMatch);

        let not_lemmy = LemmyExtractor.attempt("https://example.com/post/a.b/42", "<title>x</title>");
        assert_eq!(not_lemmy, Extraction::NoMatch);
    }
}
