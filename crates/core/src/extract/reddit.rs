//! Reddit posts, used only by the reddit command.
//!
//! The Open Graph title is tried first, then the attributes of the
//! `<shreddit-post>` element.

use std::sync::LazyLock;

use regex::Regex;

use super::text::{attribute, clean, meta_content};
use super::{Extraction, Extractor};
use crate::Summary;

pub const POST_TEMPLATE: &str = "{color}{green}{subreddit}{color}: {bold}{title}{bold}";

static OG_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<subreddit>r/[A-Za-z0-9_]+) on Reddit: (?P<title>.+)$").expect("OG_TITLE regex")
});

static SHREDDIT_POST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<shreddit-post\s[^>]*>").expect("SHREDDIT_POST regex"));

/// Reddit post pages, old and new markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedditExtractor;

impl RedditExtractor {
    /// `og:title` shaped like `r/rust on Reddit: Post title`.
    pub fn from_open_graph(body: &str) -> Option<Summary> {
        let og_title = clean(&meta_content(body, "og:title")?);
        let caps = OG_TITLE.captures(&og_title)?;
        Some(summary(&caps["subreddit"], &caps["title"]))
    }

    /// `post-title` and `subreddit-prefixed-name` on the `<shreddit-post>` element.
    pub fn from_post_element(body: &str) -> Option<Summary> {
        let tag = SHREDDIT_POST.find(body)?.as_str();
        let title = clean(&attribute(tag, "post-title")?);
        let subreddit = clean(&attribute(tag, "subreddit-prefixed-name")?);
        if title.is_empty() || subreddit.is_empty() {
            return None;
        }
        Some(summary(&subreddit, &title))
    }
}

fn summary(subreddit: &str, title: &str) -> Summary {
    Summary::new(POST_TEMPLATE).field("subreddit", subreddit.trim()).field("title", title.trim())
}

impl Extractor for RedditExtractor {
    fn name(&self) -> &'static str {
        "reddit"
    }

    fn attempt(&self, _url: &str, body: &str) -> Extraction {
        match Self::from_open_graph(body).or_else(|| Self::from_post_element(body)) {
            Some(summary) => Extraction::Summary(summary),
            None => Extraction::NoMatch,
        }
    }
}
