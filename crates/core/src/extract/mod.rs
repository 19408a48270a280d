//! Site-specific title extractors.
//!
//! Each extractor looks at an already fetched, single-line page body and
//! either produces a [`Summary`], asks the resolver to follow another URL, or
//! declines. The resolver tries them in a fixed order and stops at the first
//! one that does not decline; [`GenericExtractor`] runs last.

pub mod generic;
pub mod lemmy;
pub mod mastodon;
pub mod reddit;
pub mod text;
pub mod youtube;

pub use generic::GenericExtractor;
pub use lemmy::LemmyExtractor;
pub use mastodon::MastodonExtractor;
pub use reddit::RedditExtractor;
pub use youtube::YouTubeExtractor;

use crate::Summary;

/// Result of one extractor attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The extractor recognised the page and built a summary.
    Summary(Summary),
    /// The page is a pointer to another URL that should be resolved instead.
    Follow(String),
    /// This heuristic does not apply to the page.
    NoMatch,
}

/// A title heuristic for one kind of page.
pub trait Extractor: Send + Sync + std::fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Try to summarise `body`, fetched from `url`.
    fn attempt(&self, url: &str, body: &str) -> Extraction;
}

/// The site-specific extractors in priority order.
pub fn default_chain() -> Vec<Box<dyn Extractor>> {
    vec![Box::new(LemmyExtractor), Box::new(MastodonExtractor), Box::new(YouTubeExtractor)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chain_order() {
        let names: Vec<_> = default_chain().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["lemmy", "mastodon", "youtube"]);
    }
}
