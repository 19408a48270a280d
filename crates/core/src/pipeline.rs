//! Title resolution: eligibility, fetch, extractor chain, fallback.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use linktitle_core::{Blacklist, FetchConfig, Fetcher, Resolver, format::Style};
//!
//! # async fn example() -> linktitle_core::Result<()> {
//! let resolver = Resolver::new(Arc::new(Blacklist::default()), Fetcher::new(FetchConfig::default())?);
//! if let Some(summary) = resolver.resolve("https://www.rust-lang.org", "#rust", false).await? {
//!     println!("{}", summary.render(Style::Plain));
//! }
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::candidate::CandidateUrl;
use crate::eligibility::Blacklist;
use crate::extract::{Extraction, Extractor, GenericExtractor, default_chain};
use crate::fetch::Fetcher;
use crate::{Result, Summary};

/// How many redirecting pages are followed for one link.
pub const MAX_FOLLOW_DEPTH: usize = 2;

type ResolveFuture<'a> = Pin<Box<dyn Future<Output = Result<Option<Summary>>> + Send + 'a>>;

/// Resolves URLs into summaries.
///
/// Holds no per-request state, so one resolver can serve any number of
/// concurrent lookups.
#[derive(Debug)]
pub struct Resolver {
    blacklist: Arc<Blacklist>,
    fetcher: Fetcher,
    chain: Vec<Box<dyn Extractor>>,
    fallback: GenericExtractor,
}

impl Resolver {
    /// Resolver with the default extractor chain.
    pub fn new(blacklist: Arc<Blacklist>, fetcher: Fetcher) -> Self {
        Self::with_chain(blacklist, fetcher, default_chain())
    }

    /// Resolver with a custom extractor chain, tried in order before the
    /// `<title>` fallback.
    pub fn with_chain(blacklist: Arc<Blacklist>, fetcher: Fetcher, chain: Vec<Box<dyn Extractor>>) -> Self {
        Self { blacklist, fetcher, chain, fallback: GenericExtractor }
    }

    /// Resolve `url` posted in `channel`.
    ///
    /// `Ok(None)` covers every quiet outcome: the URL was ineligible, the
    /// response was skipped, or no title could be found. Transport failures
    /// are returned as errors.
    pub async fn resolve(&self, url: &str, channel: &str, force: bool) -> Result<Option<Summary>> {
        self.resolve_with(url, channel, force, &[]).await
    }

    /// Like [`resolve`](Self::resolve), trying `preferred` extractors before
    /// the regular chain.
    pub async fn resolve_with(
        &self,
        url: &str,
        channel: &str,
        force: bool,
        preferred: &[&dyn Extractor],
    ) -> Result<Option<Summary>> {
        self.resolve_at(CandidateUrl::new(url), channel, force, preferred, 0).await
    }

    fn resolve_at<'a>(
        &'a self,
        candidate: CandidateUrl,
        channel: &'a str,
        force: bool,
        preferred: &'a [&'a dyn Extractor],
        depth: usize,
    ) -> ResolveFuture<'a> {
        Box::pin(async move {
            if !self.blacklist.check(&candidate, channel, force).is_admitted() {
                return Ok(None);
            }

            let url = candidate.as_str();
            let Some(page) = self.fetcher.fetch(url).await? else {
                return Ok(None);
            };

            let mut extractors: Vec<&dyn Extractor> = Vec::with_capacity(preferred.len() + self.chain.len());
            extractors.extend_from_slice(preferred);
            for extractor in &self.chain {
                extractors.push(extractor.as_ref());
            }

            for extractor in extractors {
                match extractor.attempt(url, &page.body) {
                    Extraction::Summary(summary) => {
                        tracing::debug!(url, extractor = extractor.name(), "resolved title");
                        return Ok(Some(summary));
                    }
                    Extraction::Follow(next) if depth < MAX_FOLLOW_DEPTH => {
                        tracing::debug!(url, next = %next, extractor = extractor.name(), "following");
                        return self.resolve_at(CandidateUrl::new(&next), channel, force, &[], depth + 1).await;
                    }
                    Extraction::Follow(next) => {
                        tracing::warn!(url, next = %next, depth, "follow limit reached, ignoring redirect");
                    }
                    Extraction::NoMatch => {}
                }
            }

            Ok(self.fallback.title(&page.body))
        })
    }
}
