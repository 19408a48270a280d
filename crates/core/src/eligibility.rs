//! Eligibility checks run before any network traffic.

use crate::candidate::CandidateUrl;

/// Domains that are never fetched through the title pipeline.
pub const DOMAIN_BLACKLIST: &[&str] = &["reddit.com", "twitter.com"];

/// File extensions that point at binary media or archives.
pub const EXTENSION_BLACKLIST: &[&str] = &[
    ".gif", ".jpg", ".jpeg", ".png", ".webp", ".mkv", ".mov", ".mp4", ".webm", ".zip", ".gz", ".tar", ".7z",
];

/// Why a URL was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Channel,
    Extension,
    Domain,
}

/// Outcome of an eligibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Admit,
    Reject(Rejection),
}

impl Eligibility {
    pub fn is_admitted(self) -> bool {
        matches!(self, Eligibility::Admit)
    }
}

/// Channel, domain and extension blacklists.
///
/// Built once at registration and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blacklist {
    channels: Vec<String>,
    domains: Vec<String>,
    extensions: Vec<String>,
}

impl Blacklist {
    /// Blacklist with the given channels and the built-in domain and
    /// extension sets.
    pub fn with_channels<I, S>(channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            channels: channels.into_iter().map(Into::into).collect(),
            domains: DOMAIN_BLACKLIST.iter().map(|d| d.to_string()).collect(),
            extensions: EXTENSION_BLACKLIST.iter().map(|e| e.to_string()).collect(),
        }
    }

    pub fn channels(&self) -> &[String] {
        &self.channels
    }

    /// Decide whether `url` posted in `channel` should be fetched.
    ///
    /// `force` skips every check.
    pub fn check(&self, url: &CandidateUrl, channel: &str, force: bool) -> Eligibility {
        if force {
            return Eligibility::Admit;
        }

        if self.channels.iter().any(|c| c == channel) {
            return Eligibility::Reject(Rejection::Channel);
        }

        if self.extensions.iter().any(|ext| url.lowercase().ends_with(ext.as_str())) {
            return Eligibility::Reject(Rejection::Extension);
        }

        if self.domains.iter().any(|domain| url.as_str().contains(domain.as_str())) {
            return Eligibility::Reject(Rejection::Domain);
        }

        Eligibility::Admit
    }
}

impl Default for Blacklist {
    fn default() -> Self {
        Self::with_channels(Vec::<String>::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn url(s: &str) -> CandidateUrl {
        CandidateUrl::new(s)
    }

    #[rstest]
    #[case("https://example.com/cat.gif")]
    #[case("https://example.com/cat.JPG")]
    #[case("https://example.com/clip.mp4")]
    #[case("https://example.com/dump.tar")]
    #[case("https://example.com/photo.PNG\u{4}")]
    fn test_rejects_media_extensions(#[case] input: &str) {
        let blacklist = Blacklist::default();
        assert_eq!(
            blacklist.check(&url(input), "#general", false),
            Eligibility::Reject(Rejection::Extension)
        );
    }

    #[rstest]
    #[case("https://www.reddit.com/r/rust/comments/abc/")]
    #[case("https://twitter.com/someone/status/1")]
    #[case("https://old.reddit.com/")]
    fn test_rejects_blacklisted_domains(#[case] input: &str) {
        let blacklist = Blacklist::default();
        assert_eq!(
            blacklist.check(&url(input), "#general", false),
            Eligibility::Reject(Rejection::Domain)
        );
    }

    #[test]
    fn test_rejects_blacklisted_channel() {
        let blacklist = Blacklist::with_channels(["#quiet"]);
        let page = url("https://example.com/article");

        assert_eq!(
            blacklist.check(&page, "#quiet", false),
            Eligibility::Reject(Rejection::Channel)
        );
        assert!(blacklist.check(&page, "#general", false).is_admitted());
    }

    #[test]
    fn test_channel_match_is_exact() {
        let blacklist = Blacklist::with_channels(["#quiet"]);
        let page = url("https://example.com/article");
        assert!(blacklist.check(&page, "#quieter", false).is_admitted());
        assert!(blacklist.check(&page, "#QUIET", false).is_admitted());
    }

    #[test]
    fn test_force_bypasses_all_checks() {
        let blacklist = Blacklist::with_channels(["#quiet"]);
        let media = url("https://www.reddit.com/image.png");
        assert!(blacklist.check(&media, "#quiet", true).is_admitted());
    }

    #[test]
    fn test_admits_ordinary_pages() {
        let blacklist = Blacklist::default();
        assert!(blacklist.check(&url("https://example.com/post.html"), "#general", false).is_admitted());
        assert!(blacklist.check(&url("https://example.com/gif-guide"), "#general", false).is_admitted());
    }
}
