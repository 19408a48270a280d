//! Candidate URLs captured from message text.

/// A URL pulled out of a chat message, prepared for eligibility checks.
///
/// Some transports leave control bytes glued to the end of the last token in
/// a line. Those are stripped on construction so every later stage sees the
/// same string regardless of where the message came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateUrl {
    raw: String,
    lowercase: String,
}

impl CandidateUrl {
    pub fn new(raw: &str) -> Self {
        let raw = raw.trim_end_matches(|c: char| c.is_ascii_control()).to_string();
        let lowercase = raw.to_lowercase();
        Self { raw, lowercase }
    }

    /// The URL as posted, minus trailing control characters.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Lowercase form used for extension checks.
    pub fn lowercase(&self) -> &str {
        &self.lowercase
    }
}

impl From<&str> for CandidateUrl {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl std::fmt::Display for CandidateUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://example.com/page\u{4}", "https://example.com/page")]
    #[case("https://example.com/page\u{17}", "https://example.com/page")]
    #[case("https://example.com/page\u{1}\u{4}", "https://example.com/page")]
    #[case("https://example.com/page", "https://example.com/page")]
    fn test_strips_trailing_control(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(CandidateUrl::new(input).as_str(), expected);
    }

    #[test]
    fn test_keeps_leading_and_inner_characters() {
        let candidate = CandidateUrl::new("https://example.com/a%20b?q=1");
        assert_eq!(candidate.as_str(), "https://example.com/a%20b?q=1");
    }

    #[test]
    fn test_lowercase_form() {
        let candidate = CandidateUrl::new("https://Example.COM/Photo.JPG\u{4}");
        assert_eq!(candidate.lowercase(), "https://example.com/photo.jpg");
        assert_eq!(candidate.to_string(), "https://Example.COM/Photo.JPG");
    }
}
