//! Guarded page fetching.
//!
//! A [`Fetcher`] performs one GET per URL and only hands back bodies that are
//! worth scanning for a title: HTML documents whose declared size stays under
//! [`MAX_CONTENT_LENGTH`]. Anything else is skipped quietly. Transport
//! failures are returned as errors for the caller to decide on.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderMap};
use url::Url;

use crate::{LinkTitleError, Result};

/// Largest declared body accepted for title extraction (8 MiB).
pub const MAX_CONTENT_LENGTH: u64 = 1 << 23;

const HTML_MEDIA_TYPE: &str = "text/html";

/// Media type assumed when the server sends no `Content-Type`.
const DEFAULT_MEDIA_TYPE: &str = "application/octet-stream";

/// HTTP client configuration for fetching pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 10, user_agent: "Mozilla/5.0 (compatible; linktitle/1.0)".to_string() }
    }
}

/// A fetched page that passed the content checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// Media type without parameters, lowercased.
    pub content_type: String,
    /// Declared `Content-Length`, 0 when absent.
    pub content_length: u64,
    /// Body with `\r` removed and `\n` turned into spaces.
    pub body: String,
}

/// Why a response was not handed on to the extractors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    NotHtml(String),
    TooLarge(u64),
}

impl std::fmt::Display for Skip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Skip::NotHtml(media_type) => write!(f, "content type {media_type} is not HTML"),
            Skip::TooLarge(length) => write!(f, "declared length {length} exceeds {MAX_CONTENT_LENGTH}"),
        }
    }
}

/// Check response headers before the body is read.
///
/// Returns the media type and declared length on success.
pub fn inspect_headers(headers: &HeaderMap) -> std::result::Result<(String, u64), Skip> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .unwrap_or_else(|| DEFAULT_MEDIA_TYPE.to_string());

    if content_type != HTML_MEDIA_TYPE {
        return Err(Skip::NotHtml(content_type));
    }

    let content_length = headers
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(0);

    if content_length > MAX_CONTENT_LENGTH {
        return Err(Skip::TooLarge(content_length));
    }

    Ok((content_type, content_length))
}

/// Flatten a body onto a single line so patterns never straddle line breaks.
pub fn normalize_body(text: &str) -> String {
    text.replace('\r', "").replace('\n', " ")
}

/// Fetches pages for title extraction.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    /// Build a fetcher with its own client.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(LinkTitleError::HttpError)?;

        Ok(Self { client, config })
    }

    /// Fetch `url` and return its body if it is suitable for extraction.
    ///
    /// `Ok(None)` means the response was deliberately skipped.
    pub async fn fetch(&self, url: &str) -> Result<Option<FetchResult>> {
        let parsed_url = Url::parse(url).map_err(|e| LinkTitleError::InvalidUrl(format!("{url}: {e}")))?;

        let response = self
            .client
            .get(parsed_url)
            .header("User-Agent", &self.config.user_agent)
            .header(
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let (content_type, content_length) = match inspect_headers(response.headers()) {
            Ok(checked) => checked,
            Err(skip) => {
                tracing::debug!(url, reason = %skip, "skipping response");
                return Ok(None);
            }
        };

        let text = response.text().await.map_err(|e| self.classify(e))?;

        Ok(Some(FetchResult { content_type, content_length, body: normalize_body(&text) }))
    }

    fn classify(&self, e: reqwest::Error) -> LinkTitleError {
        if e.is_timeout() { LinkTitleError::Timeout { timeout: self.config.timeout } } else { LinkTitleError::HttpError(e) }
    }
}
