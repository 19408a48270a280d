//! YouTube watch, live, shorts and youtu.be links.
//!
//! Video pages embed the player state as a JSON object assigned to
//! `ytInitialPlayerResponse` in an inline script. Regular videos carry the
//! title and channel under `videoDetails`; shorts pages are read from the
//! microformat block instead.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use thiserror::Error;

use super::{Extraction, Extractor};
use crate::Summary;

pub const VIDEO_TEMPLATE: &str =
    "{color}{green}Video{color}: {bold}{title}{bold} {color}{green}Channel{color}: {bold}{channel}{bold}";

static VIDEO_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:(?:www|m)\.)?(?:youtube\.com/(?P<kind>watch\?|live/|shorts/)|youtu\.be/)")
        .expect("VIDEO_LINK regex")
});

/// Start of the player state assignment. The JSON value itself is read by
/// the parser, since the blob can contain `};` inside strings.
static PLAYER_RESPONSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<script[^>]*>\s*var\s+ytInitialPlayerResponse\s*=\s*").expect("PLAYER_RESPONSE regex")
});

/// JSON pointers to the title and channel name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct KeyPath {
    title: &'static str,
    channel: &'static str,
}

const VIDEO_KEYS: KeyPath = KeyPath { title: "/videoDetails/title", channel: "/videoDetails/author" };

const SHORTS_KEYS: KeyPath = KeyPath {
    title: "/microformat/playerMicroformatRenderer/title/simpleText",
    channel: "/microformat/playerMicroformatRenderer/ownerChannelName",
};

/// Ways a recognised video page can fail to yield a summary.
#[derive(Debug, Error)]
pub enum VideoPageError {
    #[error("player response script not found")]
    MissingPlayerResponse,

    #[error("player response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("player response has no string at {0}")]
    MissingKey(&'static str),
}

/// Which layout a video link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoLink {
    Video,
    Shorts,
}

impl VideoLink {
    pub fn parse(url: &str) -> Option<Self> {
        let caps = VIDEO_LINK.captures(url)?;
        match caps.name("kind").map(|m| m.as_str()) {
            Some("shorts/") => Some(Self::Shorts),
            _ => Some(Self::Video),
        }
    }

    fn keys(self) -> KeyPath {
        match self {
            Self::Video => VIDEO_KEYS,
            Self::Shorts => SHORTS_KEYS,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct YouTubeExtractor;

impl YouTubeExtractor {
    /// Read title and channel from a video page body.
    pub fn video(&self, link: VideoLink, body: &str) -> Result<Summary, VideoPageError> {
        let player = player_response(body)?;
        let keys = link.keys();
        let title = lookup(&player, keys.title)?;
        let channel = lookup(&player, keys.channel)?;

        Ok(Summary::new(VIDEO_TEMPLATE).field("title", title).field("channel", channel))
    }
}

/// Parse the first JSON value after the assignment, ignoring whatever
/// script follows it.
fn player_response(body: &str) -> Result<Value, VideoPageError> {
    let marker = PLAYER_RESPONSE.find(body).ok_or(VideoPageError::MissingPlayerResponse)?;
    let rest = &body[marker.end()..];

    match serde_json::Deserializer::from_str(rest).into_iter::<Value>().next() {
        Some(player) => player.map_err(VideoPageError::from),
        None => Err(VideoPageError::MissingPlayerResponse),
    }
}

fn lookup(value: &Value, pointer: &'static str) -> Result<String, VideoPageError> {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .ok_or(VideoPageError::MissingKey(pointer))
}

impl Extractor for YouTubeExtractor {
    fn name(&self) -> &'static str {
        "youtube"
    }

    fn attempt(&self, url: &str, body: &str) -> Extraction {
        let Some(link) = VideoLink::parse(url) else {
            return Extraction::NoMatch;
        };

        match self.video(link, body) {
            Ok(summary) => Extraction::Summary(summary),
            Err(e) => {
                tracing::warn!(url, error = %e, "could not read video details, page layout may have changed");
                Extraction::NoMatch
            }
        }
    }
}
