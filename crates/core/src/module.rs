//! Chat-facing title module.
//!
//! A host registers [`TitleModule`] once at startup and hands it every
//! inbound [`Message`]. Messages containing an http(s) link get at most one
//! reply with the link's title.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::config::ModuleConfig;
use crate::eligibility::Blacklist;
use crate::extract::RedditExtractor;
use crate::fetch::Fetcher;
use crate::format::Style;
use crate::message::Message;
use crate::pipeline::Resolver;
use crate::{Result, Summary};

/// Name used to look up the module's configuration.
pub const MODULE_NAME: &str = "title";

/// Captures the last http(s) token in a message.
pub static TITLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".*(?P<url>http[^\s]+).*").expect("TITLE_PATTERN regex"));

/// Captures a Reddit link.
pub static REDDIT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<url>https?://(?:[A-Za-z0-9-]+\.)*reddit\.com/[^\s]*)").expect("REDDIT_PATTERN regex")
});

/// Commands a message can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Reddit,
    Title,
}

impl Command {
    pub fn pattern(self) -> &'static Regex {
        match self {
            Command::Reddit => &REDDIT_PATTERN,
            Command::Title => &TITLE_PATTERN,
        }
    }
}

/// Looks up titles for links posted in chat.
#[derive(Debug)]
pub struct TitleModule {
    resolver: Resolver,
    style: Style,
    reddit: bool,
}

impl TitleModule {
    /// Build from config; returns `None` if disabled.
    pub fn register(config: &ModuleConfig, style: Style) -> Result<Option<Self>> {
        if config.disabled {
            return Ok(None);
        }
        let fetcher = Fetcher::new(config.fetch_config())?;
        Ok(Some(Self::with_fetcher(config, fetcher, style)))
    }

    /// Build from config around an existing fetcher, ignoring `disabled`.
    pub fn with_fetcher(config: &ModuleConfig, fetcher: Fetcher, style: Style) -> Self {
        let blacklist: Arc<Blacklist> = Arc::new(config.blacklist());
        Self { resolver: Resolver::new(blacklist, fetcher), style, reddit: config.reddit }
    }

    /// Commands in the order they are tried.
    pub fn commands(&self) -> Vec<Command> {
        if self.reddit { vec![Command::Reddit, Command::Title] } else { vec![Command::Title] }
    }

    /// Run the first command whose pattern matches `message`.
    pub async fn dispatch(&self, message: &Message) -> Option<Message> {
        for command in self.commands() {
            let Some(url) = command.pattern().captures(&message.body).and_then(|c| c.name("url")) else {
                continue;
            };
            return match command {
                Command::Reddit => self.reddit(message, url.as_str()).await,
                Command::Title => self.title(message, url.as_str(), false).await,
            };
        }
        None
    }

    /// Reply to `message` with the title of `url`, if there is one.
    ///
    /// `force` skips the channel, extension and domain blacklists.
    pub async fn title(&self, message: &Message, url: &str, force: bool) -> Option<Message> {
        let resolved = self.resolver.resolve(url, &message.channel, force).await;
        self.reply(message, url, resolved)
    }

    /// Reddit links: post title and subreddit, falling back to the regular
    /// lookup with the blacklists bypassed.
    pub async fn reddit(&self, message: &Message, url: &str) -> Option<Message> {
        let resolved = self.resolver.resolve_with(url, &message.channel, true, &[&RedditExtractor]).await;
        self.reply(message, url, resolved)
    }

    fn reply(&self, message: &Message, url: &str, resolved: Result<Option<Summary>>) -> Option<Message> {
        match resolved {
            Ok(summary) => summary.map(|s| message.with_body(s.render(self.style))),
            Err(e) => {
                tracing::debug!(url, error = %e, "title lookup failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchConfig;
    use rstest::rstest;

    fn module(config: &ModuleConfig) -> TitleModule {
        let fetcher = Fetcher::new(FetchConfig::default()).unwrap();
        TitleModule::with_fetcher(config, fetcher, Style::Plain)
    }

    #[rstest]
    #[case("check https://example.com/a out", Some("https://example.com/a"))]
    #[case("https://example.com/a", Some("https://example.com/a"))]
    #[case("two links http://a.example http://b.example", Some("http://b.example"))]
    #[case("no links here", None)]
    #[case("ftp://example.com", None)]
    fn test_title_pattern(#[case] body: &str, #[case] expected: Option<&str>) {
        let url = TITLE_PATTERN.captures(body).and_then(|c| c.name("url")).map(|m| m.as_str());
        assert_eq!(url, expected);
    }

    #[rstest]
    #[case("https://www.reddit.com/r/rust/comments/x/y/", true)]
    #[case("see https://old.reddit.com/r/rust", true)]
    #[case("https://notreddit.example/reddit.com/", false)]
    fn test_reddit_pattern(#[case] body: &str, #[case] matches: bool) {
        assert_eq!(REDDIT_PATTERN.is_match(body), matches);
    }

    #[test]
    fn test_register_disabled() {
        let config = ModuleConfig { disabled: true, ..Default::default() };
        assert!(TitleModule::register(&config, Style::Plain).unwrap().is_none());
    }

    #[test]
    fn test_reddit_command_off_by_default() {
        assert_eq!(module(&ModuleConfig::default()).commands(), vec![Command::Title]);

        let config = ModuleConfig { reddit: true, ..Default::default() };
        assert_eq!(module(&config).commands(), vec![Command::Reddit, Command::Title]);
    }

    #[tokio::test]
    async fn test_dispatch_without_link() {
        let module = module(&ModuleConfig::default());
        assert!(module.dispatch(&Message::new("#rust", "hello there")).await.is_none());
    }

    #[tokio::test]
    async fn test_ineligible_link_is_silent() {
        let module = module(&ModuleConfig::default());
        let message = Message::new("#rust", "lol https://example.invalid/cat.gif");
        assert!(module.dispatch(&message).await.is_none());
    }

    #[tokio::test]
    async fn test_transport_failure_is_silent() {
        let module = module(&ModuleConfig::default());
        let message = Message::new("#rust", "http://127.0.0.1:9/unreachable");
        assert!(module.dispatch(&message).await.is_none());
    }
}
