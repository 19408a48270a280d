pub mod candidate;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod format;
pub mod message;
pub mod module;
pub mod pipeline;
pub mod summary;

pub use candidate::CandidateUrl;
pub use config::{ConfigLoader, ModuleConfig};
pub use eligibility::{Blacklist, DOMAIN_BLACKLIST, EXTENSION_BLACKLIST, Eligibility, Rejection};
pub use error::{LinkTitleError, Result};
pub use extract::{
    Extraction, Extractor, GenericExtractor, LemmyExtractor, MastodonExtractor, RedditExtractor, YouTubeExtractor,
    default_chain,
};
pub use fetch::{FetchConfig, FetchResult, Fetcher, MAX_CONTENT_LENGTH, Skip};
pub use format::{Style, format_text};
pub use message::Message;
pub use module::{Command, MODULE_NAME, TitleModule};
pub use pipeline::{MAX_FOLLOW_DEPTH, Resolver};
pub use summary::Summary;
