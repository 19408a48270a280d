use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use linktitle_core::module::TITLE_PATTERN;
use linktitle_core::{ConfigLoader, MODULE_NAME, Message, Style, TitleModule};
use owo_colors::OwoColorize;
use tokio::task::JoinSet;

mod echo;
mod logging;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Print titles for links found in chat messages
#[derive(Parser, Debug)]
#[command(name = "linktitle")]
#[command(author = "linktitle contributors")]
#[command(version)]
#[command(about = "Print titles for links found in chat messages", long_about = None)]
struct Args {
    /// Message text, one argument per message, or "-" to read lines from stdin
    #[arg(value_name = "MESSAGE")]
    messages: Vec<String>,

    /// Channel the messages are posted in
    #[arg(short, long, default_value = "#linktitle", value_name = "CHANNEL")]
    channel: String,

    /// Directory holding title.toml (default: platform config dir)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Reply style (plain, irc)
    #[arg(short, long, default_value = "plain", value_name = "STYLE")]
    style: Style,

    /// HTTP timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable the Reddit command
    #[arg(long)]
    reddit: bool,

    /// Ignore channel, extension and domain blacklists
    #[arg(short, long)]
    force: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn read_messages(args: &[String]) -> anyhow::Result<Vec<String>> {
    if !args.is_empty() && args.iter().all(|m| m != "-") {
        return Ok(args.to_vec());
    }

    let stdin = io::stdin();
    let mut messages: Vec<String> = args.iter().filter(|m| *m != "-").cloned().collect();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if !line.trim().is_empty() {
            messages.push(line);
        }
    }
    Ok(messages)
}

/// First link in a message, as the title command would see it.
fn link_in(body: &str) -> Option<&str> {
    Some(TITLE_PATTERN.captures(body)?.name("url")?.as_str())
}

async fn handle(module: &TitleModule, message: &Message, force: bool) -> Option<Message> {
    if force {
        let url = link_in(&message.body)?;
        module.title(message, url, true).await
    } else {
        module.dispatch(message).await
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init(args.verbose);

    if args.verbose {
        echo::print_banner();
    }

    let loader = match &args.config_dir {
        Some(dir) => ConfigLoader::new(dir),
        None => ConfigLoader::default(),
    };

    if args.verbose {
        let location = loader
            .path_for(MODULE_NAME)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string());
        echo::print_step(1, 3, &format!("Loading config from {}", location.bright_white()));
    }

    let mut config = loader
        .load_module_config(MODULE_NAME)
        .context("Failed to load module config")?;
    if let Some(timeout) = args.timeout {
        config.timeout = timeout;
    }
    if let Some(user_agent) = args.user_agent.clone() {
        config.user_agent = user_agent;
    }
    config.reddit |= args.reddit;

    let Some(module) = TitleModule::register(&config, args.style).context("Failed to set up HTTP client")? else {
        echo::print_warning("Title module is disabled in the config");
        return Ok(());
    };
    let module = Arc::new(module);

    if args.verbose {
        echo::print_step(2, 3, "Reading messages");
    }

    let messages = read_messages(&args.messages)?;

    if args.verbose {
        echo::print_detail("Messages", &messages.len().to_string());
        echo::print_detail("Channel", &args.channel);
        echo::print_detail("Style", &format!("{:?}", args.style).to_lowercase());
        eprintln!();
        echo::print_step(3, 3, "Resolving links");
    }

    let mut tasks = JoinSet::new();
    for body in messages {
        let module = Arc::clone(&module);
        let message = Message::new(args.channel.clone(), body);
        let force = args.force;
        tasks.spawn(async move {
            let reply = handle(&module, &message, force).await;
            (message, reply)
        });
    }

    let mut replies = 0usize;
    let mut links = 0usize;
    while let Some(joined) = tasks.join_next().await {
        let (message, reply) = joined.context("Resolution task panicked")?;
        let url = link_in(&message.body).unwrap_or_default();
        if !url.is_empty() {
            links += 1;
        }

        match reply {
            Some(reply) => {
                tracing::debug!(url, channel = %reply.channel, "reply");
                if args.verbose {
                    echo::print_resolved(url, &reply.body);
                }
                println!("{}", reply.body);
                replies += 1;
            }
            None if !url.is_empty() => {
                tracing::debug!(url, channel = %message.channel, "no reply");
                if args.verbose {
                    echo::print_silent(url);
                }
            }
            None => {}
        }
    }

    if args.verbose {
        eprintln!();
        echo::print_summary(replies, links);
    }

    Ok(())
}
