use owo_colors::OwoColorize;

use crate::VERSION;

/// Banner shown at the start of a verbose run
pub fn print_banner() {
    eprintln!("\n{} {}", "linktitle".bold().bright_blue(), format!("v{VERSION}").dimmed());
    eprintln!("{}", "Titles for links posted in chat\n".dimmed());
}

pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Indented `label value` line under a step
pub fn print_detail(label: &str, value: &str) {
    eprintln!("  {} {}", format!("{label}:").dimmed(), value.bright_white());
}

/// A link that produced a reply, with the reply text as sent
pub fn print_resolved(url: &str, reply: &str) {
    eprintln!("  {} {}", "→".green(), url.underline());
    eprintln!("    {}", reply.bright_green());
}

/// A link that was skipped, ineligible, or had nothing to show
pub fn print_silent(url: &str) {
    eprintln!("  {} {} {}", "·".dimmed(), url.underline().dimmed(), "(no reply)".dimmed());
}

/// Closing count of replies against messages that carried a link
pub fn print_summary(replies: usize, links: usize) {
    let noun = if replies == 1 { "reply" } else { "replies" };
    eprintln!("{} {}", "✓".green(), format!("{replies} {noun} for {links} links").bright_green());
}

pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}
