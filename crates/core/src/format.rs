//! Chat text formatting with style markers.
//!
//! Templates name style markers and fields the same way, as `{name}`:
//!
//! ```rust
//! use linktitle_core::format::{Style, format_text};
//!
//! let line = format_text("{bold}{title}{bold}", &[("title", "Hello")], Style::Irc);
//! assert_eq!(line, "\x02Hello\x02");
//!
//! let line = format_text("{bold}{title}{bold}", &[("title", "Hello")], Style::Plain);
//! assert_eq!(line, "Hello");
//! ```

use std::str::FromStr;

/// How style markers are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Markers are dropped.
    #[default]
    Plain,
    /// mIRC control codes.
    Irc,
}

impl Style {
    /// Rendering for a style marker, or `None` if `name` is not a marker.
    fn marker(self, name: &str) -> Option<&'static str> {
        let irc = match name {
            "bold" => "\x02",
            "color" => "\x03",
            "green" => "03",
            "reset" => "\x0f",
            _ => return None,
        };
        match self {
            Style::Plain => Some(""),
            Style::Irc => Some(irc),
        }
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "irc" => Ok(Self::Irc),
            _ => Err(format!("Invalid style: {}. Valid options: plain, irc", s)),
        }
    }
}

/// Substitute fields and style markers in `template`.
///
/// Field values are copied as-is and never scanned for placeholders.
/// Placeholders that are neither a marker nor a known field stay in the
/// output unchanged.
pub fn format_text(template: &str, fields: &[(&str, &str)], style: Style) -> String {
    let mut out = String::with_capacity(template.len() + fields.iter().map(|(_, v)| v.len()).sum::<usize>());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        if let Some(code) = style.marker(name) {
            out.push_str(code);
        } else if let Some((_, value)) = fields.iter().find(|(key, _)| *key == name) {
            out.push_str(value);
        } else {
            out.push_str(&rest[open..open + close + 2]);
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}
