//! Extraction outcome passed from extractors to the chat formatter.

use crate::format::{Style, format_text};

/// A resolved one-line summary: a chat template plus the values to fill in.
///
/// Extractors build these without knowing how the host renders styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    template: &'static str,
    fields: Vec<(&'static str, String)>,
}

impl Summary {
    pub fn new(template: &'static str) -> Self {
        Self { template, fields: Vec::new() }
    }

    pub fn field(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
    }

    pub fn render(&self, style: Style) -> String {
        let fields: Vec<(&str, &str)> = self.fields.iter().map(|(k, v)| (*k, v.as_str())).collect();
        format_text(self.template, &fields, style)
    }
}
