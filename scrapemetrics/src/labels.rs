use std::fmt::Write;

use crate::types::{LabelValue, Name};

/// An insertion-ordered set of label key/value pairs.
///
/// Keys are unique. Inserting an existing key replaces its value but keeps the
/// key where it was first inserted, so rendering order only depends on the order
/// in which keys were first seen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Labels {
    labels: Vec<(Name, LabelValue)>,
}

impl Labels {
    /// Create a new label set
    ///
    /// ```
    /// # use scrapemetrics::Labels;
    /// Labels::new([("endpoint", "/health"), ("method", "GET")]);
    /// ```
    pub fn new(
        labels: impl IntoIterator<Item = (impl Into<Name>, impl Into<LabelValue>)>,
    ) -> Self {
        let mut this = Self::default();
        for (name, value) in labels {
            this.insert(name, value);
        }
        this
    }

    /// Add a key/value to the label set, replacing the value of an existing key.
    /// Can be chained for successive inserts.
    pub fn insert(&mut self, name: impl Into<Name>, value: impl Into<LabelValue>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.labels.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => *existing = value,
            None => self.labels.push((name, value)),
        }
        self
    }

    /// Look up the value for a key
    pub fn get(&self, name: &str) -> Option<&LabelValue> {
        self.labels
            .iter()
            .find(|(existing, _)| existing.as_str() == name)
            .map(|(_, value)| value)
    }

    /// Iterate the labels in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Name, &LabelValue)> {
        self.labels.iter().map(|(name, value)| (name, value))
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when there are no labels
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// `k1="v1", k2="v2"` without the surrounding braces.
    pub(crate) fn render_pairs(&self) -> String {
        let mut rendered = String::new();
        for (index, (name, value)) in self.labels.iter().enumerate() {
            if 0 < index {
                rendered.push_str(", ");
            }
            rendered.push_str(name.as_str());
            rendered.push_str("=\"");
            push_escaped(&mut rendered, value);
            rendered.push('"');
        }
        rendered
    }
}

// Escapes backslash, double quote and newline in place while formatting.
fn push_escaped(out: &mut String, value: &LabelValue) {
    match value {
        LabelValue::Str(s) => escape_into(out, s, true),
        LabelValue::String(s) => escape_into(out, s, true),
        LabelValue::Shared(s) => escape_into(out, s, true),
        // numbers and booleans never need escaping
        other => {
            let _ = write!(out, "{other}");
        }
    }
}

/// Help text with backslash and newline escaped, so it stays on its `# HELP` line.
pub(crate) fn escape_help(description: &str) -> String {
    let mut escaped = String::with_capacity(description.len());
    escape_into(&mut escaped, description, false);
    escaped
}

fn escape_into(out: &mut String, value: &str, quotes: bool) {
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' if quotes => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
}

/// The label fragments of one metric, formatted once at construction.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct LabelFragment {
    /// `{ k="v", ... }`, or empty with no labels
    full: String,
    /// `, k="v", ...` to follow a histogram's `le` entry, or empty with no labels
    trailing: String,
}

impl LabelFragment {
    pub(crate) fn new(labels: &Labels) -> Self {
        if labels.is_empty() {
            return Self::default();
        }
        let pairs = labels.render_pairs();
        Self {
            full: format!("{{ {pairs} }}"),
            trailing: format!(", {pairs}"),
        }
    }

    pub(crate) fn full(&self) -> &str {
        &self.full
    }

    pub(crate) fn trailing(&self) -> &str {
        &self.trailing
    }
}
