//! Label tables: bilingual heading labels mapped to canonical fields

use regex::Regex;
use tracing::warn;

use crate::rules::{emphasis, label_fragment, LIST_MARKER};

/// A line recognized as declaring a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelMatch<'a, F> {
    /// Canonical field the label maps to
    pub field: F,

    /// Label as declared in the table
    pub label: &'static str,

    /// Text after the colon on the same line, trimmed (may be empty)
    pub inline: &'a str,
}

#[derive(Debug, Clone)]
struct LabelEntry<F> {
    label: &'static str,
    field: F,
    pattern: Regex,
}

/// Ordered label table
///
/// Matching follows declaration order and the first matching label wins, so
/// tables list longer or more specific labels before their prefixes. Latin
/// letters match case-insensitively. A label matches only at the start of a
/// line (after optional list or markdown markers) and only when a `:` or `：`
/// follows it.
#[derive(Debug, Clone)]
pub struct LabelTable<F> {
    entries: Vec<LabelEntry<F>>,
}

impl<F: Copy> LabelTable<F> {
    /// Compile a table from `(label, field)` pairs
    ///
    /// A label that fails to compile is skipped with a warning.
    pub fn new(labels: &[(&'static str, F)], strip_emphasis: bool) -> Self {
        let em = emphasis(strip_emphasis);
        let entries = labels
            .iter()
            .filter_map(|&(label, field)| {
                let source = format!(
                    r"(?i)^(?:#{{1,6}}\s*)?(?:{marker}\s*)?{em}{label}{em}\s*[:：]{em}\s*(.*)$",
                    marker = LIST_MARKER,
                    em = em,
                    label = label_fragment(label),
                );
                match Regex::new(&source) {
                    Ok(pattern) => Some(LabelEntry {
                        label,
                        field,
                        pattern,
                    }),
                    Err(e) => {
                        warn!("Skipping label {:?}: {}", label, e);
                        None
                    }
                }
            })
            .collect();
        Self { entries }
    }

    /// Number of usable labels
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no label compiled
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Which label, if any, the line declares
    pub fn match_line<'a>(&self, line: &'a str) -> Option<LabelMatch<'a, F>> {
        self.entries.iter().find_map(|entry| {
            let caps = entry.pattern.captures(line)?;
            let inline = caps.get(1).map_or("", |m| m.as_str().trim());
            Some(LabelMatch {
                field: entry.field,
                label: entry.label,
                inline,
            })
        })
    }

    /// Value of the first line declaring a label with non-empty inline text
    ///
    /// Used for single-value fields such as `Character Name: X`.
    pub fn first_value<'a>(&self, lines: &[&'a str]) -> Option<&'a str> {
        lines
            .iter()
            .filter_map(|&line| self.match_line(line))
            .map(|m| m.inline)
            .find(|value| !value.is_empty())
    }
}
