//! Cursor over a normalized line sequence

use tracing::debug;

use crate::labels::LabelTable;
use crate::rules::HeadingRules;
use crate::section::capture_section;

/// Forward-only cursor used by the record scans
///
/// Every operation moves the position forward by at least one line, so a scan
/// driven by `peek` always terminates.
pub struct LineCursor<'l, 'a> {
    lines: &'l [&'a str],
    rules: &'l HeadingRules,
    pos: usize,
}

impl<'l, 'a> LineCursor<'l, 'a> {
    /// Create a cursor at the first line
    pub fn new(lines: &'l [&'a str], rules: &'l HeadingRules) -> Self {
        Self {
            lines,
            rules,
            pos: 0,
        }
    }

    /// Current line, or `None` at end of input
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// Current position
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Skip the current line
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Consume the section headed by the current line
    ///
    /// `lead` is any text that followed the heading's colon; it becomes the
    /// first line of the returned body.
    pub fn consume_section(&mut self, lead: &str) -> String {
        let capture = capture_section(self.rules, self.lines, self.pos);
        self.pos = capture.resume;

        match (lead.is_empty(), capture.body.is_empty()) {
            (true, _) => capture.body,
            (false, true) => lead.to_string(),
            (false, false) => format!("{}\n{}", lead, capture.body),
        }
    }
}

/// Scan every line once, handing each labelled section to `on_section`
///
/// Lines that declare no label are skipped. Sections are consumed whole, so a
/// label appearing inside a captured body is not seen again.
pub fn scan_sections<F, S>(
    rules: &HeadingRules,
    lines: &[&str],
    table: &LabelTable<F>,
    mut on_section: S,
) where
    F: Copy + std::fmt::Debug,
    S: FnMut(F, String),
{
    let mut cursor = LineCursor::new(lines, rules);
    while let Some(line) = cursor.peek() {
        match table.match_line(line) {
            Some(found) => {
                let start = cursor.position();
                let body = cursor.consume_section(found.inline);
                debug!(
                    field = ?found.field,
                    label = found.label,
                    start,
                    resume = cursor.position(),
                    "captured section"
                );
                on_section(found.field, body);
            }
            None => cursor.advance(),
        }
    }
}
