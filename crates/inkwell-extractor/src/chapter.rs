//! Chapter outline extraction

use inkwell_domain::{ChapterField, ChapterOutline};
use tracing::debug;

use crate::config::ExtractorConfig;
use crate::cursor::scan_sections;
use crate::labels::LabelTable;
use crate::lines::normalize_lines;
use crate::rules::HeadingRules;

const TITLE_LABELS: &[(&str, ())] = &[("Chapter Title", ()), ("章节标题", ())];

const SECTION_LABELS: &[(&str, ChapterField)] = &[
    ("Chapter Summary", ChapterField::Summary),
    ("章节概要", ChapterField::Summary),
    ("Summary", ChapterField::Summary),
    ("Key Events", ChapterField::KeyEvents),
    ("关键事件", ChapterField::KeyEvents),
];

#[derive(Debug, Clone)]
pub(crate) struct ChapterParser {
    title: LabelTable<()>,
    sections: LabelTable<ChapterField>,
}

impl ChapterParser {
    pub(crate) fn new(config: &ExtractorConfig) -> Self {
        Self {
            title: LabelTable::new(TITLE_LABELS, config.strip_emphasis),
            sections: LabelTable::new(SECTION_LABELS, config.strip_emphasis),
        }
    }

    pub(crate) fn parse(&self, rules: &HeadingRules, text: &str) -> ChapterOutline {
        let lines = normalize_lines(text);
        let mut outline = ChapterOutline::default();

        if let Some(title) = self.title.first_value(&lines) {
            outline.title = title.to_string();
        }

        scan_sections(rules, &lines, &self.sections, |field, body| {
            if !body.is_empty() {
                *outline.get_mut(field) = body;
            }
        });

        if outline.summary.is_empty() {
            debug!("No summary section; using source text");
            outline.summary = text.to_string();
        }

        outline
    }
}
