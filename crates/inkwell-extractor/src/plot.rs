//! Plot outline extraction

use inkwell_domain::{PlotField, PlotOutline};
use tracing::debug;

use crate::config::ExtractorConfig;
use crate::cursor::scan_sections;
use crate::labels::LabelTable;
use crate::lines::normalize_lines;
use crate::rules::HeadingRules;

const TITLE_LABELS: &[(&str, ())] = &[("Plot Title", ()), ("标题", ())];

const SECTION_LABELS: &[(&str, PlotField)] = &[
    ("Main Conflict", PlotField::Description),
    ("Hook", PlotField::Description),
    ("主要冲突", PlotField::Description),
    ("Key Plot Points", PlotField::KeyEvents),
    ("关键事件", PlotField::KeyEvents),
    ("Character Involvement", PlotField::Characters),
    ("角色参与", PlotField::Characters),
    ("Conflicts", PlotField::Conflicts),
    ("冲突", PlotField::Conflicts),
];

#[derive(Debug, Clone)]
pub(crate) struct PlotParser {
    title: LabelTable<()>,
    sections: LabelTable<PlotField>,
    placeholder: String,
}

impl PlotParser {
    pub(crate) fn new(config: &ExtractorConfig) -> Self {
        Self {
            title: LabelTable::new(TITLE_LABELS, config.strip_emphasis),
            sections: LabelTable::new(SECTION_LABELS, config.strip_emphasis),
            placeholder: config.plot_title_placeholder.clone(),
        }
    }

    /// Description and key events each fall back to the whole source text on
    /// their own, so unstructured input fills both.
    pub(crate) fn parse(&self, rules: &HeadingRules, text: &str) -> PlotOutline {
        let lines = normalize_lines(text);
        let mut plot = PlotOutline::default();

        if let Some(title) = self.title.first_value(&lines) {
            plot.title = title.to_string();
        }

        scan_sections(rules, &lines, &self.sections, |field, body| {
            if !body.is_empty() {
                *plot.get_mut(field) = body;
            }
        });

        if plot.title.is_empty() {
            debug!(placeholder = %self.placeholder, "No plot title; using placeholder");
            plot.title = self.placeholder.clone();
        }
        if plot.description.is_empty() {
            debug!("No conflict or hook section; using source text");
            plot.description = text.to_string();
        }
        if plot.key_events.is_empty() {
            debug!("No key plot points section; using source text");
            plot.key_events = text.to_string();
        }

        plot
    }
}
