//! Character sheet extraction

use inkwell_domain::{CharacterField, CharacterSheet};
use tracing::debug;

use crate::config::ExtractorConfig;
use crate::cursor::scan_sections;
use crate::labels::LabelTable;
use crate::lines::normalize_lines;
use crate::rules::HeadingRules;

const NAME_LABELS: &[(&str, ())] = &[("Character Name", ()), ("角色名称", ()), ("姓名", ())];

const ROLE_LABELS: &[(&str, ())] = &[("Role", ()), ("角色", ())];

/// Section labels; specific labels precede their prefixes
const SECTION_LABELS: &[(&str, CharacterField)] = &[
    ("Physical Appearance", CharacterField::Appearance),
    ("外貌描述", CharacterField::Appearance),
    ("外貌", CharacterField::Appearance),
    ("Appearance", CharacterField::Appearance),
    ("Personality Traits", CharacterField::Personality),
    ("性格特点", CharacterField::Personality),
    ("性格", CharacterField::Personality),
    ("Personality", CharacterField::Personality),
    ("Background Story", CharacterField::Background),
    ("背景故事", CharacterField::Background),
    ("背景", CharacterField::Background),
    ("Background", CharacterField::Background),
    ("Relationships", CharacterField::Relationships),
    ("人物关系", CharacterField::Relationships),
    ("关系", CharacterField::Relationships),
    ("Description", CharacterField::Description),
    ("描述", CharacterField::Description),
];

/// Compiled label tables for character sheets
#[derive(Debug, Clone)]
pub(crate) struct CharacterParser {
    name: LabelTable<()>,
    role: LabelTable<()>,
    sections: LabelTable<CharacterField>,
}

impl CharacterParser {
    pub(crate) fn new(config: &ExtractorConfig) -> Self {
        Self {
            name: LabelTable::new(NAME_LABELS, config.strip_emphasis),
            role: LabelTable::new(ROLE_LABELS, config.strip_emphasis),
            sections: LabelTable::new(SECTION_LABELS, config.strip_emphasis),
        }
    }

    pub(crate) fn parse(&self, rules: &HeadingRules, text: &str) -> CharacterSheet {
        let lines = normalize_lines(text);
        let mut sheet = CharacterSheet::default();

        if let Some(name) = self.name.first_value(&lines) {
            sheet.name = name.to_string();
        }
        if let Some(role) = self.role.first_value(&lines) {
            sheet.role = role.to_string();
        }

        scan_sections(rules, &lines, &self.sections, |field, body| {
            // An empty duplicate heading keeps the earlier value
            if !body.is_empty() {
                *sheet.get_mut(field) = body;
            }
        });

        if sheet.description.is_empty() {
            debug!("No description section; using source text");
            sheet.description = text.to_string();
        }

        sheet
    }
}
