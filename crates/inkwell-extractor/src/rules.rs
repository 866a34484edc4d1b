//! Heading rules: when does a line open a new section?
//!
//! Rules form a priority-ordered table. The first rule whose pattern matches
//! decides the line's verdict; a line no rule matches is section body.

use regex::Regex;

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;

/// Bullet or enumeration marker at the start of a list item
pub(crate) const LIST_MARKER: &str = r"(?:[-*+•]|\d+[.)、])";

/// Domain words and labels that open a section when a colon follows them
const HEADING_KEYWORDS: &[&str] = &[
    "Chapter",
    "Chapter Title",
    "Chapter Summary",
    "Plot",
    "Plot Title",
    "Character",
    "Character Name",
    "Character Involvement",
    "Role",
    "Name",
    "Physical Appearance",
    "Appearance",
    "Personality",
    "Personality Traits",
    "Background",
    "Background Story",
    "Relationships",
    "Description",
    "Summary",
    "Key Events",
    "Key Plot Points",
    "Conflicts",
    "Main Conflict",
    "Hook",
    "Era",
    "Time",
    "Rules",
    "Laws",
    "Locations",
    "Places",
    "Culture",
    "角色",
    "角色名称",
    "角色参与",
    "人物",
    "人物关系",
    "姓名",
    "外貌",
    "外貌描述",
    "性格",
    "性格特点",
    "背景",
    "背景故事",
    "关系",
    "冲突",
    "主要冲突",
    "地点",
    "场景",
    "规则",
    "法则",
    "文化",
    "时代",
    "标题",
    "章节",
    "章节标题",
    "章节概要",
    "描述",
    "概要",
    "关键事件",
];

/// Optional markdown emphasis around labels, when enabled
pub(crate) fn emphasis(strip: bool) -> &'static str {
    if strip {
        r"(?:\*\*|__)?"
    } else {
        ""
    }
}

/// Turn a label into a pattern fragment: literal words, flexible spacing
pub(crate) fn label_fragment(label: &str) -> String {
    label
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s*")
}

/// Outcome of classifying a line inside an open section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The line starts a new section; capture stops before it
    Heading,
    /// The line belongs to the open section
    Body,
}

/// Named rules, in the order they are evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingRule {
    /// `#` to `######` followed by whitespace
    Markdown,
    /// `N.` enumerations and `-` / `*` bullets; never a heading
    ListItem,
    /// A short alphabetic or CJK label ending in a colon, nothing after
    BareLabel,
    /// A domain keyword, optionally numbered (`Chapter 3`), then a colon
    Keyword,
}

impl HeadingRule {
    /// Verdict this rule gives when it matches
    pub fn verdict(self) -> Verdict {
        match self {
            HeadingRule::ListItem => Verdict::Body,
            HeadingRule::Markdown | HeadingRule::BareLabel | HeadingRule::Keyword => {
                Verdict::Heading
            }
        }
    }
}

/// Compiled, priority-ordered heading rule table
#[derive(Debug, Clone)]
pub struct HeadingRules {
    rules: Vec<(HeadingRule, Regex)>,
}

impl HeadingRules {
    /// Compile the rule table for a configuration
    pub fn new(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        let em = emphasis(config.strip_emphasis);
        let keywords = HEADING_KEYWORDS
            .iter()
            .map(|k| label_fragment(k))
            .collect::<Vec<_>>()
            .join("|");

        let rules = vec![
            (HeadingRule::Markdown, Regex::new(r"^#{1,6}\s+")?),
            (
                HeadingRule::ListItem,
                Regex::new(r"^(?:\d+[.)、]|[-*+•]\s)")?,
            ),
            (
                HeadingRule::BareLabel,
                Regex::new(&format!(
                    r"^{em}[A-Za-z\p{{Han}}][\w\s]{{1,{max}}}?\s*{em}[:：]{em}$",
                    em = em,
                    max = config.max_label_chars - 1,
                ))?,
            ),
            (
                HeadingRule::Keyword,
                Regex::new(&format!(
                    r"(?i)^{em}(?:{keywords})(?:\s*\d+)?{em}\s*[:：]",
                    em = em,
                    keywords = keywords,
                ))?,
            ),
        ];

        Ok(Self { rules })
    }

    /// Rules in evaluation order
    pub fn order(&self) -> Vec<HeadingRule> {
        self.rules.iter().map(|(rule, _)| *rule).collect()
    }

    /// First rule matching the line, if any
    pub fn first_match(&self, line: &str) -> Option<HeadingRule> {
        self.rules
            .iter()
            .find(|(_, pattern)| pattern.is_match(line))
            .map(|(rule, _)| *rule)
    }

    /// Classify a line seen inside an open section
    pub fn classify(&self, line: &str) -> Verdict {
        self.first_match(line)
            .map_or(Verdict::Body, HeadingRule::verdict)
    }

    /// True when the line would end an open section
    pub fn is_heading(&self, line: &str) -> bool {
        self.classify(line) == Verdict::Heading
    }
}
