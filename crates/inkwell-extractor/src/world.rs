//! World-building extraction
//!
//! World headings are recognized with dedicated patterns rather than a label
//! table. `era` keeps its body verbatim; the keyed sections are decomposed into
//! `key: value` entries and lines of any other shape are dropped.

use std::collections::BTreeMap;

use inkwell_domain::{WorldSection, WorldSetting};
use regex::Regex;
use tracing::debug;

use crate::config::ExtractorConfig;
use crate::cursor::LineCursor;
use crate::error::ExtractorError;
use crate::lines::normalize_lines;
use crate::rules::{emphasis, HeadingRules, LIST_MARKER};

const HEADINGS: &[(WorldSection, &str)] = &[
    (WorldSection::Era, "Era|Time|时代"),
    (WorldSection::Rules, "Rules|Laws|规则|法则"),
    (WorldSection::Locations, "Locations|Places|地点|场景"),
    (WorldSection::Culture, "Culture|文化"),
];

#[derive(Debug, Clone)]
pub(crate) struct WorldParser {
    headings: Vec<(WorldSection, Regex)>,
    pair: Regex,
    strip_emphasis: bool,
}

impl WorldParser {
    pub(crate) fn new(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        let em = emphasis(config.strip_emphasis);

        let headings = HEADINGS
            .iter()
            .map(|&(section, words)| {
                let pattern = Regex::new(&format!(
                    r"(?i)^(?:#{{1,6}}\s*)?{em}(?:{words}){em}\s*[:：]{em}\s*(.*)$",
                    em = em,
                    words = words,
                ))?;
                Ok((section, pattern))
            })
            .collect::<Result<Vec<_>, ExtractorError>>()?;

        let pair = Regex::new(&format!(
            r"^(?:{marker})?\s*(?P<key>[^:：]{{1,{max}}})[:：]\s*(?P<value>.+)$",
            marker = LIST_MARKER,
            max = config.max_pair_key_chars,
        ))?;

        Ok(Self {
            headings,
            pair,
            strip_emphasis: config.strip_emphasis,
        })
    }

    fn match_heading<'a>(&self, line: &'a str) -> Option<(WorldSection, &'a str)> {
        self.headings.iter().find_map(|(section, pattern)| {
            let caps = pattern.captures(line)?;
            let inline = caps.get(1).map_or("", |m| m.as_str().trim());
            Some((*section, inline))
        })
    }

    /// Add every `key: value` line of `block` to `entries`; later keys win
    fn decompose(&self, block: &str, entries: &mut BTreeMap<String, String>) {
        for line in normalize_lines(block) {
            let Some(caps) = self.pair.captures(line) else {
                continue;
            };
            let mut key = caps.name("key").map_or("", |m| m.as_str()).trim();
            if self.strip_emphasis {
                key = key.trim_matches(|c: char| c == '*' || c == '_').trim();
            }
            let value = caps.name("value").map_or("", |m| m.as_str()).trim();
            if key.is_empty() || value.is_empty() {
                continue;
            }
            entries.insert(key.to_string(), value.to_string());
        }
    }

    pub(crate) fn parse(&self, rules: &HeadingRules, text: &str) -> WorldSetting {
        let lines = normalize_lines(text);
        let mut world = WorldSetting::default();
        let mut cursor = LineCursor::new(&lines, rules);

        while let Some(line) = cursor.peek() {
            let Some((section, inline)) = self.match_heading(line) else {
                cursor.advance();
                continue;
            };
            let body = cursor.consume_section(inline);
            debug!(
                section = section.as_str(),
                resume = cursor.position(),
                "captured world section"
            );

            match world.entries_mut(section) {
                Some(entries) => self.decompose(&body, entries),
                None => {
                    if !body.is_empty() {
                        world.era = body;
                    }
                }
            }
        }

        world
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> WorldSetting {
        let config = ExtractorConfig::default();
        let rules = HeadingRules::new(&config).unwrap();
        WorldParser::new(&config).unwrap().parse(&rules, text)
    }

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_rules_decomposed() {
        let world = parse("Rules:\n- Magic: forbidden\n- Currency: gold");
        assert_eq!(world.rules, map(&[("Magic", "forbidden"), ("Currency", "gold")]));
        assert_eq!(world.era, "");
        assert!(world.locations.is_empty());
        assert!(world.culture.is_empty());
    }

    #[test]
    fn test_all_sections() {
        let text = "Era:\nLate Bronze Age,\nafter the flood.\n\
                    Laws:\n1. Oaths: binding unto death\n\
                    Places:\n* Harbor Town: trade hub\n* The Spire: seat of the council\n\
                    Culture:\n- Festivals: lantern night\nmostly agrarian";
        let world = parse(text);
        assert_eq!(world.era, "Late Bronze Age,\nafter the flood.");
        assert_eq!(world.rules, map(&[("Oaths", "binding unto death")]));
        assert_eq!(
            world.locations,
            map(&[("Harbor Town", "trade hub"), ("The Spire", "seat of the council")])
        );
        assert_eq!(world.culture, map(&[("Festivals", "lantern night")]));
    }

    #[test]
    fn test_chinese_sections() {
        let world = parse("时代：架空唐朝\n规则：\n- 宵禁：子时\n地点：\n- 长安：都城\n文化：\n- 茶道：盛行");
        assert_eq!(world.era, "架空唐朝");
        assert_eq!(world.rules, map(&[("宵禁", "子时")]));
        assert_eq!(world.locations, map(&[("长安", "都城")]));
        assert_eq!(world.culture, map(&[("茶道", "盛行")]));
    }

    #[test]
    fn test_duplicate_key_overwrites() {
        let world = parse("Rules:\n- Magic: forbidden\n- Magic: licensed");
        assert_eq!(world.rules, map(&[("Magic", "licensed")]));
    }

    #[test]
    fn test_repeated_section_merges() {
        let world =
            parse("Rules:\n- Magic: forbidden\nCulture:\n- Tea: daily\nRules:\n- Currency: gold");
        assert_eq!(world.rules, map(&[("Magic", "forbidden"), ("Currency", "gold")]));
    }

    #[test]
    fn test_keyword_prefixed_entry_stays_in_section() {
        let world = parse("Rules:\nMagic: forbidden\nRole of the king: absolute\nCurrency: gold");
        assert_eq!(
            world.rules,
            map(&[
                ("Magic", "forbidden"),
                ("Role of the king", "absolute"),
                ("Currency", "gold"),
            ])
        );
    }

    #[test]
    fn test_aliases_after_keyed_section() {
        let world = parse("Rules:\nMagic: forbidden\nTime: Bronze Age\n法则：宵禁：子时\n场景：长安：都城");
        assert_eq!(world.era, "Bronze Age");
        assert_eq!(world.rules, map(&[("Magic", "forbidden"), ("宵禁", "子时")]));
        assert_eq!(world.locations, map(&[("长安", "都城")]));
    }

    #[test]
    fn test_non_pair_lines_dropped() {
        let world = parse("Locations:\nA vast desert with no names.\n- Oasis");
        assert!(world.locations.is_empty());
    }

    #[test]
    fn test_emphasis_around_keys() {
        let world = parse("**Rules:**\n- **Magic**: forbidden");
        assert_eq!(world.rules, map(&[("Magic", "forbidden")]));
    }

    #[test]
    fn test_inline_pair_on_heading() {
        let world = parse("Rules: Magic: forbidden");
        assert_eq!(world.rules, map(&[("Magic", "forbidden")]));
    }

    #[test]
    fn test_long_key_rejected() {
        let key = "k".repeat(60);
        let world = parse(&format!("Rules:\n- {}: value", key));
        assert!(world.rules.is_empty());
    }
}
