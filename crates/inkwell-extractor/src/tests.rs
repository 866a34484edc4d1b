//! Integration tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::{
        capture_section, normalize_lines, parse_chapter_outline, parse_character, parse_plot,
        parse_world, Extractor, ExtractorConfig, RecordKind, StructuredRecord,
        DEFAULT_PLOT_TITLE,
    };

    #[test]
    fn test_bilingual_equivalence() {
        let zh = parse_character("姓名：林夜\n外貌：高瘦");
        let en = parse_character("Character Name: Lin Ye\nPhysical Appearance: tall and thin");

        assert_eq!(zh.name, "林夜");
        assert_eq!(zh.appearance, "高瘦");
        assert_eq!(en.name, "Lin Ye");
        assert_eq!(en.appearance, "tall and thin");

        assert_eq!(zh.empty_fields(), en.empty_fields());
    }

    #[test]
    fn test_list_item_containment() {
        let text = "Background Story:\n- did X\n- did Y\nRelationships:\n- sister: Mei";
        let sheet = parse_character(text);
        assert_eq!(sheet.background, "- did X\n- did Y");
        assert!(!sheet.background.contains("Relationships"));
        assert!(!sheet.background.contains("Mei"));
        assert_eq!(sheet.relationships, "- sister: Mei");
    }

    #[test]
    fn test_progress_on_adjacent_headings() {
        let extractor = Extractor::shared();
        let lines = normalize_lines("Key Events:\nConflicts:\nSummary:");
        for start in 0..lines.len() {
            let capture = capture_section(extractor.heading_rules(), &lines, start);
            assert!(capture.resume > start);
        }
    }

    #[test]
    fn test_empty_input_yields_defaults() {
        let sheet = parse_character("");
        assert!(sheet.is_blank());

        let plot = parse_plot("");
        assert_eq!(plot.title, DEFAULT_PLOT_TITLE);
        assert_eq!(plot.description, "");
        assert_eq!(plot.key_events, "");

        let outline = parse_chapter_outline("   \n\t");
        assert_eq!(outline.title, "");
        assert_eq!(outline.summary, "   \n\t");

        let world = parse_world("");
        assert!(world.is_blank());
    }

    #[test]
    fn test_defaults_fed_back_in() {
        let first = parse_character("no structure here");
        let second = parse_character(&first.description);
        assert_eq!(first, second);

        let plot = parse_plot("drifting prose");
        let again = parse_plot(&plot.key_events);
        assert_eq!(again.description, "drifting prose");
        assert_eq!(again.title, DEFAULT_PLOT_TITLE);
    }

    #[test]
    fn test_reordered_sections() {
        let text = "Relationships: rival of Shen\n\
                    Background Story: exiled prince\n\
                    Physical Appearance: silver hair\n\
                    Character Name: Yan";
        let sheet = parse_character(text);
        assert_eq!(sheet.name, "Yan");
        assert_eq!(sheet.relationships, "rival of Shen");
        assert_eq!(sheet.background, "exiled prince");
        assert_eq!(sheet.appearance, "silver hair");
    }

    #[test]
    fn test_markdown_model_output() {
        let text = "## Character Name: Lin Ye\n\n\
                    ### Personality Traits\n\
                    Calm under pressure.\n\n\
                    **Background Story:**\n\
                    Orphaned young, raised by monks.\n\
                    1. left the monastery at 16\n\
                    2. joined the guard\n\n\
                    ## Closing Notes\n\
                    Tone: restrained.";
        let sheet = parse_character(text);
        assert_eq!(
            sheet.background,
            "Orphaned young, raised by monks.\n1. left the monastery at 16\n2. joined the guard"
        );
        // A markdown heading without a colon declares no label
        assert_eq!(sheet.personality, "");
    }

    #[test]
    fn test_strict_config_ignores_bold_labels() {
        let strict = Extractor::new(ExtractorConfig::strict()).unwrap();
        let sheet = strict.parse_character("**Background Story:** exiled");
        assert_eq!(sheet.background, "");
        assert_eq!(sheet.description, "**Background Story:** exiled");

        let lenient = Extractor::new(ExtractorConfig::lenient()).unwrap();
        assert_eq!(lenient.parse_character("**Background Story:** exiled").background, "exiled");
    }

    #[test]
    fn test_every_kind_is_total_on_mixed_text() {
        let text = "# 第一章\r\nChapter Title: 开端\r\n- item\r\n规则：\r\n* 魔法：禁止\r\n：\r\n:\r\n###\r\n";
        let extractor = Extractor::shared();
        for kind in RecordKind::ALL {
            let record = extractor.extract(kind, text);
            assert_eq!(record.kind(), kind);
            assert!(!record.fields().is_empty());
        }
    }
}

#[cfg(test)]
mod proptests {
    use crate::{
        capture_section, normalize_lines, parse_chapter_outline, parse_character, parse_plot,
        parse_world, Extractor, StructuredRecord,
    };
    use proptest::prelude::*;

    /// Lines drawn from the vocabulary that the heading rules and labels react to
    fn line_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("Character Name: Lin".to_string()),
            Just("姓名：林夜".to_string()),
            Just("外貌：".to_string()),
            Just("Key Events:".to_string()),
            Just("- bullet".to_string()),
            Just("1. item".to_string()),
            Just("## Heading".to_string()),
            Just("Rules:".to_string()),
            Just("- Magic: forbidden".to_string()),
            Just("：".to_string()),
            Just("".to_string()),
            "[a-zA-Z :：\\-*#]{0,30}",
            "\\PC{0,40}",
        ]
    }

    proptest! {
        /// Property: every extractor is total and fills every declared field
        #[test]
        fn test_extractors_total(text in "(\\PC|\\s){0,200}") {
            let sheet = parse_character(&text);
            prop_assert_eq!(sheet.fields().len(), 7);
            let plot = parse_plot(&text);
            prop_assert!(!plot.title.is_empty());
            prop_assert_eq!(parse_chapter_outline(&text).fields().len(), 3);
            prop_assert_eq!(parse_world(&text).fields().len(), 4);
        }

        /// Property: structured-looking input never panics and keeps defaults
        #[test]
        fn test_structured_input_total(lines in prop::collection::vec(line_strategy(), 0..25)) {
            let text = lines.join("\n");
            let sheet = parse_character(&text);
            prop_assert!(!sheet.description.is_empty() || normalize_lines(&text).is_empty());
            let plot = parse_plot(&text);
            prop_assert!(!plot.title.is_empty());
            let _ = parse_world(&text);
        }

        /// Property: capture always resumes past its start
        #[test]
        fn test_capture_progress(
            lines in prop::collection::vec(line_strategy(), 0..20),
            start in 0usize..25,
        ) {
            let text = lines.join("\n");
            let normalized = normalize_lines(&text);
            let capture = capture_section(Extractor::shared().heading_rules(), &normalized, start);
            prop_assert!(capture.resume > start);
            prop_assert!(capture.resume <= normalized.len().max(start + 1));
        }

        /// Property: normalized lines are trimmed, non-empty, and keep every
        /// visible character in source order
        #[test]
        fn test_normalized_lines(text in "(\\PC|\\s){0,200}") {
            let lines = normalize_lines(&text);
            for line in &lines {
                prop_assert!(!line.is_empty());
                prop_assert_eq!(*line, line.trim());
                prop_assert!(!line.contains('\n'));
            }
            let visible = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
            prop_assert_eq!(visible(&lines.concat()), visible(&text));
        }
    }
}
