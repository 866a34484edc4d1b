//! Section capture: collect the body lines that follow a heading

use tracing::trace;

use crate::rules::{HeadingRules, Verdict};

/// Body captured after a heading, and where the scan resumes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionCapture {
    /// Captured lines joined with `\n`, in source order
    pub body: String,

    /// Index of the line that ended the section, or the sequence length
    pub resume: usize,
}

/// Capture the section whose heading sits at `start`
///
/// Scans from `start + 1` until a line the rules classify as a heading. The
/// resume index is always greater than `start`, even for adjacent headings or
/// a heading on the last line.
pub fn capture_section(rules: &HeadingRules, lines: &[&str], start: usize) -> SectionCapture {
    let mut body: Vec<&str> = Vec::new();
    let mut idx = start.saturating_add(1);

    while let Some(&line) = lines.get(idx) {
        let verdict = rules.classify(line);
        trace!(line = idx, ?verdict, "classified");
        if verdict == Verdict::Heading {
            break;
        }
        body.push(line);
        idx += 1;
    }

    SectionCapture {
        body: body.join("\n"),
        resume: idx,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractorConfig;

    fn rules() -> HeadingRules {
        HeadingRules::new(&ExtractorConfig::default()).unwrap()
    }

    #[test]
    fn test_list_items_contained() {
        let lines = vec![
            "Key Events:",
            "- did X",
            "- did Y",
            "Conflicts:",
            "- rival appears",
        ];
        let capture = capture_section(&rules(), &lines, 0);
        assert_eq!(capture.body, "- did X\n- did Y");
        assert_eq!(capture.resume, 3);
    }

    #[test]
    fn test_adjacent_headings_still_progress() {
        let lines = vec!["Personality:", "Background:", "orphan"];
        let capture = capture_section(&rules(), &lines, 0);
        assert_eq!(capture.body, "");
        assert_eq!(capture.resume, 1);
    }

    #[test]
    fn test_heading_on_last_line() {
        let lines = vec!["intro", "Summary:"];
        let capture = capture_section(&rules(), &lines, 1);
        assert_eq!(capture.body, "");
        assert_eq!(capture.resume, 2);
    }

    #[test]
    fn test_runs_to_end_of_input() {
        let lines = vec!["Description:", "Quiet and", "watchful."];
        let capture = capture_section(&rules(), &lines, 0);
        assert_eq!(capture.body, "Quiet and\nwatchful.");
        assert_eq!(capture.resume, lines.len());
    }

    #[test]
    fn test_stops_at_markdown_heading() {
        let lines = vec!["背景：", "生于北方小镇。", "## 性格", "冷静"];
        let capture = capture_section(&rules(), &lines, 0);
        assert_eq!(capture.body, "生于北方小镇。");
        assert_eq!(capture.resume, 2);
    }

    #[test]
    fn test_start_past_end() {
        let lines = vec!["only"];
        let capture = capture_section(&rules(), &lines, 5);
        assert_eq!(capture.body, "");
        assert_eq!(capture.resume, 6);
    }
}
