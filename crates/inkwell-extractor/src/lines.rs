//! Line normalization

/// Split text into trimmed, non-empty lines, preserving source order
///
/// Handles `\n` and `\r\n` endings. Lines borrow from `text`.
pub fn normalize_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(normalize_lines("").is_empty());
        assert!(normalize_lines("  \n\t\n\r\n").is_empty());
    }

    #[test]
    fn test_crlf_and_padding() {
        let lines = normalize_lines("  Name: A \r\n\r\n\tRole: B\n");
        assert_eq!(lines, vec!["Name: A", "Role: B"]);
    }

    #[test]
    fn test_ideographic_space_trimmed() {
        let lines = normalize_lines("\u{3000}外貌：高瘦\u{3000}");
        assert_eq!(lines, vec!["外貌：高瘦"]);
    }
}
