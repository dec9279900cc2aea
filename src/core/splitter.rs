use crate::domain::model::{Section, SENTINEL};

/// Splits workbench text into sections at sentinel lines.
///
/// Content before the first sentinel becomes a section without a delimiter.
/// Consecutive sentinels never produce an empty section: the later one
/// replaces the pending delimiter. CRLF line endings are read as `\n`.
pub fn split_sections(text: &str) -> Vec<Section> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut sections = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut delimiter: Option<String> = None;

    for line in text.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l)) {
        if line.trim() == SENTINEL {
            if !current.is_empty() {
                sections.push(Section {
                    delimiter: delimiter.take(),
                    lines: std::mem::take(&mut current),
                });
            }
            delimiter = Some(line.to_string());
        } else {
            current.push(line.to_string());
        }
    }

    if !current.is_empty() {
        sections.push(Section {
            delimiter,
            lines: current,
        });
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cleaner::clean_section;

    #[test]
    fn test_single_delimited_section() {
        let sections = split_sections("# =======\n# hello\n# world\n");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].delimiter.as_deref(), Some("# ======="));
        assert_eq!(sections[0].lines, vec!["# hello", "# world", ""]);
    }

    #[test]
    fn test_no_sentinel_yields_one_undelimited_section() {
        let text = "let x = 1\n\n# comment\nx";
        let sections = split_sections(text);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].delimiter, None);
        assert_eq!(sections[0].content(), text);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(split_sections("").is_empty());
    }

    #[test]
    fn test_consecutive_sentinels_are_absorbed() {
        let sections = split_sections("# =======\n  # =======  \n# a\n");

        assert_eq!(sections.len(), 1);
        // The raw, untrimmed line is kept.
        assert_eq!(sections[0].delimiter.as_deref(), Some("  # =======  "));
        assert_eq!(sections[0].lines, vec!["# a", ""]);
    }

    #[test]
    fn test_preamble_and_order_are_preserved() {
        let sections = split_sections("intro\n# =======\n# one\n# =======\n# two");

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].delimiter, None);
        assert_eq!(sections[0].lines, vec!["intro"]);
        assert_eq!(sections[1].lines, vec!["# one"]);
        assert_eq!(sections[2].lines, vec!["# two"]);
        assert!(sections[1..].iter().all(|s| s.delimiter.as_deref() == Some(SENTINEL)));
    }

    #[test]
    fn test_lines_are_not_trimmed() {
        let sections = split_sections("# =======\n    indented  \n");
        assert_eq!(sections[0].lines[0], "    indented  ");
    }

    #[test]
    fn test_crlf_line_endings_are_normalized() {
        let sections = split_sections("# =======\r\n# hello\r\n# world\r\n");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].delimiter.as_deref(), Some("# ======="));
        assert_eq!(clean_section(&sections[0]), "hello\nworld");
    }

    #[test]
    fn test_near_miss_sentinels_are_content() {
        let sections = split_sections("# ======\n#=======\n# ========\n");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].delimiter, None);
        assert_eq!(sections[0].lines.len(), 4);
    }
}
