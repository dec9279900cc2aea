use crate::domain::model::Section;

/// Strips one level of `#` comment prefix from every non-blank line.
pub fn clean_lines<'a, I>(lines: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.strip_prefix("# ")
                .or_else(|| line.strip_prefix('#'))
                .unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn clean_section(section: &Section) -> String {
    clean_lines(section.lines.iter().map(String::as_str))
}

/// A section whose cleaned content has nothing but whitespace is skipped.
pub fn is_blank(cleaned: &str) -> bool {
    cleaned.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_comment_prefixes() {
        let cleaned = clean_lines(["# hello", "#world", "plain", "#  two spaces"]);
        assert_eq!(cleaned, "hello\nworld\nplain\n two spaces");
    }

    #[test]
    fn test_drops_blank_lines() {
        let cleaned = clean_lines(["", "# a", "   ", "\t", "# b", ""]);
        assert_eq!(cleaned, "a\nb");
    }

    #[test]
    fn test_only_leading_prefix_is_stripped() {
        assert_eq!(clean_lines(["  # indented"]), "  # indented");
        assert_eq!(clean_lines(["# # nested"]), "# nested");
    }

    #[test]
    fn test_lines_emptied_by_stripping_count_as_blank() {
        let cleaned = clean_lines(["#", "# "]);
        assert!(is_blank(&cleaned));
    }

    #[test]
    fn test_clean_section_uses_content_only() {
        let section = Section {
            delimiter: Some("# =======".to_string()),
            lines: vec!["# hello".to_string(), "# world".to_string(), String::new()],
        };
        assert_eq!(clean_section(&section), "hello\nworld");
    }
}
