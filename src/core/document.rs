use crate::core::splitter::split_sections;
use crate::domain::model::{Document, Section};

impl Document {
    pub fn sections(&self) -> Vec<Section> {
        split_sections(self.as_str())
    }

    /// The document that remains once its first section has been consumed.
    pub fn without_first_section(&self) -> Document {
        let sections = self.sections();
        Document::new(rebuild(sections.get(1..).unwrap_or_default()))
    }
}

/// Reassembles sections into workbench text, then collapses blank-line runs.
pub fn rebuild(sections: &[Section]) -> String {
    let mut text = String::new();

    for section in sections {
        if let Some(delimiter) = &section.delimiter {
            text.push_str(delimiter);
            text.push('\n');
        }
        let content = section.content();
        text.push_str(&content);
        if !content.ends_with('\n') {
            text.push('\n');
        }
    }

    collapse_blank_runs(text)
}

/// Replaces every run of two or more blank lines with a single blank line.
pub fn collapse_blank_runs(mut text: String) -> String {
    while text.contains("\n\n\n") {
        text = text.replace("\n\n\n", "\n\n");
    }
    text
}
