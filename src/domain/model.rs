use serde::{Deserialize, Serialize};

/// The line that opens a new section in the workbench.
pub const SENTINEL: &str = "# =======";

/// The workbench text as it was read from, or will be written to, storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// A delimiter-tagged run of raw document lines.
///
/// `delimiter` holds the sentinel line exactly as it appeared (untrimmed),
/// or `None` for content that precedes the first sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub delimiter: Option<String>,
    pub lines: Vec<String>,
}

impl Section {
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// No sections were left in the workbench.
    Exhausted,
    /// The operator entered the quit token; remaining sections stay in the workbench.
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrittenUnit {
    pub section: usize,
    pub destination: String,
    pub artifact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    pub written: Vec<WrittenUnit>,
    pub skipped: usize,
    pub failed_attempts: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingSection {
    pub number: usize,
    pub has_delimiter: bool,
    pub line_count: usize,
    pub cleaned: String,
    pub would_skip: bool,
}
