use crate::domain::model::Document;
use crate::utils::error::Result;

pub trait DocumentStore {
    fn load(&self) -> Result<Document>;
    fn save(&self, document: &Document) -> Result<()>;
}

/// What the operator sees when asked where the next section should go.
#[derive(Debug, Clone, Copy)]
pub struct PromptContext<'a> {
    pub section_number: usize,
    pub cleaned: &'a str,
    pub pending: usize,
    pub quit_token: &'a str,
}

pub trait OperatorPrompt {
    /// Blocks until the operator answers. Returns a destination or the quit token.
    fn request_destination(&mut self, context: &PromptContext<'_>) -> Result<String>;

    fn notify(&mut self, _message: &str) {}
}

pub trait OutputSink {
    /// Persists `content` under `destination` and returns the artifact written.
    fn write_unit(&self, destination: &str, content: &str) -> Result<String>;
}

pub trait ConfigProvider {
    fn workbench_path(&self) -> &str;
    fn output_root(&self) -> &str;
    fn extension(&self) -> &str;
    fn fixture_key(&self) -> &str;
    fn quit_token(&self) -> &str;
}
