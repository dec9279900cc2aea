pub mod cleaner;
pub mod consumption;
pub mod document;
pub mod splitter;

pub use crate::domain::model::{Document, RunOutcome, RunSummary, Section};
pub use crate::domain::ports::{
    ConfigProvider, DocumentStore, OperatorPrompt, OutputSink, PromptContext,
};
pub use crate::utils::error::Result;
