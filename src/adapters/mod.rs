// Adapters layer: concrete implementations of the domain ports.

pub mod fixture;
pub mod prompt;
pub mod storage;

pub use fixture::TomlFixtureSink;
pub use prompt::{ScriptedPrompt, TerminalPrompt};
pub use storage::LocalDocumentStore;
