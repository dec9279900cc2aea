pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{LocalDocumentStore, ScriptedPrompt, TerminalPrompt, TomlFixtureSink};
pub use crate::config::Settings;
pub use crate::core::{consumption::ConsumptionLoop, splitter::split_sections};
pub use crate::domain::model::{Document, RunOutcome, RunSummary, Section};
pub use crate::utils::error::{Result, SnapcutError};
