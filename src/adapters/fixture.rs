use crate::core::{ConfigProvider, OutputSink};
use crate::utils::error::{Result, SnapcutError};
use crate::utils::validation::validate_path;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_FIXTURE_KEY: &str = "script";

/// Writes each cleaned section to `<root>/<destination>.<extension>` as a
/// single-key TOML document.
#[derive(Debug, Clone)]
pub struct TomlFixtureSink {
    root: PathBuf,
    extension: String,
    key: String,
}

impl TomlFixtureSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: "toml".to_string(),
            key: DEFAULT_FIXTURE_KEY.to_string(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            root: PathBuf::from(config.output_root()),
            extension: config.extension().to_string(),
            key: config.fixture_key().to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn fixture_path(&self, destination: &str) -> Result<PathBuf> {
        let failure = |reason: &str| SnapcutError::OutputSinkFailure {
            destination: destination.to_string(),
            reason: reason.to_string(),
        };

        if destination.trim().is_empty() {
            return Err(failure("destination cannot be empty"));
        }
        validate_path("destination", destination)
            .map_err(|_| failure("destination contains null bytes"))?;
        if Path::new(destination).has_root() {
            return Err(failure("destination must be relative to the fixtures root"));
        }

        Ok(self
            .root
            .join(format!("{}.{}", destination, self.extension)))
    }

    pub fn render(&self, content: &str) -> std::result::Result<String, toml::ser::Error> {
        if !content.contains("'''") {
            return Ok(format!("{} = '''\n{}\n'''\n", self.key, content));
        }

        // Literal strings cannot contain ''', let the serializer pick a quoting.
        let mut table = toml::Table::new();
        table.insert(self.key.clone(), toml::Value::String(content.to_string()));
        toml::to_string(&table)
    }
}

fn serialization_failure(destination: &str, e: toml::ser::Error) -> SnapcutError {
    SnapcutError::OutputSinkFailure {
        destination: destination.to_string(),
        reason: format!("TOML serialization error: {}", e),
    }
}

impl OutputSink for TomlFixtureSink {
    fn write_unit(&self, destination: &str, content: &str) -> Result<String> {
        let path = self.fixture_path(destination)?;
        let io_failure = |e: std::io::Error| SnapcutError::OutputSinkFailure {
            destination: destination.to_string(),
            reason: e.to_string(),
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_failure)?;
        }
        let rendered = self
            .render(content)
            .map_err(|e| serialization_failure(destination, e))?;
        fs::write(&path, rendered).map_err(io_failure)?;

        tracing::info!("Created: {}", path.display());
        Ok(path.display().to_string())
    }
}
