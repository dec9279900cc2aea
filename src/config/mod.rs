pub mod toml_config;

use crate::adapters::fixture::DEFAULT_FIXTURE_KEY;
use crate::core::consumption::DEFAULT_QUIT_TOKEN;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_bare_key, validate_extension, validate_non_empty_string, validate_path, Validate,
};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_WORKBENCH: &str = "examples/workbench.∆";
pub const DEFAULT_OUTPUT_ROOT: &str = "snapshots/tests";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, clap::Parser)]
#[command(name = "snapcut")]
#[command(about = "Cut a workbench of example snippets into individual fixture files")]
pub struct CliConfig {
    /// Workbench file to consume
    #[arg(long)]
    pub workbench: Option<String>,

    /// Directory fixtures are written under
    #[arg(long)]
    pub output_root: Option<String>,

    /// Fixture file extension, without the dot
    #[arg(long)]
    pub extension: Option<String>,

    /// TOML key the snippet is stored under
    #[arg(long)]
    pub fixture_key: Option<String>,

    /// Answer that stops the run
    #[arg(long)]
    pub quit_token: Option<String>,

    /// File with one destination per line, used instead of prompting
    ///
    /// Blank lines and lines starting with '#' are skipped, so a destination
    /// cannot start with '#'.
    #[arg(long)]
    pub destinations: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Write a JSON run report to this path
    #[arg(long)]
    pub report: Option<String>,

    /// Show pending sections without prompting or writing anything
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Flags given on the command line win over the configuration file.
    pub fn apply_to(&self, settings: &mut Settings) {
        let overrides = [
            (&self.workbench, &mut settings.workbench),
            (&self.output_root, &mut settings.output_root),
            (&self.extension, &mut settings.extension),
            (&self.fixture_key, &mut settings.fixture_key),
            (&self.quit_token, &mut settings.quit_token),
        ];
        for (flag, slot) in overrides {
            if let Some(value) = flag {
                *slot = value.clone();
            }
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::validate_file_extensions;

        if let Some(config) = &self.config {
            validate_file_extensions("config", std::slice::from_ref(config), &["toml"])?;
        }
        if let Some(report) = &self.report {
            validate_file_extensions("report", std::slice::from_ref(report), &["json"])?;
        }
        if let Some(destinations) = &self.destinations {
            validate_path("destinations", destinations)?;
        }
        Ok(())
    }
}

/// Fully resolved settings: built-in defaults, then the TOML file, then CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub workbench: String,
    pub output_root: String,
    pub extension: String,
    pub fixture_key: String,
    pub quit_token: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            workbench: DEFAULT_WORKBENCH.to_string(),
            output_root: DEFAULT_OUTPUT_ROOT.to_string(),
            extension: "toml".to_string(),
            fixture_key: DEFAULT_FIXTURE_KEY.to_string(),
            quit_token: DEFAULT_QUIT_TOKEN.to_string(),
        }
    }
}

impl Settings {
    pub fn merge_toml(&mut self, config: &TomlConfig) {
        if let Some(path) = config.workbench.as_ref().and_then(|w| w.path.clone()) {
            self.workbench = path;
        }
        if let Some(fixtures) = &config.fixtures {
            if let Some(root) = &fixtures.root {
                self.output_root = root.clone();
            }
            if let Some(extension) = &fixtures.extension {
                self.extension = extension.clone();
            }
            if let Some(key) = &fixtures.key {
                self.fixture_key = key.clone();
            }
        }
        if let Some(token) = config.prompt.as_ref().and_then(|p| p.quit_token.clone()) {
            self.quit_token = token;
        }
    }
}

impl ConfigProvider for Settings {
    fn workbench_path(&self) -> &str {
        &self.workbench
    }

    fn output_root(&self) -> &str {
        &self.output_root
    }

    fn extension(&self) -> &str {
        &self.extension
    }

    fn fixture_key(&self) -> &str {
        &self.fixture_key
    }

    fn quit_token(&self) -> &str {
        &self.quit_token
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("workbench", &self.workbench)?;
        validate_path("output_root", &self.output_root)?;
        validate_extension("extension", &self.extension)?;
        validate_bare_key("fixture_key", &self.fixture_key)?;
        validate_non_empty_string("quit_token", &self.quit_token)?;
        Ok(())
    }
}
