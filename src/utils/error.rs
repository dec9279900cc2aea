use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapcutError {
    #[error("Workbench storage unavailable at {path}: {source}")]
    StorageUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write fixture '{destination}': {reason}")]
    OutputSinkFailure { destination: String, reason: String },

    #[error("Prompt failed: {0}")]
    PromptError(#[source] std::io::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Storage,
    Output,
    Prompt,
    Configuration,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SnapcutError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SnapcutError::StorageUnavailable { .. } => ErrorCategory::Storage,
            SnapcutError::OutputSinkFailure { .. } => ErrorCategory::Output,
            SnapcutError::PromptError(_) => ErrorCategory::Prompt,
            SnapcutError::IoError(_) | SnapcutError::SerializationError(_) => ErrorCategory::Io,
            SnapcutError::ConfigError { .. }
            | SnapcutError::ConfigValidationError { .. }
            | SnapcutError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Prompt => ErrorSeverity::High,
            ErrorCategory::Storage | ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Only a failed fixture write can be retried with another destination.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SnapcutError::OutputSinkFailure { .. })
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SnapcutError::StorageUnavailable { path, .. } => format!(
                "Check that {} exists and is readable and writable; already processed sections have been removed from it",
                path
            ),
            SnapcutError::OutputSinkFailure { .. } => {
                "Enter a different relative destination for the same section".to_string()
            }
            SnapcutError::PromptError(_) => {
                "Run snapcut from an interactive terminal or pass --destinations".to_string()
            }
            SnapcutError::IoError(_) | SnapcutError::SerializationError(_) => {
                "Check file permissions and free disk space".to_string()
            }
            SnapcutError::ConfigError { .. }
            | SnapcutError::ConfigValidationError { .. }
            | SnapcutError::InvalidConfigValueError { .. } => {
                "Fix the command line flags or the TOML configuration file".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SnapcutError::StorageUnavailable { path, .. } => {
                format!("Cannot access the workbench file {}", path)
            }
            SnapcutError::OutputSinkFailure {
                destination,
                reason,
            } => format!("Fixture '{}' was not written: {}", destination, reason),
            SnapcutError::PromptError(_) => "Could not read the destination from input".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SnapcutError>;
