use crate::utils::error::{Result, SnapcutError};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SnapcutError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SnapcutError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extensions(
    field_name: &str,
    files: &[String],
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        if let Some(extension) = std::path::Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            if !allowed_set.contains(extension) {
                return Err(SnapcutError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: format!(
                        "Unsupported file extension: {}. Allowed extensions: {}",
                        extension,
                        allowed_extensions.join(", ")
                    ),
                });
            }
        } else {
            return Err(SnapcutError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: file.clone(),
                reason: "File has no extension or invalid filename".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SnapcutError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Fixture extensions are written without the leading dot, e.g. `toml`.
pub fn validate_extension(field_name: &str, extension: &str) -> Result<()> {
    validate_non_empty_string(field_name, extension)?;

    if extension.starts_with('.') || extension.contains(['/', '\\']) {
        return Err(SnapcutError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: extension.to_string(),
            reason: "Extension must be a bare suffix such as 'toml'".to_string(),
        });
    }
    Ok(())
}

/// TOML bare keys: ASCII letters, digits, `_` and `-`.
pub fn validate_bare_key(field_name: &str, key: &str) -> Result<()> {
    static BARE_KEY: OnceLock<Regex> = OnceLock::new();
    let re = BARE_KEY.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid regex"));

    if !re.is_match(key) {
        return Err(SnapcutError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: key.to_string(),
            reason: "Key must only contain ASCII letters, digits, '_' or '-'".to_string(),
        });
    }
    Ok(())
}
