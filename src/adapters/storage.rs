use crate::core::{Document, DocumentStore};
use crate::utils::error::{Result, SnapcutError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// The workbench file on local disk.
#[derive(Debug, Clone)]
pub struct LocalDocumentStore {
    path: PathBuf,
}

impl LocalDocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, source: std::io::Error) -> SnapcutError {
        SnapcutError::StorageUnavailable {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl DocumentStore for LocalDocumentStore {
    fn load(&self) -> Result<Document> {
        let text = fs::read_to_string(&self.path).map_err(|e| self.unavailable(e))?;
        Ok(Document::from(text))
    }

    /// Writes to a sibling temp file and renames it over the workbench.
    fn save(&self, document: &Document) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir).map_err(|e| self.unavailable(e))?;
        file.write_all(document.as_str().as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| self.unavailable(e))?;
        file.persist(&self.path)
            .map_err(|e| self.unavailable(e.error))?;

        tracing::debug!("Removed processed section from {}", self.path.display());
        Ok(())
    }
}
