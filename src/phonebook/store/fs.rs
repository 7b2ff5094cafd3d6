use super::StorageBackend;
use crate::error::{PhonebookError, Result};
use crate::model::Record;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// JSON array snapshot on disk.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Like [`JsonFileBackend::new`], but makes sure the parent directory and an
    /// empty `[]` file exist.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let backend = Self::new(path);
        if let Some(parent) = backend.path.parent() {
            ensure_dir(parent)?;
        }
        if !backend.path.exists() {
            backend.save(&[])?;
        }
        Ok(backend)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path).map_err(PhonebookError::Io)?;
    }
    Ok(())
}

impl StorageBackend for JsonFileBackend {
    fn load(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(PhonebookError::Io)?;
        let records: Vec<Record> =
            serde_json::from_str(&content).map_err(PhonebookError::Serialization)?;
        Ok(records)
    }

    fn save(&self, records: &[Record]) -> Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let content = serde_json::to_string_pretty(records).map_err(PhonebookError::Serialization)?;

        // Atomic replace: the old snapshot survives a failed write.
        let tmp_file = dir.join(format!(".phonebook-{}.tmp", Uuid::new_v4()));
        if let Err(err) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(PhonebookError::Io(err));
        }
        if let Err(err) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(PhonebookError::Io(err));
        }

        Ok(())
    }
}
