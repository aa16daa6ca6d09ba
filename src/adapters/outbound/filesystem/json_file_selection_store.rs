use crate::ports::outbound::SelectionStore;
use crate::shared::error::HideoutError;
use crate::shared::security::{
    validate_file_size, validate_not_symlink, validate_regular_file, MAX_FILE_SIZE,
};
use crate::shared::Result;
use indexmap::IndexMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

type Entries = IndexMap<String, String>;

/// JsonFileSelectionStore keeps the selection in a small JSON object
///
/// The file is a flat string map, e.g.
/// `{"highlightedStations": "a,b", "clickedStation": "a"}`. Each write
/// replaces the file atomically through a temporary sibling, so a crash
/// never leaves a half-written state file behind.
pub struct JsonFileSelectionStore {
    path: PathBuf,
}

impl JsonFileSelectionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }

        let size = validate_regular_file(&self.path, "State file")?;
        validate_file_size(size, &self.path, MAX_FILE_SIZE)?;

        let content = fs::read_to_string(&self.path).map_err(|e| HideoutError::FileReadError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;
        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            HideoutError::FileReadError {
                path: self.path.clone(),
                details: format!("State file is not a JSON string map: {}", e),
            }
            .into()
        })
    }

    fn save(&self, entries: &Entries) -> Result<()> {
        if self.path.exists() {
            validate_not_symlink(&self.path, "write")?;
        }

        let write_error = |details: String| HideoutError::FileWriteError {
            path: self.path.clone(),
            details,
        };

        let dir = match self.path.parent() {
            Some(parent) if parent != Path::new("") => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir).map_err(|e| write_error(e.to_string()))?;
        let json = serde_json::to_string_pretty(entries)?;
        file.write_all(json.as_bytes())
            .map_err(|e| write_error(e.to_string()))?;
        file.persist(&self.path)
            .map_err(|e| write_error(e.error.to_string()))?;
        Ok(())
    }
}

impl SelectionStore for JsonFileSelectionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.shift_remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)?;
        tracing::trace!(key, path = %self.path.display(), "selection stored");
        Ok(())
    }
}
