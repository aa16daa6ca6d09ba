use crate::ports::outbound::DatasetSource;
use crate::shared::error::HideoutError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// FileDatasetSource adapter reading the station dataset from disk
///
/// The file must be a regular file (no symlinks) below the size limit.
pub struct FileDatasetSource {
    path: PathBuf,
}

impl FileDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileDatasetSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(HideoutError::DatasetNotFound {
                path: self.path.clone(),
            }
            .into());
        }

        let size = validate_regular_file(&self.path, "Hideout dataset")?;
        validate_file_size(size, &self.path, MAX_FILE_SIZE)?;

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| HideoutError::FileReadError {
                path: self.path.clone(),
                details: e.to_string(),
            })?;
        tracing::debug!(path = %self.path.display(), bytes = content.len(), "dataset read");
        Ok(content)
    }
}
