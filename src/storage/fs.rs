use super::StorageBackend;
use crate::error::{CardboxError, Result};
use crate::model::Collection;
use std::fs;
use std::path::{Path, PathBuf};

const DATA_FILENAME: &str = "collection.json";

/// File-backed storage: the whole collection as one JSON document under
/// the given root directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(CardboxError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FileStore {
    fn load(&self) -> Result<Option<Collection>> {
        let data_file = self.data_path();
        if !data_file.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(data_file).map_err(CardboxError::Io)?;
        let collection: Collection =
            serde_json::from_str(&content).map_err(CardboxError::Serialization)?;
        Ok(Some(collection))
    }

    fn save(&mut self, collection: &Collection) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let content =
            serde_json::to_string_pretty(collection).map_err(CardboxError::Serialization)?;

        // Write a sibling temp file and rename over the record so a reader
        // never observes a half-written document.
        let tmp_file = self.root.join(format!("{}.tmp", DATA_FILENAME));
        fs::write(&tmp_file, content).map_err(CardboxError::Io)?;
        fs::rename(&tmp_file, self.data_path()).map_err(CardboxError::Io)?;
        Ok(())
    }
}
