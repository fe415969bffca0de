use std::fs;
use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;

use crate::store::schema::ProgressData;

const PROGRESS_FILE: &str = "progress.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialize: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Single-snapshot JSON store under the platform data directory.
pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    pub fn new() -> Result<Self, StoreError> {
        let base_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mashq");
        Self::with_base_dir(base_dir)
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn progress_path(&self) -> PathBuf {
        self.base_dir.join(PROGRESS_FILE)
    }

    /// Load the snapshot. Missing or unreadable files and malformed fields
    /// all degrade to defaults; loading never fails.
    pub fn load_progress(&self) -> ProgressData {
        let path = self.progress_path();
        if !path.exists() {
            return ProgressData::default();
        }
        match fs::read_to_string(&path) {
            Ok(content) => ProgressData::from_json(&content),
            Err(_) => ProgressData::default(),
        }
    }

    /// Write the snapshot atomically: tmp file, fsync, rename.
    pub fn save_progress(&self, data: &ProgressData) -> Result<(), StoreError> {
        let path = self.progress_path();
        let tmp_path = path.with_extension("tmp");

        let json = serde_json::to_string_pretty(data)?;
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}
