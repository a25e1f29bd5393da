use super::backend::StorageBackend;
use crate::error::{Result, TrackerError};
use crate::model::Record;
use log::debug;
use std::fs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// JSON file backend. The whole collection is one pretty-printed array in `data_file`.
///
/// The highest id ever handed out lives next to it in `<data_file>.meta`, so the data file
/// itself stays a plain array that can be edited by hand.
///
/// Every call opens, reads or writes, and closes the file; no handle outlives the call.
pub struct FsBackend {
    data_file: PathBuf,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreMeta {
    #[serde(default)]
    last_id: u64,
}

impl FsBackend {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn meta_file(&self) -> PathBuf {
        let mut name = self
            .data_file
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".meta");
        self.data_file.with_file_name(name)
    }

    /// Create the parent directory and an empty data file if either is missing.
    pub fn ensure_exists(&self) -> Result<()> {
        if let Some(parent) = self.parent_dir() {
            ensure_dir(parent)?;
        }
        if !self.data_file.exists() {
            debug!("creating empty data file {}", self.data_file.display());
            fs::write(&self.data_file, "").map_err(TrackerError::Io)?;
        }
        Ok(())
    }

    fn parent_dir(&self) -> Option<&Path> {
        self.data_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
    }

    fn write_dir(&self) -> Result<&Path> {
        let dir = self.parent_dir().unwrap_or_else(|| Path::new("."));
        ensure_dir(dir)?;
        Ok(dir)
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(TrackerError::Io)?;
    }
    Ok(())
}

/// Write `content` to a temp file in `dir`, then rename it over `target`.
/// The temp file is removed again if the rename fails.
fn write_atomic(dir: &Path, target: &Path, content: &str) -> Result<()> {
    let tmp_file = dir.join(format!(".data-{}.tmp", Uuid::new_v4()));
    fs::write(&tmp_file, content).map_err(TrackerError::Io)?;
    if let Err(e) = fs::rename(&tmp_file, target) {
        let _ = fs::remove_file(&tmp_file);
        return Err(TrackerError::Io(e));
    }
    Ok(())
}

impl StorageBackend for FsBackend {
    fn load_records(&self) -> Result<Vec<Record>> {
        if !self.data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.data_file).map_err(TrackerError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records: Vec<Record> =
            serde_json::from_str(&content).map_err(TrackerError::Serialization)?;
        Ok(records)
    }

    fn save_records(&self, records: &[Record]) -> Result<()> {
        let dir = self.write_dir()?;
        let content = serde_json::to_string_pretty(records).map_err(TrackerError::Serialization)?;
        write_atomic(dir, &self.data_file, &content)?;

        debug!(
            "wrote {} records to {}",
            records.len(),
            self.data_file.display()
        );
        Ok(())
    }

    fn load_last_id(&self) -> Result<u64> {
        let meta_file = self.meta_file();
        if !meta_file.exists() {
            return Ok(0);
        }
        let content = fs::read_to_string(&meta_file).map_err(TrackerError::Io)?;
        if content.trim().is_empty() {
            return Ok(0);
        }
        let meta: StoreMeta =
            serde_json::from_str(&content).map_err(TrackerError::Serialization)?;
        Ok(meta.last_id)
    }

    fn save_last_id(&self, last_id: u64) -> Result<()> {
        let dir = self.write_dir()?;
        let content = serde_json::to_string_pretty(&StoreMeta { last_id })
            .map_err(TrackerError::Serialization)?;
        write_atomic(dir, &self.meta_file(), &content)?;
        debug!("last assigned id is now {}", last_id);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.data_file.clone()
    }
}
