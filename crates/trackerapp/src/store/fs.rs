use super::fs_backend::FsBackend;
use super::record_store::RecordStore;
use crate::error::Result;
use std::path::PathBuf;

pub type FileStore = RecordStore<FsBackend>;

impl FileStore {
    /// Bind to `data_file` without touching the filesystem.
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        RecordStore::with_backend(FsBackend::new(data_file))
    }

    /// Bind to `data_file`, creating its directory and an empty file when absent.
    pub fn open(data_file: impl Into<PathBuf>) -> Result<Self> {
        let backend = FsBackend::new(data_file);
        backend.ensure_exists()?;
        Ok(RecordStore::with_backend(backend))
    }
}
