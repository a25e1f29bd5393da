//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point for
//! every tracker operation, whatever the UI.
//!
//! It:
//! - **Resolves date tokens** through [`crate::date`] against the `now` the caller passes in
//! - **Applies defaults** (`--date` absent means `now`; `list` defaults to the configured window)
//! - **Dispatches** to the matching `commands::*::run`
//!
//! It does not format output or talk to a terminal. Token resolution failures come back as
//! [`TrackerError::DateParse`](crate::error::TrackerError::DateParse): an unparseable `--from`
//! is an error, never silently treated as if it had been left out.
//!
//! `TrackerApi<B: StorageBackend>` is generic over the backend:
//! - Production: `TrackerApi<FsBackend>` (see [`TrackerApi::open`])
//! - Testing: `TrackerApi<MemBackend>`

use crate::commands;
use crate::config::TrackerConfig;
use crate::date;
use crate::error::Result;
use crate::model::{Record, RecordUpdate};
use crate::store::backend::StorageBackend;
use crate::store::fs::FileStore;
use crate::store::fs_backend::FsBackend;
use crate::store::RecordStore;
use chrono::{DateTime, TimeZone};
use std::path::{Path, PathBuf};

/// The main API facade for tracker operations.
pub struct TrackerApi<B: StorageBackend> {
    store: RecordStore<B>,
    config: TrackerConfig,
}

impl TrackerApi<FsBackend> {
    /// Open the data file (creating it if needed) and load `config.json` from `config_dir`.
    pub fn open(data_file: impl Into<PathBuf>, config_dir: Option<&Path>) -> Result<Self> {
        let store = FileStore::open(data_file)?;
        let config = match config_dir {
            Some(dir) => TrackerConfig::load(dir)?,
            None => TrackerConfig::default(),
        };
        Ok(Self::new(store, config))
    }
}

impl<B: StorageBackend> TrackerApi<B> {
    pub fn new(store: RecordStore<B>, config: TrackerConfig) -> Self {
        Self { store, config }
    }

    pub fn add_record<Tz: TimeZone>(
        &mut self,
        title: String,
        tags: Vec<String>,
        date_token: Option<&str>,
        now: &DateTime<Tz>,
    ) -> Result<commands::CmdResult> {
        let when = date::resolve_or_now(date_token, now)?;
        commands::add::run(&mut self.store, Record::at(title, tags, &when))
    }

    /// Records between `from` and `to` (both inclusive), latest first.
    ///
    /// A missing `to` is `now`. A missing `from` reaches back `list_window_days` from the
    /// earlier of `to` and `now`, so `--to` alone never produces a reversed range.
    pub fn list_records<Tz: TimeZone>(
        &self,
        from_token: Option<&str>,
        to_token: Option<&str>,
        now: &DateTime<Tz>,
    ) -> Result<commands::CmdResult> {
        let from = date::resolve(from_token, now)?;
        let to = date::resolve_or_now(to_token, now)?.timestamp();
        let from = match from {
            Some(from) => from.timestamp(),
            None => to
                .min(now.timestamp())
                .saturating_sub(self.config.list_window_secs()),
        };
        commands::list::run(&self.store, from, to)
    }

    pub fn show_record(&self, id: u64) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, id)
    }

    pub fn edit_record(&mut self, id: u64, update: &RecordUpdate) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, id, update)
    }

    /// Log another occurrence of record `id` at `date_token` (default `now`).
    pub fn continue_record<Tz: TimeZone>(
        &mut self,
        id: u64,
        date_token: Option<&str>,
        now: &DateTime<Tz>,
    ) -> Result<commands::CmdResult> {
        let when = date::resolve_or_now(date_token, now)?;
        commands::duplicate::run(&mut self.store, id, when.timestamp())
    }

    pub fn delete_record(&mut self, id: u64) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn store_location(&self) -> PathBuf {
        self.store.location()
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
