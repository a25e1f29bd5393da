use super::backend::StorageBackend;
use crate::error::{Result, TrackerError};
use crate::model::{Record, RecordUpdate};
use log::debug;
use std::path::PathBuf;

pub struct RecordStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location()
    }

    /// Persist `record` under a fresh id and return the id.
    ///
    /// The id is one past both the highest id in the collection and the highest id ever
    /// assigned, so removing the newest record never frees its id. Whatever `record.id`
    /// holds is ignored.
    pub fn insert(&mut self, record: &Record) -> Result<u64> {
        let mut records = self.backend.load_records()?;
        let id = next_id(&records, self.backend.load_last_id()?)?;

        // last_id goes first: a failed write may skip an id, never repeat one
        self.backend.save_last_id(id)?;

        let mut stored = record.clone();
        stored.id = id;
        records.push(stored);
        self.backend.save_records(&records)?;

        debug!("inserted record {} at {}", id, record.timestamp);
        Ok(id)
    }

    pub fn get(&self, id: u64) -> Result<Option<Record>> {
        let records = self.backend.load_records()?;
        Ok(records.into_iter().find(|r| r.id == id))
    }

    /// Records with `from_ts <= timestamp <= to_ts`, latest first.
    ///
    /// Records sharing a timestamp keep their collection order. A reversed range is the
    /// caller's problem and simply matches nothing.
    pub fn query_range(&self, from_ts: i64, to_ts: i64) -> Result<Vec<Record>> {
        let mut matching: Vec<Record> = self
            .backend
            .load_records()?
            .into_iter()
            .filter(|r| from_ts <= r.timestamp && r.timestamp <= to_ts)
            .collect();
        // sort_by is stable
        matching.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        debug!(
            "range [{}, {}] matched {} records",
            from_ts,
            to_ts,
            matching.len()
        );
        Ok(matching)
    }

    /// Merge `update` into the record with `id`. Unknown ids are ignored.
    pub fn update(&mut self, id: u64, update: &RecordUpdate) -> Result<()> {
        let mut records = self.backend.load_records()?;
        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            debug!("update of missing record {} ignored", id);
            return Ok(());
        };
        record.apply(update);
        self.backend.save_records(&records)?;
        debug!("updated record {}", id);
        Ok(())
    }

    /// Remove the record with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: u64) -> Result<()> {
        let mut records = self.backend.load_records()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            debug!("remove of missing record {} ignored", id);
            return Ok(());
        }
        self.backend.save_records(&records)?;
        debug!("removed record {}", id);
        Ok(())
    }

    /// Every record, in collection order.
    pub fn all(&self) -> Result<Vec<Record>> {
        self.backend.load_records()
    }
}

fn next_id(records: &[Record], last_id: u64) -> Result<u64> {
    records
        .iter()
        .map(|r| r.id)
        .max()
        .unwrap_or(0)
        .max(last_id)
        .checked_add(1)
        .ok_or_else(|| TrackerError::Store("No ids left to assign".to_string()))
}
