use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TrackerError};
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;

/// Records with timestamps in `[from_ts, to_ts]`, latest first.
pub fn run<B: StorageBackend>(store: &RecordStore<B>, from_ts: i64, to_ts: i64) -> Result<CmdResult> {
    if from_ts > to_ts {
        return Err(TrackerError::InvalidRange {
            from: from_ts,
            to: to_ts,
        });
    }

    let records = store.query_range(from_ts, to_ts)?;
    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info("No records found."));
    }
    Ok(result.with_listed_records(records))
}
