//! `continue`: log another occurrence of an existing record.
//!
//! The new record copies the source's title and tags, gets its own id, and carries the
//! given timestamp. The source is left untouched.

use crate::commands::{require, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;

pub fn run<B: StorageBackend>(store: &mut RecordStore<B>, id: u64, timestamp: i64) -> Result<CmdResult> {
    let source = require(store, id)?;
    let mut copy = source.duplicate_at(timestamp);
    copy.id = store.insert(&copy)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Continued ({} -> {}): {}",
        source.id, copy.id, copy.title
    )));
    Ok(result.with_affected_records(vec![copy]))
}
