use crate::commands::{require, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;

pub fn run<B: StorageBackend>(store: &mut RecordStore<B>, id: u64) -> Result<CmdResult> {
    let record = require(store, id)?;
    store.remove(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record deleted ({}): {}",
        id, record.title
    )));
    Ok(result.with_affected_records(vec![record]))
}
