use crate::commands::{require, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;

pub fn run<B: StorageBackend>(store: &RecordStore<B>, id: u64) -> Result<CmdResult> {
    let record = require(store, id)?;
    Ok(CmdResult::default().with_listed_records(vec![record]))
}
