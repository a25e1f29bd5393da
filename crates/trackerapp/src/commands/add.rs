use crate::commands::{describe_tags, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;

pub fn run<B: StorageBackend>(store: &mut RecordStore<B>, record: Record) -> Result<CmdResult> {
    let id = store.insert(&record)?;
    let saved = Record { id, ..record };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added ({}): {} [{}]",
        saved.id,
        saved.title,
        describe_tags(&saved)
    )));
    result.affected_records.push(saved);
    Ok(result)
}
