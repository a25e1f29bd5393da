use crate::commands::{require, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordUpdate;
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;

pub fn run<B: StorageBackend>(
    store: &mut RecordStore<B>,
    id: u64,
    update: &RecordUpdate,
) -> Result<CmdResult> {
    let mut record = require(store, id)?;
    let mut result = CmdResult::default();

    if update.is_empty() {
        result.add_message(CmdMessage::warning(format!("Nothing to change ({})", id)));
        return Ok(result.with_affected_records(vec![record]));
    }

    store.update(id, update)?;
    record.apply(update);

    result.add_message(CmdMessage::success(format!(
        "Record updated ({}): {}",
        id, record.title
    )));
    Ok(result.with_affected_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn updates_title_and_keeps_the_rest() {
        let mut fixture = StoreFixture::new()
            .with_record("A", &[], 100)
            .with_record("old", &["t"], 50);

        let result = run(&mut fixture.store, 2, &RecordUpdate::title("B")).unwrap();
        assert_eq!(result.affected_records[0].title, "B");

        let stored = fixture.store.get(2).unwrap().unwrap();
        assert_eq!(stored.title, "B");
        assert_eq!(stored.timestamp, 50);
        assert_eq!(stored.tags, vec!["t"]);
    }

    #[test]
    fn clears_tags() {
        let mut fixture = StoreFixture::new().with_record("A", &["x", "y"], 1);
        run(&mut fixture.store, 1, &RecordUpdate::tags(vec![])).unwrap();
        assert!(fixture.store.get(1).unwrap().unwrap().tags.is_empty());
    }

    #[test]
    fn empty_update_changes_nothing() {
        let mut fixture = StoreFixture::new().with_record("A", &["x"], 1);
        let result = run(&mut fixture.store, 1, &RecordUpdate::default()).unwrap();
        assert_eq!(result.messages[0].content, "Nothing to change (1)");
        assert_eq!(fixture.store.get(1).unwrap().unwrap().title, "A");
    }

    #[test]
    fn missing_record_is_not_found() {
        let mut fixture = StoreFixture::new().with_record("A", &[], 1);
        assert!(matches!(
            run(&mut fixture.store, 9, &RecordUpdate::title("B")),
            Err(TrackerError::RecordNotFound(9))
        ));
    }
}
