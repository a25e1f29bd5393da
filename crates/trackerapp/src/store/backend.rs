use crate::error::Result;
use crate::model::Record;
use std::path::PathBuf;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while RecordStore handles the "what" (id assignment, queries, merges).
pub trait StorageBackend {
    /// Load every stored record, in collection order.
    /// A store that has never been written is an empty collection.
    fn load_records(&self) -> Result<Vec<Record>>;

    /// Replace the stored collection.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_records(&self, records: &[Record]) -> Result<()>;

    /// The highest id ever assigned, or 0 when none was recorded.
    /// Survives removal of the record that carried it.
    fn load_last_id(&self) -> Result<u64>;

    /// Record `last_id` as the highest id ever assigned.
    fn save_last_id(&self, last_id: u64) -> Result<()>;

    /// Where the collection lives. For FsBackend, the data file; for MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}
