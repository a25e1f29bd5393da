use crate::error::{Result, TrackerError};
use crate::model::Record;
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;

pub mod add;
pub mod delete;
pub mod duplicate;
pub mod edit;
pub mod list;
pub mod show;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created, changed or removed by the command, in their final state.
    pub affected_records: Vec<Record>,
    /// Records to display, already in display order.
    pub listed_records: Vec<Record>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }
}

/// Fetch `id` or fail with [`TrackerError::RecordNotFound`].
pub(crate) fn require<B: StorageBackend>(store: &RecordStore<B>, id: u64) -> Result<Record> {
    store.get(id)?.ok_or(TrackerError::RecordNotFound(id))
}

/// `"a, b"` for display in messages, or `"no tags"`.
pub(crate) fn describe_tags(record: &Record) -> String {
    if record.tags.is_empty() {
        "no tags".to_string()
    } else {
        record.tags.join(", ")
    }
}
