use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};

/// A single tracked entry.
///
/// `id` is assigned by the store on insert; a record that has not been saved yet carries `0`.
/// `timestamp` is the time the tracked event happened (seconds since the Unix epoch), which
/// may lie in the past or the future relative to when the record was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    pub timestamp: i64,
}

impl Record {
    pub fn new(title: impl Into<String>, tags: Vec<String>, timestamp: i64) -> Self {
        Self {
            id: 0,
            title: title.into().trim().to_string(),
            tags: normalize_tags(tags),
            timestamp,
        }
    }

    pub fn at<Tz: TimeZone>(title: impl Into<String>, tags: Vec<String>, when: &DateTime<Tz>) -> Self {
        Self::new(title, tags, when.timestamp())
    }

    pub fn is_saved(&self) -> bool {
        self.id != 0
    }

    /// Copy of this record for a new occurrence at `timestamp`. The copy is unsaved.
    pub fn duplicate_at(&self, timestamp: i64) -> Self {
        Self {
            id: 0,
            title: self.title.clone(),
            tags: self.tags.clone(),
            timestamp,
        }
    }

    pub fn apply(&mut self, update: &RecordUpdate) {
        if let Some(title) = &update.title {
            self.title = title.trim().to_string();
        }
        if let Some(tags) = &update.tags {
            self.tags = normalize_tags(tags.clone());
        }
    }
}

/// Fields to merge into an existing record. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordUpdate {
    pub title: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl RecordUpdate {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            tags: None,
        }
    }

    pub fn tags(tags: Vec<String>) -> Self {
        Self {
            title: None,
            tags: Some(tags),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.tags.is_none()
    }
}

/// Trims every tag and drops the blank ones, keeping order.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
