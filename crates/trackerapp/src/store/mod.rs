//! # Storage Layer
//!
//! Records live in one JSON document: an array of `{id, title, tags, timestamp}` objects.
//!
//! ```text
//! ~/.config/tracker-cli/
//! ├── data.json      # All records (or $TRACKER_DATA_FILE)
//! ├── data.json.meta # {"last_id": N}, the highest id ever assigned
//! └── config.json    # Optional settings
//! ```
//!
//! ## Split
//!
//! - [`backend::StorageBackend`]: raw load/save of the whole collection.
//!   - [`fs_backend::FsBackend`]: the JSON file, written atomically.
//!   - [`mem_backend::MemBackend`]: a `Vec` behind a `RefCell`, for tests.
//! - [`record_store::RecordStore`]: everything with semantics: id assignment, range
//!   queries, merges, removal.
//!
//! ## Freshness
//!
//! Each tracker invocation is a short-lived process and the file may be edited between runs,
//! so `RecordStore` never caches: every operation reloads the collection from the backend.
//!
//! ## Ids
//!
//! New ids are `max(existing ids, last assigned id) + 1`, computed from disk at call time.
//! The last assigned id is kept outside the data file, so deleting the newest record never
//! frees its id, and hand-edited records with higher ids are still respected. A data file
//! without its `.meta` companion falls back to plain max-plus-one.
//!
//! Two processes inserting at the same moment can both compute the same id. There is no
//! locking; the last writer wins.

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod record_store;

pub use record_store::RecordStore;
