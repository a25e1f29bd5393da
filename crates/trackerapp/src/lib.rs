//! # Tracker Architecture
//!
//! Tracker is a **UI-agnostic record-tracking library**. The `tracker` binary is one client
//! of it; nothing in here knows about terminals, prompts, or exit codes.
//!
//! A record is a short title, an optional list of tags, and the time the tracked event
//! happened. Records live in a single JSON file and are addressed by small integer ids.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/tracker)                                 │
//! │  - Parses arguments, prompts, renders tables                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Resolves date tokens against an explicit `now`           │
//! │  - Validates ranges, dispatches to commands                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns `CmdResult`            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore: id assignment, range queries                │
//! │  - StorageBackend: FsBackend (JSON file), MemBackend (tests)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Time
//!
//! No function in this crate reads the clock. Anything that depends on "now" takes it as an
//! argument, which keeps date resolution deterministic under test.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`date`]: Human date token resolution
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Record`, `RecordUpdate`)
//! - [`config`]: Data file location and `config.json`
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod date;
pub mod error;
pub mod model;
pub mod store;

#[cfg(test)]
pub mod test_utils;
