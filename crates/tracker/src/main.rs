//! # Tracker CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file only invokes
//! `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/tracker/src/cli/)                        │
//! │  - clap argument parsing (args.rs)                          │
//! │  - prompts on the controlling terminal (prompt.rs)          │
//! │  - dispatch + tag splitting (handlers.rs)                   │
//! │  - colored table output (render.rs)                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  trackerapp (crates/trackerapp)                             │
//! │  - API facade, commands, date resolution, storage           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any error, including a declined confirmation, ends the process with exit code 1.
//! Set `RUST_LOG=debug` (or pass `-v`) for storage diagnostics on stderr.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
