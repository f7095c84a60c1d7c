//! # Timetrack Architecture
//!
//! Timetrack records start/stop intervals for tasks in a single JSON document
//! (`~/.timetrack.json` by default). Every invocation is one load → mutate →
//! save cycle; there is no daemon and no state between runs.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade owning store, clock and id generator         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business rules: running state, index mapping, summaries  │
//! │  - Returns CmdResult values, never prints                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (daybook_core::store)                        │
//! │  - JsonFileStore (production), InMemoryStore (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Entry lifecycle
//!
//! An entry is *running* until it gets an end time. At most one entry runs at a
//! time: `start` closes the running entry at the same instant it opens the new
//! one. End times are set once and never cleared.
//!
//! ## Indexes
//!
//! Users address entries by their position in the newest-first listing, not by
//! storage position. See [`index`] for the translation.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`model`]: `TimeEntry` and `TimeData`
//! - [`index`]: Display order and index resolution
//! - [`config`]: Optional config file
//! - [`error`]: Error types
//! - `cli`: Argument parsing and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
