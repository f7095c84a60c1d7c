//! # daybook-core
//!
//! Plumbing shared by the `timetrack` and `todo` command-line tools. Neither tool
//! depends on the other; both sit on top of this crate.
//!
//! ```text
//! ┌──────────────────────────┐   ┌──────────────────────────┐
//! │ timetrack (lib + binary) │   │ todolist (lib + `todo`)  │
//! └────────────┬─────────────┘   └─────────────┬────────────┘
//!              └──────────────┬────────────────┘
//!                             ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │ daybook-core                                            │
//! │  store   - DocumentStore trait, JSON file + in-memory   │
//! │  ids     - IdGenerator capability (random / sequential) │
//! │  clock   - Clock capability (system / fixed)            │
//! │  config  - data file + config file resolution           │
//! │  logging - tracing subscriber setup for the binaries    │
//! │  message - leveled messages returned by commands        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Capabilities
//!
//! Anything that makes a command non-deterministic (the wall clock, random
//! identifiers, the filesystem) is passed in as a trait object or generic
//! parameter. Production binaries wire in [`clock::SystemClock`],
//! [`ids::RandomIds`] and [`store::fs::JsonFileStore`]; tests wire in
//! [`clock::FixedClock`], [`ids::SequentialIds`] and
//! [`store::memory::InMemoryStore`].
//!
//! ## Whole-document persistence
//!
//! Each tool keeps exactly one JSON document. Every invocation loads it, mutates
//! it in memory and writes the whole thing back. There is no locking and no
//! atomic rename: two processes racing on the same file lose one write, and a
//! crash between load and save loses the pending change.

pub mod clock;
pub mod config;
pub mod duration;
pub mod error;
pub mod ids;
pub mod logging;
pub mod message;
pub mod store;

pub use error::{DocumentError, Result, StoreError};
