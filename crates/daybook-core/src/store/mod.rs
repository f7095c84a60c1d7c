//! # Storage Layer
//!
//! Both tools persist a single JSON document. The [`DocumentStore`] trait hides
//! where that document lives so command logic can be tested without touching
//! the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: production storage, one pretty-printed JSON file.
//!   A missing or empty file loads as the document's `Default`.
//! - [`memory::InMemoryStore`]: keeps the document in memory and counts saves,
//!   which lets tests assert that an aborted command never wrote anything.
//!
//! ## Concurrency
//!
//! None. `save` overwrites the whole file in place: concurrent invocations race
//! and the last writer wins. A failed write leaves whatever the filesystem left
//! behind; nothing is retried.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Load/save access to one whole document of type `D`.
pub trait DocumentStore<D> {
    /// Load the current document, or `D::default()` when nothing is stored yet.
    fn load(&self) -> Result<D>;

    /// Replace the stored document with `doc`.
    fn save(&mut self, doc: &D) -> Result<()>;
}
