//! # API Facade
//!
//! The single entry point for every timetrack operation. It owns the store, the
//! clock and the id generator, and forwards to the matching command.
//!
//! The facade holds no business logic and does no I/O of its own; it returns
//! [`CmdResult`] values for the caller to present. It is generic over its
//! capabilities:
//! - Production: `TimetrackApi<JsonFileStore<TimeData>, SystemClock, RandomIds>`
//! - Testing: `TimetrackApi<InMemoryStore<TimeData>, FixedClock, SequentialIds>`

use crate::commands;
use crate::error::Result;
use crate::model::TimeData;
use daybook_core::clock::Clock;
use daybook_core::ids::IdGenerator;
use daybook_core::store::DocumentStore;

pub struct TimetrackApi<S, C, G> {
    store: S,
    clock: C,
    ids: G,
}

impl<S, C, G> TimetrackApi<S, C, G>
where
    S: DocumentStore<TimeData>,
    C: Clock,
    G: IdGenerator,
{
    pub fn new(store: S, clock: C, ids: G) -> Self {
        Self { store, clock, ids }
    }

    pub fn start(&mut self, title: &str) -> Result<CmdResult> {
        commands::start::run(&mut self.store, &self.clock, &mut self.ids, title)
    }

    pub fn stop(&mut self) -> Result<CmdResult> {
        commands::stop::run(&mut self.store, &self.clock)
    }

    pub fn status(&self) -> Result<CmdResult> {
        commands::status::run(&self.store, &self.clock)
    }

    pub fn list(&self, limit: usize) -> Result<CmdResult> {
        commands::list::run(&self.store, &self.clock, limit)
    }

    pub fn view(&self, index: usize) -> Result<CmdResult> {
        commands::view::run(&self.store, &self.clock, index)
    }

    pub fn delete(&mut self, index: usize) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, index)
    }

    pub fn edit(&mut self, index: usize, edit: &EntryEdit) -> Result<CmdResult> {
        commands::edit::run(&mut self.store, index, edit)
    }

    pub fn note(&mut self, index: usize, text: &str) -> Result<CmdResult> {
        commands::note::run(&mut self.store, index, text)
    }

    pub fn summary(&self, filter: SummaryFilter) -> Result<CmdResult> {
        commands::summary::run(&self.store, &self.clock, filter)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::edit::EntryEdit;
pub use commands::summary::{Summary, SummaryFilter, TaskTotal};
pub use commands::{CmdMessage, CmdResult, MessageLevel};
