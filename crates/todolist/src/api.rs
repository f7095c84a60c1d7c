//! # API Facade
//!
//! Entry point for every queue operation. Owns the store, clock and id
//! generator and forwards to the matching command; see the timetrack crate
//! for the same layering.

use crate::commands;
use crate::error::Result;
use crate::model::TodoData;
use daybook_core::clock::Clock;
use daybook_core::ids::IdGenerator;
use daybook_core::store::DocumentStore;

pub struct TodoApi<S, C, G> {
    store: S,
    clock: C,
    ids: G,
}

impl<S, C, G> TodoApi<S, C, G>
where
    S: DocumentStore<TodoData>,
    C: Clock,
    G: IdGenerator,
{
    pub fn new(store: S, clock: C, ids: G) -> Self {
        Self { store, clock, ids }
    }

    pub fn add(&mut self, title: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.store, &self.clock, &mut self.ids, title)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn done(&mut self, index: usize) -> Result<CmdResult> {
        commands::done::run(&mut self.store, index)
    }

    pub fn next(&self) -> Result<CmdResult> {
        commands::next::run(&self.store)
    }

    pub fn edit(&mut self, index: usize, title: &str) -> Result<CmdResult> {
        commands::edit::run(&mut self.store, index, title)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, IndexedItem, MessageLevel};
