use super::DocumentStore;
use crate::error::Result;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore<D> {
    doc: D,
    saves: usize,
}

impl<D: Default> InMemoryStore<D> {
    pub fn new() -> Self {
        Self {
            doc: D::default(),
            saves: 0,
        }
    }
}

impl<D> InMemoryStore<D> {
    pub fn with_doc(doc: D) -> Self {
        Self { doc, saves: 0 }
    }

    pub fn doc(&self) -> &D {
        &self.doc
    }

    /// How many times `save` has been called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl<D: Clone> DocumentStore<D> for InMemoryStore<D> {
    fn load(&self) -> Result<D> {
        Ok(self.doc.clone())
    }

    fn save(&mut self, doc: &D) -> Result<()> {
        self.doc = doc.clone();
        self.saves += 1;
        Ok(())
    }
}
