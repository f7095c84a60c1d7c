use crate::commands::{CmdMessage, CmdResult, IndexedItem, NO_ITEMS};
use crate::error::Result;
use crate::model::TodoData;
use daybook_core::store::DocumentStore;
use tracing::debug;

/// All items in queue order. An empty queue is reported, not an error.
pub fn run<S>(store: &S) -> Result<CmdResult>
where
    S: DocumentStore<TodoData>,
{
    let data = store.load()?;
    debug!(count = data.items.len(), "listing items");

    if data.items.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(NO_ITEMS)));
    }

    let listed_items = data
        .items
        .into_iter()
        .enumerate()
        .map(|(index, item)| IndexedItem { index, item })
        .collect();
    Ok(CmdResult {
        listed_items,
        ..CmdResult::default()
    })
}
