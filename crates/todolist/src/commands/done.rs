use crate::commands::{CmdMessage, CmdResult};
use crate::error::{check_index, Result};
use crate::model::TodoData;
use daybook_core::store::DocumentStore;
use tracing::info;

/// Remove the item at a storage position. Later items move up by one.
pub fn run<S>(store: &mut S, index: usize) -> Result<CmdResult>
where
    S: DocumentStore<TodoData>,
{
    let mut data = store.load()?;
    let pos = check_index(data.items.len(), index)?;

    let item = data.items.remove(pos);
    store.save(&data)?;

    info!(id = %item.id, index, "completed item");
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Done: {}", item.title)))
        .with_affected(item))
}
