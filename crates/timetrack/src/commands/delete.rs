use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::resolve;
use crate::model::TimeData;
use daybook_core::store::DocumentStore;
use tracing::info;

/// Remove one entry by display index. There is no undo.
pub fn run<S>(store: &mut S, index: usize) -> Result<CmdResult>
where
    S: DocumentStore<TimeData>,
{
    let mut data = store.load()?;
    let pos = resolve(&data.entries, index)?;

    let removed = data.entries.remove(pos);
    store.save(&data)?;

    info!(id = %removed.id, index, "deleted entry");
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Deleted: {}", removed.title)));
    result.affected_entries.push(removed);
    Ok(result)
}
