use crate::commands::CmdResult;
use crate::error::{Result, TodoError};
use crate::model::TodoData;
use daybook_core::store::DocumentStore;

/// The head of the queue, returned as the single affected item. Read-only.
pub fn run<S>(store: &S) -> Result<CmdResult>
where
    S: DocumentStore<TodoData>,
{
    let data = store.load()?;
    let item = data.next().cloned().ok_or(TodoError::NoItems)?;
    Ok(CmdResult::default().with_affected(item))
}
