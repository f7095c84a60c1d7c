use crate::commands::{clean_title, CmdMessage, CmdResult};
use crate::error::{check_index, Result};
use crate::model::TodoData;
use daybook_core::store::DocumentStore;
use tracing::info;

/// Replace an item's title in place. Its id and position are kept.
pub fn run<S>(store: &mut S, index: usize, title: &str) -> Result<CmdResult>
where
    S: DocumentStore<TodoData>,
{
    let title = clean_title(title)?;

    let mut data = store.load()?;
    let pos = check_index(data.items.len(), index)?;
    let item = &mut data.items[pos];
    let old = std::mem::replace(&mut item.title, title);
    let edited = item.clone();
    store.save(&data)?;

    info!(id = %edited.id, index, "renamed item");
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Updated: '{}' -> '{}'",
            old, edited.title
        )))
        .with_affected(edited))
}
