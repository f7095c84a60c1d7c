use crate::commands::{clean_title, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{TodoData, TodoItem};
use daybook_core::clock::Clock;
use daybook_core::ids::IdGenerator;
use daybook_core::store::DocumentStore;
use tracing::info;

/// Append an item to the back of the queue.
pub fn run<S, C, G>(store: &mut S, clock: &C, ids: &mut G, title: &str) -> Result<CmdResult>
where
    S: DocumentStore<TodoData>,
    C: Clock,
    G: IdGenerator,
{
    let title = clean_title(title)?;

    let mut data = store.load()?;
    let item = TodoItem::new(ids.next_id(), title, clock.now());
    data.items.push(item.clone());
    store.save(&data)?;

    info!(id = %item.id, position = data.items.len() - 1, "added item");
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Added: {} [{}]",
            item.title, item.id
        )))
        .with_affected(item))
}
