use crate::commands::{CmdMessage, CmdResult, NO_ENTRIES};
use crate::error::Result;
use crate::index::{resolve, DisplayEntry};
use crate::model::TimeData;
use daybook_core::clock::Clock;
use daybook_core::store::DocumentStore;

pub fn run<S, C>(store: &S, clock: &C, index: usize) -> Result<CmdResult>
where
    S: DocumentStore<TimeData>,
    C: Clock,
{
    let data = store.load()?;
    if data.entries.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(NO_ENTRIES)));
    }

    let pos = resolve(&data.entries, index)?;
    let shown = DisplayEntry::new(index, data.entries[pos].clone(), clock.now());
    Ok(CmdResult::default().with_listed_entries(vec![shown]))
}
