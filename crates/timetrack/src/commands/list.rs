use crate::commands::{CmdMessage, CmdResult, NO_ENTRIES};
use crate::error::Result;
use crate::index::index_entries;
use crate::model::TimeData;
use daybook_core::clock::Clock;
use daybook_core::store::DocumentStore;

pub const DEFAULT_LIMIT: usize = 10;

/// List entries newest first. A `limit` of 0 shows everything.
pub fn run<S, C>(store: &S, clock: &C, limit: usize) -> Result<CmdResult>
where
    S: DocumentStore<TimeData>,
    C: Clock,
{
    let data = store.load()?;
    if data.entries.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(NO_ENTRIES)));
    }

    let mut listed = index_entries(&data.entries, clock.now());
    let total = listed.len();
    let mut result = CmdResult::default();

    if limit > 0 && limit < total {
        listed.truncate(limit);
        result.add_message(CmdMessage::info(format!(
            "Showing {} of {} entries. Use -n <number> to show more.",
            limit, total
        )));
    }

    Ok(result.with_listed_entries(listed))
}
