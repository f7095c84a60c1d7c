use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TimetrackError};
use crate::index::resolve;
use crate::model::TimeData;
use daybook_core::store::DocumentStore;
use tracing::info;

/// Append a note line to an entry. Existing notes are never rewritten.
pub fn run<S>(store: &mut S, index: usize, text: &str) -> Result<CmdResult>
where
    S: DocumentStore<TimeData>,
{
    if text.trim().is_empty() {
        return Err(TimetrackError::EmptyNote);
    }

    let mut data = store.load()?;
    let pos = resolve(&data.entries, index)?;
    let entry = &mut data.entries[pos];
    entry.append_note(text);
    let noted = entry.clone();

    store.save(&data)?;

    info!(id = %noted.id, index, "added note");
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Added note to: {}", noted.title)));
    result.affected_entries.push(noted);
    Ok(result)
}
