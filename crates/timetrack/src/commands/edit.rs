use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TimetrackError};
use crate::index::resolve;
use crate::model::TimeData;
use chrono::TimeDelta;
use daybook_core::store::DocumentStore;
use tracing::{info, warn};

/// Requested changes to one entry. At least one field must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryEdit {
    pub title: Option<String>,
    /// Signed shift of the start time in minutes; negative = started earlier.
    pub start_offset_minutes: Option<i64>,
}

impl EntryEdit {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.start_offset_minutes.unwrap_or(0) == 0
    }
}

/// Edit an entry's title and/or shift its start time.
///
/// Changes are applied title first, then start shift, then saved. A shift that
/// would put the start after a set end time aborts the whole command: nothing
/// is saved, including a title change requested in the same call.
pub fn run<S>(store: &mut S, index: usize, edit: &EntryEdit) -> Result<CmdResult>
where
    S: DocumentStore<TimeData>,
{
    if edit.is_empty() {
        return Err(TimetrackError::NothingToEdit);
    }
    let new_title = match &edit.title {
        Some(title) if title.trim().is_empty() => return Err(TimetrackError::EmptyTitle),
        Some(title) => Some(title.trim().to_string()),
        None => None,
    };

    let mut data = store.load()?;
    let pos = resolve(&data.entries, index)?;
    let entry = &mut data.entries[pos];
    let mut result = CmdResult::default();

    if let Some(title) = new_title {
        let old = std::mem::replace(&mut entry.title, title);
        result.add_message(CmdMessage::success(format!(
            "Updated title: '{}' -> '{}'",
            old, entry.title
        )));
    }

    if let Some(minutes) = edit.start_offset_minutes.filter(|m| *m != 0) {
        let old_start = entry.start_time;
        let Some(new_start) = TimeDelta::try_minutes(minutes)
            .and_then(|delta| old_start.checked_add_signed(delta))
        else {
            warn!(id = %entry.id, minutes, "start shift out of range");
            return Err(TimetrackError::StartOutOfRange(minutes));
        };
        if entry.end_time.is_some_and(|end| new_start > end) {
            warn!(id = %entry.id, minutes, "start shift rejected");
            return Err(TimetrackError::StartAfterEnd);
        }
        entry.start_time = new_start;
        result.add_message(CmdMessage::success(format!(
            "Updated start: {} -> {}",
            old_start.format("%H:%M"),
            entry.start_time.format("%H:%M")
        )));
    }

    let edited = entry.clone();
    store.save(&data)?;

    info!(id = %edited.id, index, "edited entry");
    result.affected_entries.push(edited);
    Ok(result)
}
