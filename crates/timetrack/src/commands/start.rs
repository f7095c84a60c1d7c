use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TimetrackError};
use crate::model::{TimeData, TimeEntry};
use daybook_core::clock::Clock;
use daybook_core::duration::format_duration;
use daybook_core::ids::IdGenerator;
use daybook_core::store::DocumentStore;
use tracing::info;

/// Start a new entry, closing the running one (if any) at the same instant.
pub fn run<S, C, G>(store: &mut S, clock: &C, ids: &mut G, title: &str) -> Result<CmdResult>
where
    S: DocumentStore<TimeData>,
    C: Clock,
    G: IdGenerator,
{
    let title = title.trim();
    if title.is_empty() {
        return Err(TimetrackError::EmptyTitle);
    }

    let mut data = store.load()?;
    let now = clock.now();
    let mut result = CmdResult::default();

    for stopped in data.stop_running(now) {
        info!(id = %stopped.id, "stopped running entry");
        result.add_message(CmdMessage::info(format!(
            "Stopped: {} (ran for {})",
            stopped.title,
            format_duration(stopped.duration(now))
        )));
    }

    let entry = TimeEntry::new(ids.next_id(), title.to_string(), now);
    data.entries.push(entry.clone());
    store.save(&data)?;

    info!(id = %entry.id, "started entry");
    result.add_message(CmdMessage::success(format!(
        "Started: {} [{}]",
        entry.title, entry.id
    )));
    result.affected_entries.push(entry);
    Ok(result)
}
