use crate::commands::{CmdMessage, CmdResult, NOT_RUNNING};
use crate::error::Result;
use crate::model::TimeData;
use daybook_core::clock::Clock;
use daybook_core::duration::format_duration;
use daybook_core::store::DocumentStore;
use tracing::info;

/// Stop the running entry. Having nothing to stop is not an error.
pub fn run<S, C>(store: &mut S, clock: &C) -> Result<CmdResult>
where
    S: DocumentStore<TimeData>,
    C: Clock,
{
    let mut data = store.load()?;
    let now = clock.now();

    let stopped = data.stop_running(now);
    if stopped.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(NOT_RUNNING)));
    }

    store.save(&data)?;

    let mut result = CmdResult::default();
    if stopped.len() > 1 {
        result.add_message(CmdMessage::warning(format!(
            "Found {} running entries, stopping all of them",
            stopped.len()
        )));
    }
    for entry in stopped {
        info!(id = %entry.id, "stopped entry");
        result.add_message(CmdMessage::success(format!(
            "Stopped: {} (ran for {})",
            entry.title,
            format_duration(entry.duration(now))
        )));
        result.affected_entries.push(entry);
    }
    Ok(result)
}
