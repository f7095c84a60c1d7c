use crate::commands::{CmdMessage, CmdResult, NOT_RUNNING};
use crate::error::Result;
use crate::model::TimeData;
use daybook_core::clock::Clock;
use daybook_core::duration::format_duration;
use daybook_core::store::DocumentStore;

pub fn run<S, C>(store: &S, clock: &C) -> Result<CmdResult>
where
    S: DocumentStore<TimeData>,
    C: Clock,
{
    let data = store.load()?;
    let Some(running) = data.running() else {
        return Ok(CmdResult::default().with_message(CmdMessage::info(NOT_RUNNING)));
    };

    let elapsed = running.duration(clock.now());
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Running: {} [{}]",
        running.title, running.id
    )));
    result.add_message(CmdMessage::info(format!(
        "Started: {} ({} ago)",
        running.start_time.format("%H:%M:%S"),
        format_duration(elapsed)
    )));
    result.affected_entries.push(running.clone());
    Ok(result)
}
