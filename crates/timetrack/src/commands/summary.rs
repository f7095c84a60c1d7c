//! # Summary
//!
//! Totals tracked time per task over a calendar window.
//!
//! | filter  | window                                                        |
//! |---------|---------------------------------------------------------------|
//! | `All`   | everything                                                    |
//! | `Today` | `[local midnight today, ∞)`                                   |
//! | `Week`  | `[local midnight of this week's Monday, ∞)`, Sunday is day 7  |
//! | `Last`  | `[D, D + 1 day)` where D is the latest day before today with entries |
//!
//! Entries are matched on their start time only; an entry that started inside
//! the window counts in full even if it ran past the window's end.

use crate::commands::{CmdMessage, CmdResult, NO_ENTRIES};
use crate::error::Result;
use crate::model::{TimeData, TimeEntry};
use chrono::{DateTime, Datelike, Days, Local, NaiveDate, TimeDelta, TimeZone};
use daybook_core::clock::Clock;
use daybook_core::store::DocumentStore;
use std::collections::HashMap;

pub(crate) const NO_ENTRIES_BEFORE_TODAY: &str = "No entries found before today";
pub(crate) const NO_ENTRIES_IN_PERIOD: &str = "No entries found for the selected period";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryFilter {
    #[default]
    All,
    Today,
    Week,
    Last,
}

/// Half-open `[start, end)` interval over entry start times. A missing bound
/// is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: Option<DateTime<Local>>,
    pub end: Option<DateTime<Local>>,
}

impl Window {
    pub const ALL: Window = Window {
        start: None,
        end: None,
    };

    pub fn contains(&self, t: DateTime<Local>) -> bool {
        self.start.map_or(true, |start| t >= start) && self.end.map_or(true, |end| t < end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTotal {
    pub title: String,
    pub duration: TimeDelta,
    /// Non-empty notes of the grouped entries, in encounter order.
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub label: String,
    pub total: TimeDelta,
    pub entry_count: usize,
    /// One row per distinct title, in order of first appearance.
    pub tasks: Vec<TaskTotal>,
}

pub fn run<S, C>(store: &S, clock: &C, filter: SummaryFilter) -> Result<CmdResult>
where
    S: DocumentStore<TimeData>,
    C: Clock,
{
    let data = store.load()?;
    if data.entries.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(NO_ENTRIES)));
    }

    let now = clock.now();
    let Some((window, label)) = window_for(filter, &data.entries, now) else {
        return Ok(CmdResult::default().with_message(CmdMessage::info(NO_ENTRIES_BEFORE_TODAY)));
    };

    match aggregate(&data.entries, window, label, now) {
        Some(summary) => Ok(CmdResult::default().with_summary(summary)),
        None => Ok(CmdResult::default().with_message(CmdMessage::info(NO_ENTRIES_IN_PERIOD))),
    }
}

/// The window and heading label for `filter`, or `None` when `Last` finds no
/// day before today.
pub fn window_for(
    filter: SummaryFilter,
    entries: &[TimeEntry],
    now: DateTime<Local>,
) -> Option<(Window, String)> {
    let today = now.date_naive();
    match filter {
        SummaryFilter::All => Some((Window::ALL, "All time".to_string())),
        SummaryFilter::Today => Some((
            Window {
                start: Some(local_midnight(today)),
                end: None,
            },
            "Today".to_string(),
        )),
        SummaryFilter::Week => Some((
            Window {
                start: Some(local_midnight(week_start(today))),
                end: None,
            },
            "This week".to_string(),
        )),
        SummaryFilter::Last => {
            let day = last_working_day(entries, today)?;
            let next = day.checked_add_days(Days::new(1))?;
            Some((
                Window {
                    start: Some(local_midnight(day)),
                    end: Some(local_midnight(next)),
                },
                format!("Last working day ({})", day.format("%a %-d %b")),
            ))
        }
    }
}

/// Monday of the ISO week containing `day`.
pub fn week_start(day: NaiveDate) -> NaiveDate {
    let back = u64::from(day.weekday().number_from_monday() - 1);
    day - Days::new(back)
}

/// The latest calendar day strictly before `today` on which some entry started.
pub fn last_working_day(entries: &[TimeEntry], today: NaiveDate) -> Option<NaiveDate> {
    entries
        .iter()
        .map(|e| e.start_time.date_naive())
        .filter(|day| *day < today)
        .max()
}

/// Start of `day` in the local zone. When midnight does not exist (a DST gap),
/// the first valid instant of the day is used.
pub fn local_midnight(day: NaiveDate) -> DateTime<Local> {
    let midnight = day.and_time(chrono::NaiveTime::MIN);
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            (1..=3).find_map(|h| {
                Local
                    .from_local_datetime(&(midnight + TimeDelta::hours(h)))
                    .earliest()
            })
        })
        .unwrap_or_else(|| Local.from_utc_datetime(&midnight))
}

/// Totals for the entries whose start lies in `window`, grouped by exact title.
/// `None` when nothing matches.
pub fn aggregate(
    entries: &[TimeEntry],
    window: Window,
    label: String,
    now: DateTime<Local>,
) -> Option<Summary> {
    let mut total = TimeDelta::zero();
    let mut entry_count = 0;
    let mut tasks: Vec<TaskTotal> = Vec::new();
    let mut by_title: HashMap<&str, usize> = HashMap::new();

    for entry in entries.iter().filter(|e| window.contains(e.start_time)) {
        let duration = entry.duration(now);
        total += duration;
        entry_count += 1;

        let slot = *by_title.entry(entry.title.as_str()).or_insert_with(|| {
            tasks.push(TaskTotal {
                title: entry.title.clone(),
                duration: TimeDelta::zero(),
                notes: Vec::new(),
            });
            tasks.len() - 1
        });
        let task = &mut tasks[slot];
        task.duration += duration;
        if !entry.notes.is_empty() {
            task.notes.push(entry.notes.clone());
        }
    }

    (entry_count > 0).then_some(Summary {
        label,
        total,
        entry_count,
        tasks,
    })
}
