//! # Display Index vs Storage Position
//!
//! Entries are stored in insertion order (oldest first) and that order must stay
//! stable for every entry a command does not touch. Users, however, only ever
//! see entries newest first, and every index they type (`view 0`, `delete 2`,
//! `edit 1`, `note 0`) is a position in that newest-first **display order**.
//!
//! Every index-taking command therefore translates before it mutates:
//!
//! ```text
//! storage:  [0] standup 09:00   [1] review 11:00   [2] lunch 12:30
//! display:  0 -> storage 2      1 -> storage 1     2 -> storage 0
//! ```
//!
//! [`display_order`] is a pure function of the stored entries and is computed
//! fresh on every call. Nothing caches it, so a mutation earlier in the same
//! invocation can never leave a stale mapping behind.
//!
//! Entries with equal start times keep their relative storage order (the sort
//! is stable), but callers must not rely on any particular order among ties.

use crate::error::{Result, TimetrackError};
use crate::model::TimeEntry;
use chrono::{DateTime, Local, TimeDelta};

/// Storage positions sorted by start time, most recent first.
pub fn display_order(entries: &[TimeEntry]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| entries[b].start_time.cmp(&entries[a].start_time));
    order
}

/// Maps a user-facing display index to a storage position.
pub fn resolve(entries: &[TimeEntry], index: usize) -> Result<usize> {
    if entries.is_empty() {
        return Err(TimetrackError::NoEntries(index));
    }
    display_order(entries)
        .get(index)
        .copied()
        .ok_or(TimetrackError::InvalidIndex {
            index,
            max: entries.len() - 1,
        })
}

/// An entry paired with its display index and its elapsed time as of the
/// moment the listing was produced.
#[derive(Debug, Clone)]
pub struct DisplayEntry {
    pub index: usize,
    pub entry: TimeEntry,
    pub duration: TimeDelta,
}

impl DisplayEntry {
    pub fn new(index: usize, entry: TimeEntry, now: DateTime<Local>) -> Self {
        let duration = entry.duration(now);
        Self {
            index,
            entry,
            duration,
        }
    }
}

/// All entries in display order, each tagged with its display index.
///
/// **Always** go through this (or [`resolve`]) when presenting entries; never
/// enumerate the stored list directly.
pub fn index_entries(entries: &[TimeEntry], now: DateTime<Local>) -> Vec<DisplayEntry> {
    display_order(entries)
        .into_iter()
        .enumerate()
        .map(|(index, pos)| DisplayEntry::new(index, entries[pos].clone(), now))
        .collect()
}
