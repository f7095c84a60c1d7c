use crate::index::DisplayEntry;
use crate::model::TimeEntry;

pub use daybook_core::message::{CmdMessage, MessageLevel};

pub mod delete;
pub mod edit;
pub mod list;
pub mod note;
pub mod start;
pub mod status;
pub mod stop;
pub mod summary;
pub mod view;

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_entries: Vec<TimeEntry>,
    pub listed_entries: Vec<DisplayEntry>,
    pub summary: Option<summary::Summary>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_entries(mut self, entries: Vec<DisplayEntry>) -> Self {
        self.listed_entries = entries;
        self
    }

    pub fn with_summary(mut self, summary: summary::Summary) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Message texts only, in order. Handy for assertions.
    pub fn message_texts(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.content.as_str()).collect()
    }
}

pub(crate) const NO_ENTRIES: &str = "No time entries found";
pub(crate) const NOT_RUNNING: &str = "No task is currently running";

#[cfg(test)]
pub(crate) mod test_support {
    use crate::model::{TimeData, TimeEntry};
    use chrono::{DateTime, Local, TimeZone};
    use daybook_core::store::memory::InMemoryStore;

    pub fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    pub fn closed(id: &str, title: &str, start: DateTime<Local>, end: DateTime<Local>) -> TimeEntry {
        TimeEntry {
            id: id.into(),
            title: title.into(),
            start_time: start,
            end_time: Some(end),
            notes: String::new(),
        }
    }

    pub fn store_with(entries: Vec<TimeEntry>) -> InMemoryStore<TimeData> {
        InMemoryStore::with_doc(TimeData { entries })
    }
}
