use chrono::{DateTime, Local, TimeDelta};
use serde::{Deserialize, Serialize};

/// One tracked interval of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,
    pub title: String,
    pub start_time: DateTime<Local>,
    /// `None` while the entry is running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Local>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

impl TimeEntry {
    pub fn new(id: String, title: String, start_time: DateTime<Local>) -> Self {
        Self {
            id,
            title,
            start_time,
            end_time: None,
            notes: String::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.end_time.is_none()
    }

    /// Elapsed time: `end - start` once stopped, `now - start` while running.
    pub fn duration(&self, now: DateTime<Local>) -> TimeDelta {
        self.end_time.unwrap_or(now) - self.start_time
    }

    /// Close a running entry. The end never lands before the start.
    pub fn stop(&mut self, now: DateTime<Local>) {
        if self.is_running() {
            self.end_time = Some(now.max(self.start_time));
        }
    }

    pub fn append_note(&mut self, note: &str) {
        if self.notes.is_empty() {
            self.notes = note.to_string();
        } else {
            self.notes.push('\n');
            self.notes.push_str(note);
        }
    }
}

/// The whole time-tracking document, entries in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeData {
    #[serde(default)]
    pub entries: Vec<TimeEntry>,
}

impl TimeData {
    pub fn running(&self) -> Option<&TimeEntry> {
        self.entries.iter().find(|e| e.is_running())
    }

    /// Stops every running entry and returns copies of the ones it closed.
    ///
    /// A well-formed document has at most one; closing all of them restores
    /// that invariant if the file was edited by hand.
    pub fn stop_running(&mut self, now: DateTime<Local>) -> Vec<TimeEntry> {
        self.entries
            .iter_mut()
            .filter(|e| e.is_running())
            .map(|e| {
                e.stop(now);
                e.clone()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 12, h, m, 0).unwrap()
    }

    fn entry(id: &str, start: DateTime<Local>, end: Option<DateTime<Local>>) -> TimeEntry {
        TimeEntry {
            id: id.into(),
            title: format!("task {}", id),
            start_time: start,
            end_time: end,
            notes: String::new(),
        }
    }

    #[test]
    fn running_iff_no_end_time() {
        let mut e = entry("1", at(9, 0), None);
        assert!(e.is_running());
        e.stop(at(10, 0));
        assert!(!e.is_running());
    }

    #[test]
    fn closed_duration_is_exact() {
        let e = entry("1", at(9, 0), Some(at(10, 30)));
        assert_eq!(e.duration(at(23, 0)), TimeDelta::minutes(90));
    }

    #[test]
    fn running_duration_grows_with_now() {
        let e = entry("1", at(9, 0), None);
        let earlier = e.duration(at(9, 30));
        let later = e.duration(at(11, 0));
        assert_eq!(earlier, TimeDelta::minutes(30));
        assert_eq!(later, TimeDelta::hours(2));
        assert!(later >= earlier);
    }

    #[test]
    fn stop_is_set_once() {
        let mut e = entry("1", at(9, 0), None);
        e.stop(at(10, 0));
        e.stop(at(12, 0));
        assert_eq!(e.end_time, Some(at(10, 0)));
    }

    #[test]
    fn stop_never_precedes_start() {
        let mut e = entry("1", at(9, 0), None);
        e.stop(at(8, 0));
        assert_eq!(e.end_time, Some(at(9, 0)));
    }

    #[test]
    fn append_note_joins_with_newline() {
        let mut e = entry("1", at(9, 0), None);
        e.append_note("A");
        assert_eq!(e.notes, "A");
        e.append_note("B");
        assert_eq!(e.notes, "A\nB");
        e.append_note("B");
        assert_eq!(e.notes, "A\nB\nB");
    }

    #[test]
    fn finds_running_entry() {
        let mut data = TimeData {
            entries: vec![
                entry("1", at(8, 0), Some(at(9, 0))),
                entry("2", at(9, 0), None),
            ],
        };
        assert_eq!(data.running().map(|e| e.id.as_str()), Some("2"));

        data.entries[1].stop(at(10, 0));
        assert!(data.running().is_none());
    }

    #[test]
    fn stop_running_closes_all_open_entries() {
        let mut data = TimeData {
            entries: vec![entry("1", at(8, 0), None), entry("2", at(9, 0), None)],
        };
        let closed = data.stop_running(at(11, 0));
        assert_eq!(closed.len(), 2);
        assert!(data.entries.iter().all(|e| e.end_time == Some(at(11, 0))));
    }

    #[test]
    fn optional_fields_are_omitted_on_disk() {
        let e = entry("ab12cd34", at(9, 0), None);
        let json = serde_json::to_value(&e).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("start_time"));
        assert!(!obj.contains_key("end_time"));
        assert!(!obj.contains_key("notes"));
    }

    #[test]
    fn reads_documents_with_offsets_and_missing_fields() {
        let raw = r#"{"entries":[
            {"id":"0a1b2c3d","title":"Write report","start_time":"2024-03-12T09:00:00+01:00","end_time":"2024-03-12T10:15:30+01:00","notes":"draft"},
            {"id":"4e5f6a7b","title":"Email","start_time":"2024-03-12T11:00:00Z"}
        ]}"#;
        let data: TimeData = serde_json::from_str(raw).unwrap();
        assert_eq!(data.entries.len(), 2);
        assert_eq!(
            data.entries[0].duration(at(0, 0)),
            TimeDelta::minutes(75) + TimeDelta::seconds(30)
        );
        assert_eq!(data.entries[0].notes, "draft");
        assert!(data.entries[1].is_running());
        assert_eq!(data.entries[1].notes, "");
    }

    #[test]
    fn document_survives_a_save_load_cycle() {
        let mut closed = entry("1", at(8, 0), Some(at(9, 0)));
        closed.append_note("kept");
        let data = TimeData {
            entries: vec![closed, entry("2", at(9, 0), None)],
        };
        let json = serde_json::to_string_pretty(&data).unwrap();
        let back: TimeData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }
}
