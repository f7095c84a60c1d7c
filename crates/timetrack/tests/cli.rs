#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn data_file(&self) -> PathBuf {
        self.dir.path().join("timetrack.json")
    }

    fn seed(&self, json: &str) {
        fs::write(self.data_file(), json).unwrap();
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("timetrack"));
        cmd.env("HOME", self.dir.path())
            .env("TIMETRACK_CONFIG_DIR", self.dir.path().join("config"))
            .env("TIMETRACK_DATA", self.data_file())
            .env("NO_COLOR", "1")
            .env("TZ", "UTC")
            .env_remove("RUST_LOG");
        cmd
    }

    fn read(&self) -> serde_json::Value {
        read_json(&self.data_file())
    }
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

const TWO_CLOSED: &str = r#"{
  "entries": [
    {
      "id": "aaaa0001",
      "title": "morning standup",
      "start_time": "2024-03-11T09:00:00+00:00",
      "end_time": "2024-03-11T09:15:00+00:00"
    },
    {
      "id": "aaaa0002",
      "title": "code review",
      "start_time": "2024-03-11T10:00:00+00:00",
      "end_time": "2024-03-11T11:30:00+00:00",
      "notes": "looked at the parser"
    }
  ]
}"#;

#[test]
fn start_status_stop_workflow() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["start", "write", "report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Started: write report ["));

    let doc = sb.read();
    let entries = doc["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["title"], "write report");
    assert_eq!(entries[0]["id"].as_str().unwrap().len(), 8);
    assert!(entries[0].get("end_time").is_none());

    sb.cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Running: write report"))
        .stdout(predicate::str::contains("ago)"));

    sb.cmd()
        .args(["start", "review"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stopped: write report (ran for"))
        .stdout(predicate::str::contains("Started: review"));

    sb.cmd()
        .arg("stop")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stopped: review"));

    let doc = sb.read();
    let entries = doc["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.get("end_time").is_some()));

    sb.cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No task is currently running"));
}

#[test]
fn stop_without_running_task_is_not_an_error() {
    let sb = Sandbox::new();
    sb.cmd()
        .arg("stop")
        .assert()
        .success()
        .stdout(predicate::str::contains("No task is currently running"));
    assert!(!sb.data_file().exists());
}

#[test]
fn start_reads_title_from_piped_stdin() {
    let sb = Sandbox::new();
    sb.cmd()
        .arg("start")
        .write_stdin("from a pipe\nsecond line ignored\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Started: from a pipe"));

    assert_eq!(sb.read()["entries"][0]["title"], "from a pipe");
}

#[test]
fn start_without_title_is_a_usage_error() {
    let sb = Sandbox::new();
    sb.cmd()
        .arg("start")
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: missing task title"))
        .stderr(predicate::str::contains("Usage: timetrack start <title>"));
    assert!(!sb.data_file().exists());
}

#[test]
fn list_on_empty_document() {
    let sb = Sandbox::new();
    sb.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No time entries found"));
}

#[test]
fn list_shows_newest_first() {
    let sb = Sandbox::new();
    sb.seed(TWO_CLOSED);

    let output = sb.cmd().arg("list").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.starts_with("IDX"));
    assert!(stdout.contains(&"-".repeat(90)));
    let review = stdout.find("code review").unwrap();
    let standup = stdout.find("morning standup").unwrap();
    assert!(review < standup);
    assert!(stdout.contains("1h 30m"));
    assert!(stdout.contains("15m 0s"));
}

#[test]
fn list_limit_reports_hidden_entries() {
    let sb = Sandbox::new();
    sb.seed(TWO_CLOSED);

    sb.cmd()
        .args(["list", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("code review"))
        .stdout(predicate::str::contains("morning standup").not())
        .stdout(predicate::str::contains(
            "Showing 1 of 2 entries. Use -n <number> to show more.",
        ));

    sb.cmd()
        .args(["list", "-n", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("morning standup"))
        .stdout(predicate::str::contains("Showing").not());
}

#[test]
fn view_shows_details_and_notes() {
    let sb = Sandbox::new();
    sb.seed(TWO_CLOSED);

    sb.cmd()
        .args(["view", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID:       aaaa0002"))
        .stdout(predicate::str::contains("Title:    code review"))
        .stdout(predicate::str::contains("Duration: 1h 30m"))
        .stdout(predicate::str::contains("Notes:\nlooked at the parser"));
}

#[test]
fn out_of_range_index_fails() {
    let sb = Sandbox::new();
    sb.seed(TWO_CLOSED);

    sb.cmd()
        .args(["view", "5"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: invalid index: 5 (valid range: 0-1)",
        ));
}

#[test]
fn non_numeric_index_fails() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["delete", "abc"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn delete_removes_by_display_index() {
    let sb = Sandbox::new();
    sb.seed(TWO_CLOSED);

    sb.cmd()
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted: morning standup"));

    let doc = sb.read();
    let entries = doc["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], "aaaa0002");
}

#[test]
fn edit_title_and_start() {
    let sb = Sandbox::new();
    sb.seed(TWO_CLOSED);

    sb.cmd()
        .args(["edit", "--title", "pairing", "--start", "-30", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Updated title: 'code review' -> 'pairing'",
        ))
        .stdout(predicate::str::contains("Updated start:"));

    let doc = sb.read();
    assert_eq!(doc["entries"][1]["title"], "pairing");
    assert!(doc["entries"][1]["start_time"]
        .as_str()
        .unwrap()
        .contains("09:30:00"));
}

#[test]
fn edit_rejects_start_after_end_and_saves_nothing() {
    let sb = Sandbox::new();
    sb.seed(TWO_CLOSED);

    sb.cmd()
        .args(["edit", "--title", "renamed", "--start", "120", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: adjusted start time would be after end time",
        ));

    assert_eq!(sb.read()["entries"][1]["title"], "code review");
}

#[test]
fn edit_rejects_huge_start_offset() {
    let sb = Sandbox::new();
    sb.seed(TWO_CLOSED);

    sb.cmd()
        .args(["edit", "--start", "1000000000000", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: start offset out of range: 1000000000000 minutes",
        ));

    assert_eq!(
        sb.read()["entries"][1]["start_time"],
        "2024-03-11T10:00:00+00:00"
    );
}

#[test]
fn edit_needs_a_change() {
    let sb = Sandbox::new();
    sb.seed(TWO_CLOSED);

    sb.cmd()
        .args(["edit", "--start", "0", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: must specify --title or --start",
        ));
}

#[test]
fn note_appends_lines() {
    let sb = Sandbox::new();
    sb.seed(TWO_CLOSED);

    sb.cmd()
        .args(["note", "0", "found", "a", "bug"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added note to: code review"));

    assert_eq!(
        sb.read()["entries"][1]["notes"],
        "looked at the parser\nfound a bug"
    );
}

#[test]
fn summary_all_time() {
    let sb = Sandbox::new();
    sb.seed(TWO_CLOSED);

    sb.cmd()
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== All time Summary ==="))
        .stdout(predicate::str::contains("Total time: 1h 45m (2 entries)"))
        .stdout(predicate::str::contains("By task:"))
        .stdout(predicate::str::contains("morning standup: 15m 0s"))
        .stdout(predicate::str::contains("code review: 1h 30m"))
        .stdout(predicate::str::contains("  - looked at the parser"));
}

#[test]
fn summary_today_on_empty_document() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["summary", "--today"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No time entries found"));
}

#[test]
fn summary_today_with_only_old_entries() {
    let sb = Sandbox::new();
    sb.seed(TWO_CLOSED);

    sb.cmd()
        .args(["summary", "--today"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No entries found for the selected period",
        ));
}

#[test]
fn summary_last_finds_previous_working_day() {
    let sb = Sandbox::new();
    sb.seed(TWO_CLOSED);

    sb.cmd()
        .args(["summary", "--last"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Last working day ("))
        .stdout(predicate::str::contains("Total time: 1h 45m (2 entries)"));
}

#[test]
fn corrupt_document_is_reported() {
    let sb = Sandbox::new();
    sb.seed("{ not json");

    sb.cmd()
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: failed to load data"));

    assert_eq!(fs::read_to_string(sb.data_file()).unwrap(), "{ not json");
}

#[test]
fn data_flag_overrides_env() {
    let sb = Sandbox::new();
    let other = sb.dir.path().join("other.json");

    sb.cmd()
        .arg("--data")
        .arg(&other)
        .args(["start", "elsewhere"])
        .assert()
        .success();

    assert!(other.exists());
    assert!(!sb.data_file().exists());
    assert_eq!(read_json(&other)["entries"][0]["title"], "elsewhere");
}

#[test]
fn defaults_to_file_in_home() {
    let sb = Sandbox::new();
    sb.cmd()
        .env_remove("TIMETRACK_DATA")
        .args(["start", "at home"])
        .assert()
        .success();

    assert!(sb.dir.path().join(".timetrack.json").exists());
}

#[test]
fn config_file_sets_data_file() {
    let sb = Sandbox::new();
    let config_dir = sb.dir.path().join("config");
    let configured = sb.dir.path().join("configured.json");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.json"),
        format!(r#"{{"data_file": {:?}}}"#, configured.to_str().unwrap()),
    )
    .unwrap();

    sb.cmd()
        .env_remove("TIMETRACK_DATA")
        .args(["start", "configured"])
        .assert()
        .success();

    assert!(configured.exists());
}

#[test]
fn no_arguments_prints_help_and_fails() {
    let sb = Sandbox::new();
    sb.cmd()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}
