use colored::Colorize;
use daybook_core::duration::format_duration;
use timetrack::api::{CmdMessage, MessageLevel, Summary};
use timetrack::index::DisplayEntry;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_COLUMN: usize = 30;
const TITLE_MAX: usize = 28;
const TIME_COLUMN: usize = 20;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_entries(entries: &[DisplayEntry]) {
    if entries.is_empty() {
        return;
    }

    println!(
        "{:<5} {:<30} {:<20} {:<20} {:<10}",
        "IDX", "TITLE", "START", "END", "DURATION"
    );
    println!("{}", "-".repeat(90));

    for de in entries {
        let entry = &de.entry;
        let end = match entry.end_time {
            Some(end) => end.format("%Y-%m-%d %H:%M").to_string(),
            None => "running".to_string(),
        };
        let end_cell = pad_to_width(&end, TIME_COLUMN);
        let end_cell = if entry.is_running() {
            end_cell.yellow().to_string()
        } else {
            end_cell
        };

        println!(
            "{:<5} {} {} {} {}",
            de.index.to_string().yellow(),
            pad_to_width(&truncate_title(&entry.title, TITLE_MAX), TITLE_COLUMN),
            pad_to_width(&entry.start_time.format("%Y-%m-%d %H:%M").to_string(), TIME_COLUMN),
            end_cell,
            format_duration(de.duration),
        );
    }
}

pub(super) fn print_entry_details(entries: &[DisplayEntry]) {
    for de in entries {
        let entry = &de.entry;
        let end = match entry.end_time {
            Some(end) => end.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => "running".to_string(),
        };

        println!("Index:    {}", de.index);
        println!("ID:       {}", entry.id);
        println!("Title:    {}", entry.title.bold());
        println!("Start:    {}", entry.start_time.format("%Y-%m-%d %H:%M:%S"));
        println!("End:      {}", end);
        println!("Duration: {}", format_duration(de.duration));
        if !entry.notes.is_empty() {
            println!("Notes:\n{}", entry.notes);
        }
    }
}

pub(super) fn print_summary(summary: &Summary) {
    println!("{}\n", format!("=== {} Summary ===", summary.label).bold());
    println!(
        "Total time: {} ({} entries)\n",
        format_duration(summary.total),
        summary.entry_count
    );
    println!("By task:");
    println!("{}", "-".repeat(50));

    for task in &summary.tasks {
        println!("{}: {}", task.title, format_duration(task.duration));
        for line in note_lines(&task.notes) {
            println!("  - {}", line.dimmed());
        }
    }
}

/// Every note split on `\n` alone, keeping empty segments and any `\r`.
fn note_lines(notes: &[String]) -> impl Iterator<Item = &str> {
    notes.iter().flat_map(|note| note.split('\n'))
}

/// Cuts `s` to `max` display columns, marking the cut with `..`.
fn truncate_title(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push_str("..");
    result
}

/// Left-aligns `s` in a column of `width` display columns.
fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
