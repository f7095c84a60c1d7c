use colored::Colorize;
use std::io::Write;
use todolist::api::{CmdMessage, IndexedItem, MessageLevel};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_MAX: usize = 60;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_items(items: &[IndexedItem]) {
    if items.is_empty() {
        return;
    }

    println!("{:<5} {}", "IDX", "TITLE");
    println!("---   -----");
    for li in items {
        println!(
            "{:<5} {}",
            li.index.to_string().yellow(),
            truncate_title(&li.item.title, TITLE_MAX)
        );
    }
}

/// Writes `title` with no trailing newline.
pub(super) fn print_bare(title: &str) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(title.as_bytes())?;
    out.flush()
}

/// Keeps titles within `max` display columns, ending cut titles with `..`.
fn truncate_title(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }

    let budget = max.saturating_sub(2);
    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        result.push(c);
        width += w;
    }
    result.push_str("..");
    result
}
