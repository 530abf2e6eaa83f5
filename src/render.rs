//! Terminal rendering helpers for agenda output.

use calx_core::Event;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
pub fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    let diff = (date - today).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

/// One agenda line: description, recurrence marker, source tag.
pub fn event_line(event: &Event) -> String {
    let mut line = format!("  {}", first_line(&event.description));
    if let Some(recurring) = &event.recurring {
        line.push(' ');
        line.push_str(&format!("[{recurring}]").cyan().to_string());
    }
    line.push(' ');
    line.push_str(&format!("[{}]", event.source).dimmed().to_string());
    line
}

/// First line of a possibly multi-line description.
fn first_line(description: &str) -> String {
    match description.split_once('\n') {
        Some((first, _)) => format!("{first} ..."),
        None => description.to_string(),
    }
}
