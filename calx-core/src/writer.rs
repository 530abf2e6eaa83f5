//! Writing new events into a source.

use tracing::info;

use crate::error::{CalxError, CalxResult};
use crate::event::Recurrence;
use crate::format::{generate_line, parse_date};
use crate::store::EventStore;

/// Validate and append one event line to a source.
///
/// `date` and `end_date` are the raw user-supplied strings; they must be in
/// `YYYY-MM-DD` form. A blank `end_date` counts as absent, and an end date is
/// only kept for recurring events. With `keep_sorted`, the whole source is
/// rewritten sorted by date, discarding blank lines and comments.
///
/// Validation failures surface as distinct [`CalxError`] variants and leave
/// the source untouched.
pub fn add_event(
    store: &dyn EventStore,
    source: &str,
    date: &str,
    recurring: Option<Recurrence>,
    end_date: Option<&str>,
    description: &str,
    keep_sorted: bool,
) -> CalxResult<()> {
    let date = date.trim();
    let date = parse_date(date).map_err(|_| CalxError::InvalidDate(date.to_string()))?;

    let end_date = match end_date.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => {
            Some(parse_date(raw).map_err(|_| CalxError::InvalidEndDate(raw.to_string()))?)
        }
        None => None,
    };

    if description.trim().is_empty() {
        return Err(CalxError::EmptyDescription);
    }

    let end_date = end_date.filter(|_| recurring.is_some());
    let line = generate_line(date, recurring.as_ref(), end_date, description);

    let current = store.read_source(source)?;
    let content = if keep_sorted {
        sorted_content(&current, &line)
    } else {
        appended_content(&current, &line)
    };
    store.write_source(source, &content)?;

    info!(source, line = %line, "added event");
    Ok(())
}

/// Append after ensuring the existing content ends with a line break.
fn appended_content(current: &str, line: &str) -> String {
    let mut content = current.trim_end().to_string();
    if !content.is_empty() {
        content.push('\n');
    }
    content.push_str(line);
    content.push('\n');
    content
}

/// Rewrite the source: every existing event line plus the new one, sorted by
/// the fixed-width date prefix, blanks and comments dropped.
fn sorted_content(current: &str, line: &str) -> String {
    let mut lines: Vec<&str> = current
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect();
    lines.push(line);

    // Textual key: correct only because the date prefix is fixed-width.
    lines.sort_by(|a, b| sort_key(a).cmp(sort_key(b)));

    let mut content = lines.join("\n");
    content.push('\n');
    content
}

fn sort_key(line: &str) -> &str {
    line.get(..10).unwrap_or(line)
}
