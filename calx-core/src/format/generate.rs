//! Line generation for the calx format.

use chrono::NaiveDate;

use super::{escape_description, DATE_FORMAT};
use crate::event::Recurrence;

/// Encode one event line: the inverse of `parse_line` for trimmed
/// descriptions.
///
/// The end date is only emitted inside a recurrence tag, so a non-recurring
/// event can never carry one on disk.
pub fn generate_line(
    date: NaiveDate,
    recurring: Option<&Recurrence>,
    end_date: Option<NaiveDate>,
    description: &str,
) -> String {
    let mut line = date.format(DATE_FORMAT).to_string();

    if let Some(kind) = recurring {
        line.push('[');
        line.push_str(kind.as_str());
        if let Some(end) = end_date {
            line.push_str(",end:");
            line.push_str(&end.format(DATE_FORMAT).to_string());
        }
        line.push(']');
    }

    line.push(' ');
    line.push_str(&escape_description(description.trim()));
    line
}
