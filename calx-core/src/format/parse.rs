//! Line parsing for the calx format.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::warn;

use super::{parse_date, unescape_description};
use crate::event::{Event, Recurrence};

/// Why a non-blank, non-comment line failed to parse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseLineError {
    #[error("expected `<date> <description>`")]
    MissingDescription,

    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Parse one line of a source into an event.
///
/// Returns `Ok(None)` for blank lines and `#` comments. A parse failure never
/// yields a partially-populated event; callers log the error and skip the
/// line.
pub fn parse_line(line: &str, source: &str) -> Result<Option<Event>, ParseLineError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (line, tag) = match extract_tag(line) {
        Some((stripped, raw)) => (stripped, RecurrenceTag::parse(raw)),
        None => (line.to_string(), RecurrenceTag::default()),
    };

    let Some((date_str, description)) = line.split_once(char::is_whitespace) else {
        return Err(ParseLineError::MissingDescription);
    };
    let description = description.trim();
    if description.is_empty() {
        return Err(ParseLineError::MissingDescription);
    }

    let date = parse_date(date_str)
        .map_err(|_| ParseLineError::InvalidDate(date_str.to_string()))?;

    // An end date without a recurrence kind is meaningless; drop it.
    let end_date = tag.end_date.filter(|_| tag.recurring.is_some());

    Ok(Some(Event {
        date,
        description: unescape_description(description),
        source: source.to_string(),
        recurring: tag.recurring,
        end_date,
    }))
}

/// The parsed content of a `[...]` segment, e.g. `weekly,end:2025-12-31`.
#[derive(Debug, Default)]
struct RecurrenceTag {
    recurring: Option<Recurrence>,
    end_date: Option<NaiveDate>,
}

impl RecurrenceTag {
    fn parse(raw: &str) -> Self {
        let raw = raw.to_lowercase();
        let mut pieces = raw.split(',');

        let recurring = Recurrence::from_token(pieces.next().unwrap_or("").trim());

        let mut end_date = None;
        for piece in pieces {
            if let Some(value) = piece.trim().strip_prefix("end:") {
                let value = value.trim();
                match parse_date(value) {
                    Ok(date) => end_date = Some(date),
                    // A bad end date does not reject the line; the event
                    // just loses its bound.
                    Err(_) => warn!(end_date = value, "invalid end date in recurrence tag, ignoring"),
                }
            }
        }

        RecurrenceTag { recurring, end_date }
    }
}

/// Split the first `[...]` segment out of a line, returning the line with the
/// segment removed and the raw content between the brackets.
fn extract_tag(line: &str) -> Option<(String, &str)> {
    let open = line.find('[')?;
    let close = line.find(']')?;
    if close < open {
        return None;
    }
    let content = &line[open + 1..close];
    let stripped = format!("{}{}", &line[..open], &line[close + 1..]);
    Some((stripped, content))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn parse(line: &str) -> Result<Option<Event>, ParseLineError> {
        parse_line(line, "global/test")
    }

    #[test]
    fn blank_and_comment_lines_parse_to_nothing() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("   ").unwrap(), None);
        assert_eq!(parse("# a note").unwrap(), None);
        assert_eq!(parse("  # indented note").unwrap(), None);
    }

    #[test]
    fn parses_a_plain_event() {
        let event = parse("2025-01-01 New Year's Day").unwrap().unwrap();
        assert_eq!(event.date, date(2025, 1, 1));
        assert_eq!(event.description, "New Year's Day");
        assert_eq!(event.source, "global/test");
        assert_eq!(event.recurring, None);
        assert_eq!(event.end_date, None);
    }

    #[test]
    fn parses_a_recurring_event() {
        let event = parse("2025-01-01[yearly] New Year's Day").unwrap().unwrap();
        assert_eq!(event.recurring, Some(Recurrence::Yearly));
        assert_eq!(event.end_date, None);
    }

    #[test]
    fn recurrence_tokens_are_case_insensitive() {
        let event = parse("2025-01-06[WEEKLY] Trash day").unwrap().unwrap();
        assert_eq!(event.recurring, Some(Recurrence::Weekly));
    }

    #[test]
    fn parses_an_end_date() {
        let event = parse("2025-01-06[weekly,end:2025-12-31] Trash day")
            .unwrap()
            .unwrap();
        assert_eq!(event.recurring, Some(Recurrence::Weekly));
        assert_eq!(event.end_date, Some(date(2025, 12, 31)));
    }

    #[test]
    fn unknown_recurrence_tokens_are_kept() {
        let event = parse("2025-01-01[fortnightly] Standup").unwrap().unwrap();
        assert_eq!(
            event.recurring,
            Some(Recurrence::Other("fortnightly".to_string()))
        );
    }

    #[test]
    fn invalid_end_date_is_ignored() {
        let event = parse("2025-01-06[weekly,end:soon] Trash day")
            .unwrap()
            .unwrap();
        assert_eq!(event.recurring, Some(Recurrence::Weekly));
        assert_eq!(event.end_date, None);
    }

    #[test]
    fn empty_tag_is_a_plain_event() {
        let event = parse("2025-01-01[] Party").unwrap().unwrap();
        assert_eq!(event.recurring, None);
        assert_eq!(event.description, "Party");
    }

    #[test]
    fn missing_description_is_an_error() {
        assert_eq!(parse("2025-01-01"), Err(ParseLineError::MissingDescription));
        assert_eq!(
            parse("2025-01-01   "),
            Err(ParseLineError::MissingDescription)
        );
    }

    #[test]
    fn invalid_date_is_an_error() {
        assert_eq!(
            parse("tomorrow party"),
            Err(ParseLineError::InvalidDate("tomorrow".to_string()))
        );
        assert_eq!(
            parse("2025-13-01 party"),
            Err(ParseLineError::InvalidDate("2025-13-01".to_string()))
        );
    }

    #[test]
    fn unescapes_line_breaks_in_descriptions() {
        let event = parse("2025-01-01 line one \\ line two").unwrap().unwrap();
        assert_eq!(event.description, "line one\nline two");
    }
}
