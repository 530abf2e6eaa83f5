//! Reading and writing the calx line format.
//!
//! One event per line: `YYYY-MM-DD[kind,end:YYYY-MM-DD] description`, where
//! the bracket segment is optional. Lines starting with `#` are comments and
//! blank lines are ignored. Embedded line breaks in descriptions are stored
//! as the three-character sequence space-backslash-space.

mod generate;
mod parse;

pub use generate::generate_line;
pub use parse::{parse_line, ParseLineError};

use chrono::NaiveDate;

/// Fixed-width date format used throughout the line grammar.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Sentinel for a line break inside a description: space, backslash, space.
pub const NEWLINE_SENTINEL: &str = " \\ ";

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
}

/// Replace line breaks with the on-disk sentinel.
pub fn escape_description(description: &str) -> String {
    description.replace('\n', NEWLINE_SENTINEL)
}

/// Replace the on-disk sentinel with line breaks.
pub fn unescape_description(description: &str) -> String {
    description.replace(NEWLINE_SENTINEL, "\n")
}
