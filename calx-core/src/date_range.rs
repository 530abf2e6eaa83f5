//! Inclusive date window for queries and expansion.

use chrono::{Duration, NaiveDate};

use crate::error::{CalxError, CalxResult};
use crate::format::parse_date;

/// Days to look ahead when no end of window is given.
pub const DEFAULT_DAYS_AHEAD: i64 = 30;

/// Inclusive `[start, end]` window of calendar dates.
///
/// An inverted window (start after end) is legal and simply contains no
/// dates; expansion over it yields nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    /// Resolve an optional window against an explicit `today`.
    /// `start` defaults to `today`, `end` to `start + days_ahead`.
    pub fn resolve(
        today: NaiveDate,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        days_ahead: i64,
    ) -> Self {
        let start = start.unwrap_or(today);
        let end = end.unwrap_or_else(|| start + Duration::days(days_ahead));
        DateRange { start, end }
    }

    /// Parse `--from`/`--to` style arguments into a window.
    pub fn from_args(
        from: Option<&str>,
        to: Option<&str>,
        today: NaiveDate,
        days_ahead: i64,
    ) -> CalxResult<Self> {
        let start = from
            .map(|s| parse_date(s).map_err(|_| CalxError::InvalidDate(s.to_string())))
            .transpose()?;
        let end = to
            .map(|s| parse_date(s).map_err(|_| CalxError::InvalidDate(s.to_string())))
            .transpose()?;

        Ok(Self::resolve(today, start, end, days_ahead))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
