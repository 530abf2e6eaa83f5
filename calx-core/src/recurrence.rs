//! Recurrence expansion for repeating events.
//!
//! Expands a possibly-recurring event record into the concrete occurrences
//! that fall inside a date window. Expansion is eager and finite; a fixed
//! step cap bounds the work done for pathological inputs.

use chrono::{Datelike, Duration, NaiveDate};
use tracing::warn;

use crate::date_range::DateRange;
use crate::event::{Event, Recurrence};

/// Hard bound on stepping per phase. Keeps worst-case latency predictable
/// even for a daily recurrence anchored decades outside the window.
const MAX_STEPS: usize = 10_000;

/// Expand one event record against an inclusive date window.
///
/// Non-recurring records yield themselves when inside the window. Recurring
/// records are first advanced from their anchor date up to the window start,
/// then occurrences are emitted until the window end or the record's own end
/// date, whichever comes first. Both phases clamp identically: a monthly
/// step lands on the anchor's day-of-month clamped to the target month, and
/// a yearly step clamps 29 February to 28 February in non-leap years, so a
/// clamped month never drags later occurrences off the anchor day.
pub fn expand_recurring(event: &Event, range: &DateRange) -> Vec<Event> {
    let Some(kind) = &event.recurring else {
        return one_off(event, range);
    };

    if let Recurrence::Other(token) = kind {
        warn!(
            source = %event.source,
            token = %token,
            "unknown recurrence kind, treating event as one-off"
        );
        return one_off(event, range);
    }

    let effective_end = match event.end_date {
        Some(end) => range.end.min(end),
        None => range.end,
    };

    let anchor = event.date;
    let mut current = anchor;

    let mut steps = 0;
    while current < range.start && steps < MAX_STEPS {
        let Some(next) = step(current, anchor, kind) else {
            break;
        };
        current = next;
        steps += 1;
    }

    let mut occurrences = Vec::new();
    steps = 0;
    while current <= effective_end && steps < MAX_STEPS {
        occurrences.push(Event {
            date: current,
            ..event.clone()
        });
        let Some(next) = step(current, anchor, kind) else {
            break;
        };
        current = next;
        steps += 1;
    }

    occurrences
}

fn one_off(event: &Event, range: &DateRange) -> Vec<Event> {
    if range.contains(event.date) {
        vec![event.clone()]
    } else {
        Vec::new()
    }
}

/// One recurrence step forward from `current`. Monthly and yearly steps aim
/// for the anchor's day (and month) rather than the previous occurrence's,
/// clamping only against the step's own target.
fn step(current: NaiveDate, anchor: NaiveDate, kind: &Recurrence) -> Option<NaiveDate> {
    match kind {
        Recurrence::Daily => Some(current + Duration::days(1)),
        Recurrence::Weekly => Some(current + Duration::days(7)),
        Recurrence::Monthly => Some(next_month(current, anchor.day())),
        Recurrence::Yearly => Some(next_year(current, anchor.month(), anchor.day())),
        Recurrence::Other(_) => None,
    }
}

fn next_month(current: NaiveDate, anchor_day: u32) -> NaiveDate {
    let (year, month) = if current.month() == 12 {
        (current.year() + 1, 1)
    } else {
        (current.year(), current.month() + 1)
    };
    let day = anchor_day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn next_year(current: NaiveDate, anchor_month: u32, anchor_day: u32) -> NaiveDate {
    let year = current.year() + 1;
    NaiveDate::from_ymd_opt(year, anchor_month, anchor_day)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 2, 28).unwrap())
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
                29
            } else {
                28
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(
        anchor: NaiveDate,
        recurring: Option<Recurrence>,
        end_date: Option<NaiveDate>,
    ) -> Event {
        Event {
            date: anchor,
            description: "test".to_string(),
            source: "global/test".to_string(),
            recurring,
            end_date,
        }
    }

    fn dates(occurrences: &[Event]) -> Vec<NaiveDate> {
        occurrences.iter().map(|e| e.date).collect()
    }

    #[test]
    fn one_off_inside_the_window() {
        let record = event(date(2025, 6, 15), None, None);
        let range = DateRange::new(date(2025, 6, 1), date(2025, 6, 30));
        assert_eq!(expand_recurring(&record, &range), vec![record.clone()]);
    }

    #[test]
    fn one_off_outside_the_window() {
        let record = event(date(2025, 7, 15), None, None);
        let range = DateRange::new(date(2025, 6, 1), date(2025, 6, 30));
        assert!(expand_recurring(&record, &range).is_empty());
    }

    #[test]
    fn end_date_on_a_one_off_is_ignored() {
        let record = event(date(2025, 6, 15), None, Some(date(2025, 6, 1)));
        let range = DateRange::new(date(2025, 6, 1), date(2025, 6, 30));
        assert_eq!(expand_recurring(&record, &range).len(), 1);
    }

    #[test]
    fn unknown_kind_falls_back_to_one_off() {
        let record = event(
            date(2025, 6, 15),
            Some(Recurrence::Other("fortnightly".to_string())),
            None,
        );
        let range = DateRange::new(date(2025, 6, 1), date(2025, 6, 30));
        assert_eq!(dates(&expand_recurring(&record, &range)), [date(2025, 6, 15)]);
    }

    #[test]
    fn daily_fills_the_window() {
        let record = event(date(2025, 5, 30), Some(Recurrence::Daily), None);
        let range = DateRange::new(date(2025, 6, 1), date(2025, 6, 4));
        assert_eq!(
            dates(&expand_recurring(&record, &range)),
            [
                date(2025, 6, 1),
                date(2025, 6, 2),
                date(2025, 6, 3),
                date(2025, 6, 4),
            ]
        );
    }

    #[test]
    fn weekly_stops_at_the_record_end_date() {
        let record = event(
            date(2024, 1, 1),
            Some(Recurrence::Weekly),
            Some(date(2024, 1, 15)),
        );
        let range = DateRange::new(date(2024, 1, 1), date(2024, 12, 31));
        assert_eq!(
            dates(&expand_recurring(&record, &range)),
            [date(2024, 1, 1), date(2024, 1, 8), date(2024, 1, 15)]
        );
    }

    #[test]
    fn monthly_clamps_each_month_independently() {
        let record = event(date(2024, 1, 31), Some(Recurrence::Monthly), None);
        let range = DateRange::new(date(2024, 1, 1), date(2024, 6, 1));
        assert_eq!(
            dates(&expand_recurring(&record, &range)),
            [
                date(2024, 1, 31),
                date(2024, 2, 29),
                date(2024, 3, 31),
                date(2024, 4, 30),
                date(2024, 5, 31),
            ]
        );
    }

    #[test]
    fn monthly_advance_phase_clamps_like_generation() {
        let record = event(date(2024, 1, 31), Some(Recurrence::Monthly), None);
        let range = DateRange::new(date(2024, 3, 15), date(2024, 7, 1));
        assert_eq!(
            dates(&expand_recurring(&record, &range)),
            [
                date(2024, 3, 31),
                date(2024, 4, 30),
                date(2024, 5, 31),
                date(2024, 6, 30),
            ]
        );
    }

    #[test]
    fn monthly_rolls_over_december() {
        let record = event(date(2024, 11, 30), Some(Recurrence::Monthly), None);
        let range = DateRange::new(date(2024, 11, 1), date(2025, 2, 1));
        assert_eq!(
            dates(&expand_recurring(&record, &range)),
            [date(2024, 11, 30), date(2024, 12, 30), date(2025, 1, 30)]
        );
    }

    #[test]
    fn yearly_clamps_leap_day_without_skipping() {
        let record = event(date(2024, 2, 29), Some(Recurrence::Yearly), None);
        let range = DateRange::new(date(2025, 1, 1), date(2027, 3, 1));
        assert_eq!(
            dates(&expand_recurring(&record, &range)),
            [date(2025, 2, 28), date(2026, 2, 28), date(2027, 2, 28)]
        );
    }

    #[test]
    fn yearly_leap_day_returns_on_leap_years() {
        let record = event(date(2024, 2, 29), Some(Recurrence::Yearly), None);
        let range = DateRange::new(date(2027, 1, 1), date(2028, 12, 31));
        assert_eq!(
            dates(&expand_recurring(&record, &range)),
            [date(2027, 2, 28), date(2028, 2, 29)]
        );
    }

    #[test]
    fn end_date_before_anchor_yields_nothing() {
        let record = event(
            date(2024, 6, 1),
            Some(Recurrence::Daily),
            Some(date(2024, 5, 1)),
        );
        let range = DateRange::new(date(2024, 1, 1), date(2024, 12, 31));
        assert!(expand_recurring(&record, &range).is_empty());
    }

    #[test]
    fn inverted_window_yields_nothing() {
        let range = DateRange::new(date(2024, 6, 1), date(2024, 1, 1));
        let one_off = event(date(2024, 3, 1), None, None);
        let daily = event(date(2024, 3, 1), Some(Recurrence::Daily), None);
        assert!(expand_recurring(&one_off, &range).is_empty());
        assert!(expand_recurring(&daily, &range).is_empty());
    }

    #[test]
    fn step_cap_bounds_expansion_of_a_distant_anchor() {
        let record = event(date(1970, 1, 1), Some(Recurrence::Daily), None);
        let range = DateRange::new(date(2030, 1, 1), date(2085, 12, 31));
        let occurrences = expand_recurring(&record, &range);
        // The advance phase gives up after MAX_STEPS days, still short of the
        // window; the generation phase then emits at most MAX_STEPS more.
        assert_eq!(occurrences.len(), MAX_STEPS);
        assert!(occurrences.iter().all(|e| e.date < range.start));
    }
}
