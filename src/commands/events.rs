use anyhow::Result;
use calx_core::date_range::DateRange;
use calx_core::query;
use calx_core::store::EventStore;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::render;

pub fn run(
    store: &dyn EventStore,
    principal: Option<&str>,
    range: &DateRange,
    today: NaiveDate,
    json: bool,
) -> Result<()> {
    let events = query::get_events(store, principal, range);

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    // Group events by day and print
    let mut current_date: Option<NaiveDate> = None;

    for event in &events {
        if current_date != Some(event.date) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", render::date_label(event.date, today).bold());
            current_date = Some(event.date);
        }

        println!("{}", render::event_line(event));
    }

    Ok(())
}
