//! Source reading and multi-source event aggregation.
//!
//! One bad line or one unreadable source degrades the result instead of
//! failing the query: every per-line and per-source failure is absorbed and
//! logged here.

use tracing::warn;

use crate::date_range::DateRange;
use crate::event::Event;
use crate::format::parse_line;
use crate::recurrence::expand_recurring;
use crate::store::{EventStore, Scope};

/// Read and parse every line of one source. Malformed lines are logged and
/// skipped; a read failure contributes zero records.
pub fn read_source_events(store: &dyn EventStore, source: &str) -> Vec<Event> {
    let content = match store.read_source(source) {
        Ok(content) => content,
        Err(e) => {
            warn!(source, error = %e, "could not read event source");
            return Vec::new();
        }
    };

    content
        .lines()
        .filter_map(|line| match parse_line(line, source) {
            Ok(event) => event,
            Err(e) => {
                warn!(source, line, error = %e, "skipping malformed event line");
                None
            }
        })
        .collect()
}

/// All occurrences inside `range`, aggregated across the global source set
/// and, when given, the principal's personal source set.
///
/// The principal's `schedule` source is created empty on first use. Results
/// are sorted by ascending date; the sort is stable, so same-day occurrences
/// keep source enumeration order and record order within a source.
pub fn get_events(
    store: &dyn EventStore,
    principal: Option<&str>,
    range: &DateRange,
) -> Vec<Event> {
    let mut records = Vec::new();

    collect_scope(store, &Scope::Global, &mut records);

    if let Some(name) = principal {
        let schedule = format!("{name}/schedule");
        if let Err(e) = store.ensure_source_exists(&schedule) {
            warn!(source = %schedule, error = %e, "could not create principal source");
        }
        collect_scope(store, &Scope::Principal(name.to_string()), &mut records);
    }

    let mut occurrences: Vec<Event> = records
        .iter()
        .flat_map(|record| expand_recurring(record, range))
        .collect();

    // A capped expansion can emit occurrences short of the window start.
    occurrences.retain(|event| range.contains(event.date));
    occurrences.sort_by_key(|event| event.date);
    occurrences
}

fn collect_scope(store: &dyn EventStore, scope: &Scope, records: &mut Vec<Event>) {
    match store.list_sources(scope) {
        Ok(sources) => {
            for source in sources {
                records.extend(read_source_events(store, &source));
            }
        }
        Err(e) => warn!(scope = scope.dir_name(), error = %e, "could not list event sources"),
    }
}
