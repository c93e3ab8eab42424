//! List events fully contained in a time window.

use crate::store::{CalendarStore, EventRow};
use crate::tz::expand_timezone;
use calbridge_core::calendar::rgb_hex;
use calbridge_core::protocol::ListEventsParams;
use calbridge_core::{BridgeResult, Event};

/// Query the window and normalize each row.
///
/// The window is a containment test: events must start at or after the
/// window start and end at or before the window end. Events partially
/// overlapping a boundary are excluded by design.
pub fn handle(store: &dyn CalendarStore, params: ListEventsParams) -> BridgeResult<Vec<Event>> {
    let rows = store.events_in_window(params.start_date, params.end_date)?;
    Ok(rows.into_iter().map(event_from_row).collect())
}

/// Normalize a row, suppressing the store's unset sentinels: empty strings
/// and zero values become absent fields, never empty/zero output.
fn event_from_row(row: EventRow) -> Event {
    Event {
        id: row.id.to_string(),
        title: non_empty(row.title),
        location: non_empty(row.location),
        event_color: non_zero(row.color).map(rgb_hex),
        organizer: non_empty(row.organizer),
        description: non_empty(row.description),
        start_date: non_zero(row.start),
        end_date: non_zero(row.end),
        event_timezone: non_empty(row.timezone).map(expand_timezone),
        event_end_timezone: non_empty(row.end_timezone).map(expand_timezone),
        duration: non_empty(row.duration),
        is_all_day: row.all_day,
        calendar_id: non_zero(row.calendar_id).map(|id| id.to_string()),
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

fn non_zero(value: i64) -> Option<i64> {
    (value != 0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    fn event_in(start: i64, end: i64) -> EventRow {
        EventRow {
            start,
            end,
            ..Default::default()
        }
    }

    fn list(store: &MemoryStore, from: i64, to: i64) -> Vec<Event> {
        handle(
            store,
            ListEventsParams {
                start_date: from,
                end_date: to,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_window_is_containment_not_overlap() {
        let mut store = MemoryStore::new();
        let (t0, t1) = (1_000, 2_000);
        store.events = vec![
            EventRow {
                id: 1,
                ..event_in(t0 - 1, t1)
            },
            EventRow {
                id: 2,
                ..event_in(t0, t1)
            },
            EventRow {
                id: 3,
                ..event_in(t0, t1 + 1)
            },
        ];

        let events = list(&store, t0, t1);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "2");
    }

    #[test]
    fn test_sentinels_are_suppressed() {
        let row = EventRow {
            id: 9,
            start: 1_000,
            end: 2_000,
            ..Default::default()
        };
        let event = event_from_row(row);

        assert_eq!(event.id, "9");
        assert!(event.title.is_none());
        assert!(event.location.is_none());
        assert!(event.event_color.is_none());
        assert!(event.organizer.is_none());
        assert!(event.description.is_none());
        assert!(event.event_timezone.is_none());
        assert!(event.event_end_timezone.is_none());
        assert!(event.duration.is_none());
        assert!(event.calendar_id.is_none());
        assert!(!event.is_all_day);
    }

    #[test]
    fn test_zero_timestamps_are_suppressed() {
        let event = event_from_row(EventRow {
            id: 1,
            ..Default::default()
        });
        assert!(event.start_date.is_none());
        assert!(event.end_date.is_none());
    }

    #[test]
    fn test_populated_row_is_fully_normalized() {
        let event = event_from_row(EventRow {
            id: 4,
            calendar_id: 7,
            title: "Review".to_string(),
            location: "Room 2".to_string(),
            color: 0xFF00CCAAu32 as i64,
            organizer: "ada@example.com".to_string(),
            description: "Agenda".to_string(),
            start: 1_000,
            end: 2_000,
            timezone: "Europe/Stockholm".to_string(),
            end_timezone: String::new(),
            duration: "P3600S".to_string(),
            all_day: true,
            rrule: String::new(),
        });

        assert_eq!(event.event_color.as_deref(), Some("#00CCAA"));
        assert_eq!(event.calendar_id.as_deref(), Some("7"));
        assert_eq!((event.start_date, event.end_date), (Some(1_000), Some(2_000)));
        assert!(event.is_all_day);

        let tz = event.event_timezone.unwrap();
        assert_eq!(tz.region, "Europe/Stockholm");
        assert!(!tz.abbreviation.is_empty());
        assert!(event.event_end_timezone.is_none());
        assert_eq!(event.duration.as_deref(), Some("P3600S"));
    }
}
