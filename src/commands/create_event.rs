//! Create an event in the platform store.

use super::default_calendar;
use crate::fields::{compose_description, parse_calendar_id};
use crate::store::{CalendarStore, NewEvent, NewReminder, ReminderMethod};
use calbridge_core::protocol::{AlertOffsets, CreateEventParams};
use calbridge_core::BridgeResult;
use chrono::Utc;
use chrono_tz::Tz;

const ONE_HOUR_MS: i64 = 3_600_000;

/// Insert the event and its reminder rows, returning the new event id.
///
/// Defaults: start falls back to now, end to start + 1 hour, and the owning
/// calendar to the platform's primary calendar. A missing primary calendar
/// is an explicit failure rather than a silent default.
pub fn handle(
    store: &mut dyn CalendarStore,
    params: CreateEventParams,
    local_tz: Tz,
) -> BridgeResult<String> {
    let calendar_id = match &params.calendar_id {
        Some(id) => parse_calendar_id(id)?,
        None => default_calendar::resolve(store)?.id,
    };

    let start = params
        .start_date
        .unwrap_or_else(|| Utc::now().timestamp_millis());
    let end = params.end_date.unwrap_or(start + ONE_HOUR_MS);

    let event_id = store.insert_event(NewEvent {
        title: params.title,
        calendar_id,
        location: params.location,
        start,
        end,
        all_day: params.is_all_day,
        description: compose_description(params.notes.as_deref(), params.url.as_deref()),
        timezone: local_tz.name().to_string(),
        rrule: params.recurrence.as_ref().map(|r| r.rule_text()),
    })?;

    for minutes in alert_offsets(params.alert_offset_in_minutes.as_ref()) {
        store.insert_reminder(NewReminder {
            event_id,
            minutes,
            method: ReminderMethod::Alert,
        })?;
    }

    Ok(event_id.to_string())
}

/// Offsets of -1 or lower are the "no alarm" sentinel and are skipped. In
/// the collection form, entries that cannot be read as a number are logged
/// and skipped without aborting the create.
fn alert_offsets(offsets: Option<&AlertOffsets>) -> Vec<f64> {
    match offsets {
        None => Vec::new(),
        Some(AlertOffsets::Single(minutes)) => {
            if *minutes > -1.0 {
                vec![*minutes]
            } else {
                Vec::new()
            }
        }
        Some(AlertOffsets::Multiple(values)) => values
            .iter()
            .filter_map(|value| match coerce_minutes(value) {
                Some(minutes) if minutes > -1.0 => Some(minutes),
                Some(_) => None,
                None => {
                    tracing::error!(value = %value, "Failed to read alert offset as a number");
                    None
                }
            })
            .collect(),
    }
}

fn coerce_minutes(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use crate::store::CalendarRow;
    use calbridge_core::{BridgeError, RecurrenceFrequency, RecurrenceRule};
    use serde_json::json;

    fn store_with_primary() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.calendars = vec![CalendarRow {
            id: 5,
            name: "Personal".to_string(),
            primary: true,
            ..Default::default()
        }];
        store
    }

    fn params(json: serde_json::Value) -> CreateEventParams {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_defaults_start_to_now_and_end_to_one_hour_later() {
        let mut store = store_with_primary();
        let before = Utc::now().timestamp_millis();

        handle(&mut store, params(json!({"title": "Lunch"})), Tz::UTC).unwrap();

        let row = &store.events[0];
        assert!(row.start >= before);
        assert_eq!(row.end, row.start + ONE_HOUR_MS);
    }

    #[test]
    fn test_falls_back_to_primary_calendar() {
        let mut store = store_with_primary();
        let id = handle(&mut store, params(json!({"title": "Lunch"})), Tz::UTC).unwrap();

        assert_eq!(id, "1");
        assert_eq!(store.events[0].calendar_id, 5);
    }

    #[test]
    fn test_missing_primary_calendar_fails_before_insert() {
        let mut store = MemoryStore::new();
        let result = handle(&mut store, params(json!({"title": "Lunch"})), Tz::UTC);

        assert!(matches!(result, Err(BridgeError::NoDefaultCalendar)));
        assert!(store.events.is_empty());
    }

    #[test]
    fn test_description_joins_notes_and_url() {
        let mut store = store_with_primary();
        handle(
            &mut store,
            params(json!({"title": "T", "notes": "A", "url": "http://x"})),
            Tz::UTC,
        )
        .unwrap();

        assert_eq!(store.events[0].description, "A\nURL: http://x");
    }

    #[test]
    fn test_description_is_empty_string_when_notes_and_url_absent() {
        let mut store = store_with_primary();
        handle(&mut store, params(json!({"title": "T"})), Tz::UTC).unwrap();
        assert_eq!(store.events[0].description, "");
    }

    #[test]
    fn test_all_day_written_only_when_provided() {
        let mut store = store_with_primary();
        handle(&mut store, params(json!({"title": "T"})), Tz::UTC).unwrap();
        handle(
            &mut store,
            params(json!({"title": "T", "isAllDay": true})),
            Tz::UTC,
        )
        .unwrap();

        assert!(!store.events[0].all_day);
        assert!(store.events[1].all_day);
    }

    #[test]
    fn test_sentinel_offsets_are_skipped() {
        let mut store = store_with_primary();
        handle(
            &mut store,
            params(json!({"title": "T", "alertOffsetInMinutes": [-1, 0, 1440]})),
            Tz::UTC,
        )
        .unwrap();

        let minutes: Vec<f64> = store.reminders.iter().map(|r| r.minutes).collect();
        assert_eq!(minutes, [0.0, 1440.0]);
    }

    #[test]
    fn test_malformed_collection_entries_are_skipped_not_fatal() {
        let mut store = store_with_primary();
        handle(
            &mut store,
            params(json!({"title": "T", "alertOffsetInMinutes": [10, "oops", "30", null]})),
            Tz::UTC,
        )
        .unwrap();

        // Numeric strings coerce; everything else is dropped
        let minutes: Vec<f64> = store.reminders.iter().map(|r| r.minutes).collect();
        assert_eq!(minutes, [10.0, 30.0]);
    }

    #[test]
    fn test_single_offset_inserts_one_reminder() {
        let mut store = store_with_primary();
        handle(
            &mut store,
            params(json!({"title": "T", "alertOffsetInMinutes": 15})),
            Tz::UTC,
        )
        .unwrap();

        assert_eq!(store.reminders.len(), 1);
        assert_eq!(store.reminders[0].minutes, 15.0);
        assert_eq!(store.reminders[0].method, ReminderMethod::Alert);
    }

    #[test]
    fn test_recurrence_rule_is_serialized_onto_the_row() {
        let mut store = store_with_primary();
        let mut p = params(json!({"title": "T"}));
        p.recurrence = Some(RecurrenceRule::new(RecurrenceFrequency::Weekly, 1, None).unwrap());

        handle(&mut store, p, Tz::UTC).unwrap();
        assert_eq!(store.events[0].rrule, "FREQ=WEEKLY;INTERVAL=1");
    }

    #[test]
    fn test_device_timezone_is_written() {
        let mut store = store_with_primary();
        handle(
            &mut store,
            params(json!({"title": "T"})),
            chrono_tz::Europe::Stockholm,
        )
        .unwrap();

        assert_eq!(store.events[0].timezone, "Europe/Stockholm");
    }
}
