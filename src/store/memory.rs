//! In-memory reference implementation of the store seam.
//!
//! Backs the shim binary (optionally seeded from a JSON file) and the unit
//! tests. Ids are assigned sequentially the way the platform store hands
//! back row ids.

use super::{
    CalendarRow, CalendarStore, EventPatch, EventRow, NewCalendar, NewEvent, NewReminder,
    ReminderMethod,
};
use anyhow::Context;
use calbridge_core::{BridgeResult, PermissionScope, PermissionState};
use serde::Deserialize;
use std::path::Path;

/// A stored reminder row.
#[derive(Debug, Clone)]
pub struct ReminderRow {
    pub id: i64,
    pub event_id: i64,
    pub minutes: f64,
    pub method: ReminderMethod,
}

#[derive(Debug)]
pub struct MemoryStore {
    pub events: Vec<EventRow>,
    pub reminders: Vec<ReminderRow>,
    pub calendars: Vec<CalendarRow>,
    read_permission: PermissionState,
    write_permission: PermissionState,
    next_event_id: i64,
    next_calendar_id: i64,
    next_reminder_id: i64,
}

/// Shape of the `--seed` JSON file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Seed {
    calendars: Vec<CalendarRow>,
    events: Vec<EventRow>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        MemoryStore {
            events: Vec::new(),
            reminders: Vec::new(),
            calendars: Vec::new(),
            read_permission: PermissionState::Prompt,
            write_permission: PermissionState::Prompt,
            next_event_id: 1,
            next_calendar_id: 1,
            next_reminder_id: 1,
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load calendars and events from a JSON seed file.
    pub fn from_seed_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        let seed: Seed = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse seed file {}", path.display()))?;

        let mut store = MemoryStore::new();
        store.next_event_id = seed.events.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        store.next_calendar_id = seed.calendars.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        store.events = seed.events;
        store.calendars = seed.calendars;
        Ok(store)
    }

    fn scope_state(&self, scope: PermissionScope) -> PermissionState {
        match scope {
            PermissionScope::ReadCalendar => self.read_permission,
            PermissionScope::WriteCalendar => self.write_permission,
            // The composite alias is granted only when both sides are
            PermissionScope::ReadWriteCalendar => {
                match (self.read_permission, self.write_permission) {
                    (PermissionState::Granted, PermissionState::Granted) => {
                        PermissionState::Granted
                    }
                    (PermissionState::Denied, _) | (_, PermissionState::Denied) => {
                        PermissionState::Denied
                    }
                    _ => PermissionState::Prompt,
                }
            }
        }
    }
}

impl CalendarStore for MemoryStore {
    fn event_ids(&self) -> BridgeResult<Vec<i64>> {
        Ok(self.events.iter().map(|e| e.id).collect())
    }

    fn events_in_window(
        &self,
        starts_at_or_after: i64,
        ends_at_or_before: i64,
    ) -> BridgeResult<Vec<EventRow>> {
        Ok(self
            .events
            .iter()
            .filter(|e| e.start >= starts_at_or_after && e.end <= ends_at_or_before)
            .cloned()
            .collect())
    }

    fn insert_event(&mut self, event: NewEvent) -> BridgeResult<i64> {
        let id = self.next_event_id;
        self.next_event_id += 1;

        self.events.push(EventRow {
            id,
            calendar_id: event.calendar_id,
            title: event.title,
            location: event.location.unwrap_or_default(),
            color: 0,
            organizer: String::new(),
            description: event.description,
            start: event.start,
            end: event.end,
            timezone: event.timezone,
            end_timezone: String::new(),
            duration: String::new(),
            all_day: event.all_day.unwrap_or(false),
            rrule: event.rrule.unwrap_or_default(),
        });
        Ok(id)
    }

    fn update_event(&mut self, id: i64, patch: EventPatch) -> BridgeResult<usize> {
        let Some(row) = self.events.iter_mut().find(|e| e.id == id) else {
            return Ok(0);
        };

        if let Some(title) = patch.title {
            row.title = title;
        }
        if let Some(calendar_id) = patch.calendar_id {
            row.calendar_id = calendar_id;
        }
        if let Some(location) = patch.location {
            row.location = location;
        }
        if let Some(start) = patch.start {
            row.start = start;
        }
        if let Some(end) = patch.end {
            row.end = end;
        }
        if let Some(all_day) = patch.all_day {
            row.all_day = all_day;
        }
        if let Some(description) = patch.description {
            row.description = description;
        }
        Ok(1)
    }

    fn delete_event(&mut self, id: i64) -> BridgeResult<usize> {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        self.reminders.retain(|r| r.event_id != id);
        Ok(before - self.events.len())
    }

    fn insert_reminder(&mut self, reminder: NewReminder) -> BridgeResult<i64> {
        let id = self.next_reminder_id;
        self.next_reminder_id += 1;

        self.reminders.push(ReminderRow {
            id,
            event_id: reminder.event_id,
            minutes: reminder.minutes,
            method: reminder.method,
        });
        Ok(id)
    }

    fn calendars(&self) -> BridgeResult<Vec<CalendarRow>> {
        Ok(self.calendars.clone())
    }

    fn primary_calendars(&self) -> BridgeResult<Vec<CalendarRow>> {
        Ok(self
            .calendars
            .iter()
            .filter(|c| c.primary)
            .cloned()
            .collect())
    }

    fn insert_calendar(&mut self, calendar: NewCalendar) -> BridgeResult<i64> {
        let id = self.next_calendar_id;
        self.next_calendar_id += 1;

        self.calendars.push(CalendarRow {
            id,
            account: calendar.name.clone(),
            name: calendar.name,
            color: calendar.color.unwrap_or(0),
            primary: false,
            visible: true,
        });
        Ok(id)
    }

    fn delete_calendar(&mut self, id: i64) -> BridgeResult<usize> {
        let before = self.calendars.len();
        self.calendars.retain(|c| c.id != id);
        Ok(before - self.calendars.len())
    }

    fn permission_state(&self, scope: PermissionScope) -> PermissionState {
        self.scope_state(scope)
    }

    fn request_permission(&mut self, scope: PermissionScope) -> PermissionState {
        match scope {
            PermissionScope::ReadCalendar => self.read_permission = PermissionState::Granted,
            PermissionScope::WriteCalendar => self.write_permission = PermissionState::Granted,
            PermissionScope::ReadWriteCalendar => {
                self.read_permission = PermissionState::Granted;
                self.write_permission = PermissionState::Granted;
            }
        }
        self.scope_state(scope)
    }
}
