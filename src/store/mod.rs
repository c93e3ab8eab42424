//! Seam to the platform-owned calendar store.
//!
//! The bridge never implements storage itself; it translates between the
//! caller's request objects and the row/column representation behind this
//! trait. Row structs mirror the store's column conventions: empty strings
//! and zero values mean "unset" and are suppressed on the way out.
//!
//! Each call is an independent, non-transactional operation; multi-row
//! work (batch delete, multi-reminder insert) reports per-item outcomes
//! and is never rolled back.

pub mod memory;

use calbridge_core::{BridgeResult, PermissionScope, PermissionState};
use serde::{Deserialize, Serialize};

/// A stored event row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRow {
    pub id: i64,
    pub calendar_id: i64,
    pub title: String,
    pub location: String,
    /// Accent color of the owning calendar, numeric ARGB. 0 = unset.
    pub color: i64,
    pub organizer: String,
    pub description: String,
    /// Start instant, epoch milliseconds. 0 = unset.
    pub start: i64,
    /// End instant, epoch milliseconds. 0 = unset.
    pub end: i64,
    /// IANA region name of the start timezone.
    pub timezone: String,
    /// IANA region name of the end timezone, where it differs.
    pub end_timezone: String,
    /// Provider-native duration string, opaque to the bridge.
    pub duration: String,
    pub all_day: bool,
    /// Serialized recurrence rule text.
    pub rrule: String,
}

/// Column values for an event insert.
#[derive(Debug, Clone, Default)]
pub struct NewEvent {
    pub title: String,
    pub calendar_id: i64,
    pub location: Option<String>,
    pub start: i64,
    pub end: i64,
    /// Only written when explicitly provided by the caller.
    pub all_day: Option<bool>,
    pub description: String,
    pub timezone: String,
    pub rrule: Option<String>,
}

/// Sparse column writes for an event update. `None` leaves the stored
/// column untouched.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub calendar_id: Option<i64>,
    pub location: Option<String>,
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub all_day: Option<bool>,
    pub description: Option<String>,
}

/// How a reminder fires. The bridge only writes alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderMethod {
    Alert,
}

/// Column values for a reminder insert, keyed by the owning event.
#[derive(Debug, Clone)]
pub struct NewReminder {
    pub event_id: i64,
    /// Minutes before the event start.
    pub minutes: f64,
    pub method: ReminderMethod,
}

/// A stored calendar row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarRow {
    pub id: i64,
    pub name: String,
    /// Numeric ARGB. 0 = unset.
    pub color: i64,
    /// Whether the platform flags this calendar as the primary one.
    pub primary: bool,
    pub account: String,
    pub visible: bool,
}

/// Column values for a calendar insert. The store is expected to attach a
/// synthetic local account named after the calendar.
#[derive(Debug, Clone, Default)]
pub struct NewCalendar {
    pub name: String,
    pub color: Option<i64>,
}

/// The platform calendar store.
///
/// Implementations delegate atomicity to the underlying store; the bridge
/// adds no locking, transactions, or retries on top.
pub trait CalendarStore {
    /// All event ids currently in the store.
    fn event_ids(&self) -> BridgeResult<Vec<i64>>;

    /// Events fully contained in the window: `start >= starts_at_or_after`
    /// and `end <= ends_at_or_before`. This is a containment filter, not an
    /// overlap filter; events straddling a boundary are excluded.
    fn events_in_window(
        &self,
        starts_at_or_after: i64,
        ends_at_or_before: i64,
    ) -> BridgeResult<Vec<EventRow>>;

    /// Insert an event, returning the new platform-assigned id.
    fn insert_event(&mut self, event: NewEvent) -> BridgeResult<i64>;

    /// Apply a sparse patch, returning the number of rows affected.
    fn update_event(&mut self, id: i64, patch: EventPatch) -> BridgeResult<usize>;

    /// Delete one event, returning the number of rows affected.
    fn delete_event(&mut self, id: i64) -> BridgeResult<usize>;

    /// Insert a reminder row, returning its id.
    fn insert_reminder(&mut self, reminder: NewReminder) -> BridgeResult<i64>;

    fn calendars(&self) -> BridgeResult<Vec<CalendarRow>>;

    /// Calendars the platform flags as primary, in store order.
    fn primary_calendars(&self) -> BridgeResult<Vec<CalendarRow>>;

    /// Insert a calendar under a synthetic local account, returning its id.
    fn insert_calendar(&mut self, calendar: NewCalendar) -> BridgeResult<i64>;

    /// Delete one calendar, returning the number of rows affected.
    fn delete_calendar(&mut self, id: i64) -> BridgeResult<usize>;

    fn permission_state(&self, scope: PermissionScope) -> PermissionState;

    /// Ask the host for the permission, returning the resulting state.
    fn request_permission(&mut self, scope: PermissionScope) -> PermissionState;
}
