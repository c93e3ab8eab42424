//! Bridge call protocol types.
//!
//! Defines the JSON protocol spoken between the host shell and the shim:
//! one `Request` per call, answered by a tagged `Response`. Parameter
//! objects use camelCase keys since the ultimate callers are JavaScript.

use crate::permission::PermissionScope;
use crate::recurrence::RecurrenceRule;
use serde::{Deserialize, Serialize};

/// Operations the shim implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    CheckPermissions,
    RequestPermissions,
    ListCalendars,
    GetDefaultCalendar,
    CreateCalendar,
    DeleteCalendar,
    CreateEvent,
    ModifyEvent,
    ListEventsInRange,
    DeleteEventsById,
    SnapshotEventIds,
    DiffEventIds,
    OpenCalendar,
}

/// Request sent from the host shell to the shim.
#[derive(Debug, Serialize, Deserialize)]
pub struct Request {
    pub command: Command,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Response sent from the shim to the host shell.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response<T> {
    Success { data: T },
    Error { error: String },
}

impl<T: Serialize> Response<T> {
    pub fn success(data: T) -> String {
        serde_json::to_string(&Response::Success { data }).unwrap()
    }
}

impl Response<()> {
    pub fn error(msg: &str) -> String {
        serde_json::to_string(&Response::<()>::Error {
            error: msg.to_string(),
        })
        .unwrap()
    }
}

/// Parameters for `create_event`. Only the title is required; everything
/// else falls back per the field-mapping rules.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventParams {
    pub title: String,
    #[serde(default)]
    pub calendar_id: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Epoch milliseconds; defaults to now.
    #[serde(default)]
    pub start_date: Option<i64>,
    /// Epoch milliseconds; defaults to start + 1 hour.
    #[serde(default)]
    pub end_date: Option<i64>,
    /// Tri-state: only written to the store when explicitly provided.
    #[serde(default)]
    pub is_all_day: Option<bool>,
    #[serde(default)]
    pub alert_offset_in_minutes: Option<AlertOffsets>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub recurrence: Option<RecurrenceRule>,
}

/// Alert offsets, minutes before the event start.
///
/// The key accepts a single number or a collection; the single form takes
/// precedence when both could apply.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AlertOffsets {
    Single(f64),
    Multiple(Vec<serde_json::Value>),
}

/// Parameters for `modify_event`: an id plus a sparse update. Keys absent
/// from the update leave the stored columns untouched.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyEventParams {
    pub id: String,
    pub update: EventUpdate,
}

/// The sparse update payload for `modify_event`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub calendar_id: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_date: Option<i64>,
    #[serde(default)]
    pub end_date: Option<i64>,
    #[serde(default)]
    pub is_all_day: Option<bool>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Parameters for `list_events_in_range`. Both bounds are required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsParams {
    pub start_date: i64,
    pub end_date: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteEventsParams {
    pub ids: Vec<String>,
}

/// Per-id partition reported by `delete_events_by_id`. The batch never
/// aborts early; every input id lands in exactly one of the two sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteEventsResult {
    pub deleted: Vec<String>,
    pub failed: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCalendarParams {
    pub title: String,
    /// `#RRGGBB`.
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCalendarParams {
    pub id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenCalendarParams {
    /// Epoch milliseconds to open the calendar app at; defaults to now.
    #[serde(default)]
    pub date: Option<i64>,
}

/// Parameters for `diff_event_ids`: the snapshot previously returned by
/// `snapshot_event_ids`, held by the caller across its external-UI flow.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffEventIdsParams {
    pub snapshot: Vec<String>,
}

/// Parameters for the permission query/request commands. Without a scope
/// the command covers every alias.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionParams {
    #[serde(default)]
    pub scope: Option<PermissionScope>,
}
