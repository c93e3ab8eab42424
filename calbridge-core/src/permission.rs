//! Calendar access permission model.
//!
//! The shim only queries and requests state; the actual permission dialog
//! UX belongs to the host shell.

use serde::{Deserialize, Serialize};

/// The permission aliases exposed to bridge callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PermissionScope {
    ReadCalendar,
    WriteCalendar,
    ReadWriteCalendar,
}

/// State of a single permission alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PermissionState {
    Granted,
    Denied,
    Prompt,
    PromptWithRationale,
}

/// State of every alias at once, for the check-all form of the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionStatus {
    pub read_calendar: PermissionState,
    pub write_calendar: PermissionState,
    pub read_write_calendar: PermissionState,
}
