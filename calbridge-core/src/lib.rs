//! Core types for the calbridge ecosystem.
//!
//! This crate provides the types shared between the bridge shim and any
//! calendar store backend:
//! - `Event` and `Calendar` for the normalized records returned to callers
//! - `RecurrenceRule` and its RFC 5545 serializer
//! - `protocol` module for the shim's JSON call protocol
//! - `BridgeError` for the failure taxonomy

pub mod calendar;
pub mod error;
pub mod event;
pub mod permission;
pub mod protocol;
pub mod recurrence;

// Re-export the commonly used types at crate root for convenience
pub use calendar::Calendar;
pub use error::{BridgeError, BridgeResult};
pub use event::{Event, EventTimezone};
pub use permission::{PermissionScope, PermissionState, PermissionStatus};
pub use recurrence::{RecurrenceFrequency, RecurrenceRule};
