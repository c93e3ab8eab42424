//! Error types for the calbridge ecosystem.

use thiserror::Error;

/// Errors that can occur in bridge operations.
///
/// Not-found and validation failures are raised before any store mutation;
/// per-item failures inside partial batches are reported in the batch
/// result instead of through this type.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Recurrence interval must be greater than zero, got {0}")]
    InvalidRecurrenceInterval(i64),

    #[error("Recurrence end {0} is not a representable instant")]
    InvalidRecurrenceEnd(i64),

    #[error("No primary calendar found")]
    NoDefaultCalendar,

    #[error("Invalid event id: {0}")]
    InvalidEventId(String),

    #[error("Invalid calendar id: {0}")]
    InvalidCalendarId(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Event was not updated")]
    EventNotUpdated,

    #[error("Calendar was not deleted")]
    CalendarNotDeleted,

    #[error("Store error: {0}")]
    Store(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;
