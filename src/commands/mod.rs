//! One module per bridge operation.

pub mod create_calendar;
pub mod create_event;
pub mod default_calendar;
pub mod delete_calendar;
pub mod delete_events;
pub mod event_ids;
pub mod list_calendars;
pub mod list_events;
pub mod modify_event;
pub mod open_calendar;
pub mod permissions;
