//! Field-mapping helpers shared by the command modules.

use calbridge_core::{BridgeError, BridgeResult};

/// Compose the stored description from free-text notes and an optional URL.
///
/// Present parts are newline-joined, the URL on its own `URL: <url>` line.
/// When both are absent the stored description is the empty string, not an
/// omitted column.
pub fn compose_description(notes: Option<&str>, url: Option<&str>) -> String {
    let mut parts = Vec::new();
    if let Some(notes) = notes {
        parts.push(notes.to_string());
    }
    if let Some(url) = url {
        parts.push(format!("URL: {url}"));
    }
    parts.join("\n")
}

/// Parse a caller-supplied event id into the store's numeric form.
pub fn parse_event_id(id: &str) -> BridgeResult<i64> {
    id.parse()
        .map_err(|_| BridgeError::InvalidEventId(id.to_string()))
}

/// Parse a caller-supplied calendar id into the store's numeric form.
pub fn parse_calendar_id(id: &str) -> BridgeResult<i64> {
    id.parse()
        .map_err(|_| BridgeError::InvalidCalendarId(id.to_string()))
}
