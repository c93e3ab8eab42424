//! Normalized event records returned to bridge callers.
//!
//! The store keeps sentinel values (empty strings, zero timestamps) for
//! unset columns; the normalized record suppresses those entirely so that
//! callers can treat "field absent" as "unknown", never as "false"/zero.

use serde::{Deserialize, Serialize};

/// A calendar event as surfaced over the bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Platform-assigned identifier, surfaced as a string.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Calendar accent color of the owning calendar, `#RRGGBB`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Start instant, epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i64>,
    /// End instant, epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_timezone: Option<EventTimezone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_end_timezone: Option<EventTimezone>,
    /// Provider-native duration string, kept opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub is_all_day: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_id: Option<String>,
}

/// A timezone as a region name plus its short abbreviation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTimezone {
    /// IANA region name, e.g. `Europe/Stockholm`.
    pub region: String,
    /// Short name, e.g. `CET`. Daylight-saving status is evaluated at the
    /// moment the record is read, not at the event's start.
    pub abbreviation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_not_serialized() {
        let event = Event {
            id: "7".to_string(),
            title: Some("Standup".to_string()),
            location: None,
            event_color: None,
            organizer: None,
            description: None,
            start_date: Some(1_700_000_000_000),
            end_date: None,
            event_timezone: None,
            event_end_timezone: None,
            duration: None,
            is_all_day: false,
            calendar_id: None,
        };

        let json = serde_json::to_value(&event).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["id", "isAllDay", "startDate", "title"]);
    }

    #[test]
    fn test_timezone_pair_shape() {
        let tz = EventTimezone {
            region: "Europe/Stockholm".to_string(),
            abbreviation: "CET".to_string(),
        };
        let json = serde_json::to_string(&tz).unwrap();
        assert_eq!(
            json,
            r#"{"region":"Europe/Stockholm","abbreviation":"CET"}"#
        );
    }
}
