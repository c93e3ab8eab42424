//! Recurrence rules and their RFC 5545 serialization.

use crate::error::{BridgeError, BridgeResult};
use chrono::DateTime;
use serde::Deserialize;
use std::fmt;

/// How often a recurring event repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceFrequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl fmt::Display for RecurrenceFrequency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let token = match self {
            RecurrenceFrequency::Daily => "DAILY",
            RecurrenceFrequency::Weekly => "WEEKLY",
            RecurrenceFrequency::Monthly => "MONTHLY",
            RecurrenceFrequency::Yearly => "YEARLY",
        };
        write!(f, "{token}")
    }
}

/// A recurrence rule attached to an event.
///
/// Has no identity of its own; it is always stored as the serialized rule
/// text on the event row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawRecurrenceRule")]
pub struct RecurrenceRule {
    frequency: RecurrenceFrequency,
    interval: i64,
    /// Last occurrence, as epoch milliseconds.
    end: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecurrenceRule {
    frequency: RecurrenceFrequency,
    interval: i64,
    #[serde(default)]
    end: Option<i64>,
}

impl TryFrom<RawRecurrenceRule> for RecurrenceRule {
    type Error = BridgeError;

    fn try_from(raw: RawRecurrenceRule) -> BridgeResult<Self> {
        RecurrenceRule::new(raw.frequency, raw.interval, raw.end)
    }
}

impl RecurrenceRule {
    /// Build a rule, rejecting non-positive intervals and end instants that
    /// cannot be represented as a UTC date-time.
    pub fn new(
        frequency: RecurrenceFrequency,
        interval: i64,
        end: Option<i64>,
    ) -> BridgeResult<Self> {
        if interval <= 0 {
            return Err(BridgeError::InvalidRecurrenceInterval(interval));
        }
        if let Some(end) = end {
            if DateTime::from_timestamp_millis(end).is_none() {
                return Err(BridgeError::InvalidRecurrenceEnd(end));
            }
        }

        Ok(RecurrenceRule {
            frequency,
            interval,
            end,
        })
    }

    /// The RFC 5545 rule text: `FREQ=<F>;INTERVAL=<n>` plus, when an end is
    /// set, `;UNTIL=<yyyyMMdd'T'HHmmss'Z'>`. UNTIL is always emitted in UTC
    /// date-time form and there is no trailing separator.
    pub fn rule_text(&self) -> String {
        let mut rule = format!("FREQ={};INTERVAL={}", self.frequency, self.interval);

        if let Some(end) = self.end {
            // Range-checked in new()
            if let Some(until) = DateTime::from_timestamp_millis(end) {
                rule.push_str(&format!(";UNTIL={}", until.format("%Y%m%dT%H%M%SZ")));
            }
        }

        rule
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.rule_text())
    }
}
