//! Normalized calendar records and color handling.

use crate::error::{BridgeError, BridgeResult};
use serde::{Deserialize, Serialize};

/// A calendar as surfaced over the bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
    /// Platform-assigned identifier, surfaced as a string.
    pub id: String,
    pub title: String,
    /// Accent color, `#RRGGBB`. Absent where the operation does not report
    /// colors (default-calendar lookup).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Normalize a stored numeric color to `#RRGGBB` uppercase hex, dropping
/// the alpha byte.
pub fn rgb_hex(color: i64) -> String {
    format!("#{:06X}", color & 0xFF_FFFF)
}

/// Parse a `#RRGGBB` string into the store's numeric color representation.
pub fn parse_rgb_hex(color: &str) -> BridgeResult<i64> {
    let invalid = || BridgeError::InvalidColor(color.to_string());

    let hex = color.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 {
        return Err(invalid());
    }
    i64::from_str_radix(hex, 16).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex_is_uppercase_and_padded() {
        assert_eq!(rgb_hex(0x00ABCDEF), "#ABCDEF");
        assert_eq!(rgb_hex(0x000000FF), "#0000FF");
        assert_eq!(rgb_hex(0), "#000000");
    }

    #[test]
    fn test_rgb_hex_strips_alpha() {
        assert_eq!(rgb_hex(0xFF123456u32 as i64), "#123456");
    }

    #[test]
    fn test_parse_rgb_hex() {
        assert_eq!(parse_rgb_hex("#112233").unwrap(), 0x112233);
        assert_eq!(parse_rgb_hex("#ABCDEF").unwrap(), 0xABCDEF);

        for bad in ["112233", "#12345", "#1234567", "#GGGGGG", ""] {
            assert!(
                matches!(parse_rgb_hex(bad), Err(BridgeError::InvalidColor(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_color_absent_in_default_calendar_shape() {
        let calendar = Calendar {
            id: "3".to_string(),
            title: "Personal".to_string(),
            color: None,
        };
        let json = serde_json::to_string(&calendar).unwrap();
        assert_eq!(json, r#"{"id":"3","title":"Personal"}"#);
    }
}
