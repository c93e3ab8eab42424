//! Timezone expansion for list output.

use calbridge_core::EventTimezone;
use chrono::{Offset, TimeZone, Utc};
use chrono_tz::{OffsetName, Tz};

/// Expand a stored region name into a `{region, abbreviation}` pair.
///
/// The abbreviation reflects daylight-saving status at the moment of the
/// call, not at the event's start. Unrecognized regions resolve to GMT,
/// matching the platform's timezone resolver.
pub fn expand_timezone(region: String) -> EventTimezone {
    let abbreviation = abbreviation_now(&region);
    EventTimezone {
        region,
        abbreviation,
    }
}

fn abbreviation_now(region: &str) -> String {
    let Ok(tz) = region.parse::<Tz>() else {
        return "GMT".to_string();
    };

    let offset = tz.offset_from_utc_datetime(&Utc::now().naive_utc());
    match offset.abbreviation() {
        Some(abbreviation) => abbreviation.to_string(),
        // Zones without a short name fall back to their UTC offset
        None => offset.fix().to_string(),
    }
}
