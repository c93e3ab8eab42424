//! Deep link for opening the system calendar app at a timestamp.

use calbridge_core::protocol::OpenCalendarParams;
use chrono::Utc;

const CALENDAR_TIME_URI: &str = "content://com.android.calendar/time";

/// Build the platform deep link; the host shell is responsible for
/// actually launching it.
pub fn handle(params: OpenCalendarParams) -> String {
    let timestamp = params
        .date
        .unwrap_or_else(|| Utc::now().timestamp_millis());
    format!("{CALENDAR_TIME_URI}/{timestamp}")
}
