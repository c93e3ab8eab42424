//! Create a calendar under a synthetic local account.

use crate::store::{CalendarStore, NewCalendar};
use calbridge_core::calendar::parse_rgb_hex;
use calbridge_core::protocol::CreateCalendarParams;
use calbridge_core::BridgeResult;

/// Insert the calendar, returning the new id. A malformed color string is
/// a validation failure raised before the insert.
pub fn handle(
    store: &mut dyn CalendarStore,
    params: CreateCalendarParams,
) -> BridgeResult<String> {
    let color = params.color.as_deref().map(parse_rgb_hex).transpose()?;

    let id = store.insert_calendar(NewCalendar {
        name: params.title,
        color,
    })?;

    Ok(id.to_string())
}
