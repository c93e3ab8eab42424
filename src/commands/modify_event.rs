//! Apply a sparse update to an existing event.

use crate::fields::{compose_description, parse_calendar_id, parse_event_id};
use crate::store::{CalendarStore, EventPatch};
use calbridge_core::protocol::ModifyEventParams;
use calbridge_core::{BridgeError, BridgeResult};

/// Translate the present keys of the update into column writes. Absent
/// keys leave the stored record untouched; zero affected rows is an
/// explicit failure.
pub fn handle(store: &mut dyn CalendarStore, params: ModifyEventParams) -> BridgeResult<()> {
    let id = parse_event_id(&params.id)?;
    let update = params.update;

    let calendar_id = update
        .calendar_id
        .as_deref()
        .map(parse_calendar_id)
        .transpose()?;

    // The description is only recomposed when notes are part of the update;
    // a URL-only update leaves the stored description untouched.
    let description = update
        .notes
        .as_deref()
        .map(|notes| compose_description(Some(notes), update.url.as_deref()));

    let rows = store.update_event(
        id,
        EventPatch {
            title: update.title,
            calendar_id,
            location: update.location,
            start: update.start_date,
            end: update.end_date,
            all_day: update.is_all_day,
            description,
        },
    )?;

    if rows == 0 {
        return Err(BridgeError::EventNotUpdated);
    }
    Ok(())
}
