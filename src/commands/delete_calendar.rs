//! Delete a calendar by id.

use crate::fields::parse_calendar_id;
use crate::store::CalendarStore;
use calbridge_core::protocol::DeleteCalendarParams;
use calbridge_core::{BridgeError, BridgeResult};

pub fn handle(store: &mut dyn CalendarStore, params: DeleteCalendarParams) -> BridgeResult<()> {
    let id = parse_calendar_id(&params.id)?;

    let rows = store.delete_calendar(id)?;
    if rows == 0 {
        return Err(BridgeError::CalendarNotDeleted);
    }
    Ok(())
}
