//! Default (primary) calendar resolution.

use crate::store::{CalendarRow, CalendarStore};
use calbridge_core::{BridgeError, BridgeResult, Calendar};

/// The first calendar the store flags as primary.
///
/// At most one is expected; zero matches is an explicit `NoDefaultCalendar`
/// failure, never a null result.
pub(crate) fn resolve(store: &dyn CalendarStore) -> BridgeResult<CalendarRow> {
    store
        .primary_calendars()?
        .into_iter()
        .next()
        .ok_or(BridgeError::NoDefaultCalendar)
}

pub fn handle(store: &dyn CalendarStore) -> BridgeResult<Calendar> {
    let row = resolve(store)?;
    Ok(Calendar {
        id: row.id.to_string(),
        title: row.name,
        color: None,
    })
}
