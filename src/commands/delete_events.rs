//! Batch delete of events by id.

use crate::fields::parse_event_id;
use crate::store::CalendarStore;
use calbridge_core::protocol::{DeleteEventsParams, DeleteEventsResult};
use calbridge_core::BridgeResult;

/// Delete each id independently, partitioning the input into deleted and
/// failed sets. Per-id failures (malformed ids, store errors, zero rows)
/// are recorded and never abort the rest of the batch.
pub fn handle(
    store: &mut dyn CalendarStore,
    params: DeleteEventsParams,
) -> BridgeResult<DeleteEventsResult> {
    let mut deleted = Vec::new();
    let mut failed = Vec::new();

    for id in params.ids {
        match try_delete(store, &id) {
            Ok(true) => deleted.push(id),
            Ok(false) => failed.push(id),
            Err(err) => {
                tracing::warn!(id = %id, error = %err, "Failed to delete event");
                failed.push(id);
            }
        }
    }

    Ok(DeleteEventsResult { deleted, failed })
}

fn try_delete(store: &mut dyn CalendarStore, id: &str) -> BridgeResult<bool> {
    let id = parse_event_id(id)?;
    Ok(store.delete_event(id)? > 0)
}
