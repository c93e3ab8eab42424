//! Snapshot/diff support for create flows delegated to an external UI.
//!
//! The host snapshots the existing event ids before launching the system's
//! create prompt, then diffs afterwards to learn which ids the prompt
//! created. The snapshot is an explicit value held by the caller, never
//! ambient shim state, so concurrent calls cannot contaminate each other.
//!
//! The diff is best-effort: ids created or removed by anything else between
//! the two calls are attributed to the prompt.

use crate::store::CalendarStore;
use calbridge_core::protocol::DiffEventIdsParams;
use calbridge_core::BridgeResult;
use std::collections::HashSet;

/// All event ids currently in the store, as strings.
pub fn snapshot(store: &dyn CalendarStore) -> BridgeResult<Vec<String>> {
    Ok(store
        .event_ids()?
        .into_iter()
        .map(|id| id.to_string())
        .collect())
}

/// Ids present now but not in the caller's snapshot.
pub fn diff(store: &dyn CalendarStore, params: DiffEventIdsParams) -> BridgeResult<Vec<String>> {
    let snapshot: HashSet<&str> = params.snapshot.iter().map(String::as_str).collect();

    Ok(store
        .event_ids()?
        .into_iter()
        .map(|id| id.to_string())
        .filter(|id| !snapshot.contains(id.as_str()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use crate::store::NewEvent;

    #[test]
    fn test_diff_reports_only_ids_created_after_the_snapshot() {
        let mut store = MemoryStore::new();
        store.insert_event(NewEvent::default()).unwrap();
        store.insert_event(NewEvent::default()).unwrap();

        let snapshot = snapshot(&store).unwrap();
        assert_eq!(snapshot, ["1", "2"]);

        store.insert_event(NewEvent::default()).unwrap();
        store.insert_event(NewEvent::default()).unwrap();

        let new_ids = diff(&store, DiffEventIdsParams { snapshot }).unwrap();
        assert_eq!(new_ids, ["3", "4"]);
    }

    #[test]
    fn test_diff_with_no_changes_is_empty() {
        let mut store = MemoryStore::new();
        store.insert_event(NewEvent::default()).unwrap();

        let snapshot = snapshot(&store).unwrap();
        let new_ids = diff(&store, DiffEventIdsParams { snapshot }).unwrap();
        assert!(new_ids.is_empty());
    }

    #[test]
    fn test_ids_deleted_since_the_snapshot_are_ignored() {
        let mut store = MemoryStore::new();
        store.insert_event(NewEvent::default()).unwrap();
        let snapshot = snapshot(&store).unwrap();

        store.delete_event(1).unwrap();
        store.insert_event(NewEvent::default()).unwrap();

        let new_ids = diff(&store, DiffEventIdsParams { snapshot }).unwrap();
        assert_eq!(new_ids, ["2"]);
    }
}
