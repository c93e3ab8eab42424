//! Permission-state query and request pass-throughs.
//!
//! The shim only relays state; the permission dialog itself belongs to the
//! host shell behind the store seam.

use crate::store::CalendarStore;
use calbridge_core::{PermissionScope, PermissionState, PermissionStatus};

pub fn check(store: &dyn CalendarStore, scope: PermissionScope) -> PermissionState {
    store.permission_state(scope)
}

pub fn check_all(store: &dyn CalendarStore) -> PermissionStatus {
    PermissionStatus {
        read_calendar: store.permission_state(PermissionScope::ReadCalendar),
        write_calendar: store.permission_state(PermissionScope::WriteCalendar),
        read_write_calendar: store.permission_state(PermissionScope::ReadWriteCalendar),
    }
}

pub fn request(store: &mut dyn CalendarStore, scope: PermissionScope) -> PermissionState {
    store.request_permission(scope)
}

pub fn request_all(store: &mut dyn CalendarStore) -> PermissionStatus {
    store.request_permission(PermissionScope::ReadWriteCalendar);
    check_all(store)
}
