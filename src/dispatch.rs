//! Translate protocol requests into command invocations.
//!
//! Each handler deserializes its params (rejecting the call before any
//! store mutation when a required field is missing), runs the command, and
//! encodes the outcome as a protocol `Response` line.

use crate::commands;
use crate::store::CalendarStore;
use calbridge_core::protocol::{
    Command, CreateCalendarParams, CreateEventParams, DeleteCalendarParams, DeleteEventsParams,
    DiffEventIdsParams, ListEventsParams, ModifyEventParams, OpenCalendarParams, PermissionParams,
    Request, Response,
};
use calbridge_core::BridgeResult;
use chrono_tz::Tz;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub fn handle_request(store: &mut dyn CalendarStore, local_tz: Tz, request: Request) -> String {
    let params = request.params;
    match request.command {
        Command::CheckPermissions => with_params(params, |p: PermissionParams| match p.scope {
            Some(scope) => Response::success(commands::permissions::check(store, scope)),
            None => Response::success(commands::permissions::check_all(store)),
        }),
        Command::RequestPermissions => with_params(params, |p: PermissionParams| match p.scope {
            Some(scope) => Response::success(commands::permissions::request(store, scope)),
            None => Response::success(commands::permissions::request_all(store)),
        }),
        Command::ListCalendars => respond(commands::list_calendars::handle(store)),
        Command::GetDefaultCalendar => respond(commands::default_calendar::handle(store)),
        Command::CreateCalendar => with_params(params, |p: CreateCalendarParams| {
            respond(commands::create_calendar::handle(store, p))
        }),
        Command::DeleteCalendar => with_params(params, |p: DeleteCalendarParams| {
            respond(commands::delete_calendar::handle(store, p))
        }),
        Command::CreateEvent => with_params(params, |p: CreateEventParams| {
            respond(commands::create_event::handle(store, p, local_tz))
        }),
        Command::ModifyEvent => with_params(params, |p: ModifyEventParams| {
            respond(commands::modify_event::handle(store, p))
        }),
        Command::ListEventsInRange => with_params(params, |p: ListEventsParams| {
            respond(commands::list_events::handle(store, p))
        }),
        Command::DeleteEventsById => with_params(params, |p: DeleteEventsParams| {
            respond(commands::delete_events::handle(store, p))
        }),
        Command::SnapshotEventIds => respond(commands::event_ids::snapshot(store)),
        Command::DiffEventIds => with_params(params, |p: DiffEventIdsParams| {
            respond(commands::event_ids::diff(store, p))
        }),
        Command::OpenCalendar => with_params(params, |p: OpenCalendarParams| {
            Response::success(commands::open_calendar::handle(p))
        }),
    }
}

fn with_params<P, F>(params: serde_json::Value, run: F) -> String
where
    P: DeserializeOwned,
    F: FnOnce(P) -> String,
{
    match serde_json::from_value(params) {
        Ok(params) => run(params),
        Err(e) => Response::error(&format!("Invalid params: {e}")),
    }
}

fn respond<T: Serialize>(result: BridgeResult<T>) -> String {
    match result {
        Ok(data) => Response::success(data),
        Err(e) => Response::error(&e.to_string()),
    }
}
