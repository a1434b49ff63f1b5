//! Location commands
//!
//! The frontend owns the geolocation API; these commands hand it the fix
//! options and take the result (or the failure) back into the core.

use tauri::State;

use aegis_core::{Coordinate, EventSink, FixRequest, Notice};

use crate::commands::CommandResult;
use crate::state::AppState;

/// Options the frontend should request the single-shot fix with.
#[tauri::command]
pub fn geolocation_options() -> CommandResult<FixRequest> {
    CommandResult::ok(FixRequest::default())
}

/// Record a successful geolocation fix.
#[tauri::command]
pub fn report_location(state: State<AppState>, lat: f64, lng: f64) -> CommandResult<Coordinate> {
    state.companion().record_location(lat, lng);
    CommandResult::ok(state.companion().location().current())
}

/// Record a failed fix. The fallback coordinate takes over and the user
/// sees an error toast.
#[tauri::command]
pub fn location_unavailable(state: State<AppState>) -> CommandResult<Coordinate> {
    let fallback = state.companion().location_unavailable();
    state.sink().notify(Notice::error(
        "Location Error",
        "Unable to get your location",
    ));
    CommandResult::ok(fallback)
}
