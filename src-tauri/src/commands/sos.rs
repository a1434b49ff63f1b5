//! SOS commands

use tauri::State;

use crate::commands::CommandResult;
use crate::state::AppState;

/// Start the cancellable SOS countdown.
#[tauri::command]
pub async fn trigger_sos(state: State<'_, AppState>) -> Result<CommandResult<u32>, ()> {
    Ok(
        match state.companion().sessions().trigger_sos() {
            Ok(remaining) => CommandResult::ok(remaining),
            Err(e) => CommandResult::err(e.to_string()),
        },
    )
}

/// Abort the countdown before the alert fires.
#[tauri::command]
pub fn cancel_sos(state: State<AppState>) -> CommandResult<()> {
    match state.companion().sessions().cancel_sos() {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
