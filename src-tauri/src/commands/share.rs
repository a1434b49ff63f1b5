//! Location-share commands

use tauri::State;

use aegis_core::ShareSession;

use crate::commands::CommandResult;
use crate::state::AppState;

/// Pick the duration the next share session will run for.
#[tauri::command]
pub fn set_share_duration(state: State<AppState>, minutes: u32) -> CommandResult<u32> {
    match state.companion().sessions().set_share_duration(minutes) {
        Ok(()) => CommandResult::ok(minutes),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Begin broadcasting the current location.
#[tauri::command]
pub async fn start_sharing(
    state: State<'_, AppState>,
) -> Result<CommandResult<ShareSession>, ()> {
    Ok(CommandResult::ok(
        state.companion().sessions().start_sharing(),
    ))
}

/// Stop broadcasting. Safe to call when nothing is being shared.
#[tauri::command]
pub fn stop_sharing(state: State<AppState>) -> CommandResult<()> {
    state.companion().sessions().stop_sharing();
    CommandResult::ok(())
}
