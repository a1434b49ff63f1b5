//! Diagnostics commands

use tauri::State;

use aegis_core::SessionSnapshot;

use crate::commands::CommandResult;
use crate::state::AppState;

/// Called once the WebView has booted; lets the shell drop its loader.
#[tauri::command]
pub fn frontend_ready() {
    tracing::info!("Frontend ready");
}

/// Point-in-time view of all three session kinds.
#[tauri::command]
pub fn session_status(state: State<AppState>) -> CommandResult<SessionSnapshot> {
    CommandResult::ok(state.companion().sessions().snapshot())
}
