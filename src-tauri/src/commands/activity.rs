//! Activity history commands

use tauri::State;

use aegis_core::{ActivityEntry, ActivityKind};

use crate::commands::CommandResult;
use crate::state::AppState;

/// Activity history, newest first, optionally filtered by kind.
#[tauri::command]
pub fn get_history(
    state: State<AppState>,
    filter: Option<ActivityKind>,
) -> CommandResult<Vec<ActivityEntry>> {
    let activity = state.companion().activity();
    let entries = match filter {
        Some(kind) => activity.filtered(kind),
        None => activity.entries(),
    };
    CommandResult::ok(entries)
}
