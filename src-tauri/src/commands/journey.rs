//! Journey commands

use serde::Serialize;
use tauri::State;

use crate::commands::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyStatus {
    pub active: bool,
    pub destination: Option<String>,
}

fn status(state: &AppState) -> JourneyStatus {
    let journey = state.companion().sessions().active_journey();
    JourneyStatus {
        active: journey.is_some(),
        destination: journey.map(|j| j.destination),
    }
}

/// Start a journey when none is active, stop the active one otherwise.
#[tauri::command]
pub async fn toggle_journey(
    state: State<'_, AppState>,
    destination: String,
) -> Result<CommandResult<JourneyStatus>, ()> {
    Ok(
        match state.companion().sessions().toggle_journey(&destination) {
            Ok(_) => CommandResult::ok(status(state.inner())),
            Err(e) => CommandResult::err(e.to_string()),
        },
    )
}

#[tauri::command]
pub fn journey_status(state: State<AppState>) -> CommandResult<JourneyStatus> {
    CommandResult::ok(status(state.inner()))
}
