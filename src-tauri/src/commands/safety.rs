//! Safety commands

use tauri::State;

use aegis_core::{plan_routes, NearbyHelp, RouteOption, SafetyAssessment};

use crate::commands::CommandResult;
use crate::state::AppState;

/// Recompute the advisory safety assessment for the current fix.
#[tauri::command]
pub fn analyze_safety(state: State<AppState>) -> CommandResult<SafetyAssessment> {
    CommandResult::ok(state.companion().assess_safety())
}

/// Look up nearby police stations and hospitals. Never fails; a failed
/// lookup answers with sample data and `degraded: true`.
#[tauri::command]
pub async fn find_nearby_help(
    state: State<'_, AppState>,
) -> Result<CommandResult<NearbyHelp>, ()> {
    Ok(CommandResult::ok(state.companion().nearby_help().await))
}

/// Simulated route candidates for a destination.
#[tauri::command]
pub fn plan_safe_routes(destination: String) -> CommandResult<Vec<RouteOption>> {
    match plan_routes(&destination) {
        Ok(routes) => CommandResult::ok(routes),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
