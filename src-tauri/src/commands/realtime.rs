//! Inbound realtime events
//!
//! The frontend owns the transport connection and relays every inbound
//! event here; known channels raise a toast, unknown ones are ignored.

use tauri::State;

use aegis_core::{inbound_notice, EventSink};

use crate::commands::CommandResult;
use crate::state::AppState;

#[tauri::command]
pub fn realtime_received(state: State<AppState>, channel: String) -> CommandResult<bool> {
    match inbound_notice(&channel) {
        Some(notice) => {
            state.sink().notify(notice);
            CommandResult::ok(true)
        }
        None => {
            tracing::debug!(%channel, "Ignoring unknown realtime channel");
            CommandResult::ok(false)
        }
    }
}
