//! Emergency contact commands

use tauri::State;

use aegis_core::{EmergencyContact, Relation};

use crate::commands::CommandResult;
use crate::state::AppState;

#[tauri::command]
pub fn get_contacts(state: State<AppState>) -> CommandResult<Vec<EmergencyContact>> {
    CommandResult::ok(state.companion().contacts().list())
}

/// The two highest-priority contacts.
#[tauri::command]
pub fn trusted_contacts(state: State<AppState>) -> CommandResult<Vec<EmergencyContact>> {
    CommandResult::ok(state.companion().contacts().trusted())
}

#[tauri::command]
pub fn add_contact(
    state: State<AppState>,
    name: String,
    phone: String,
    relation: Relation,
    priority: u8,
) -> CommandResult<EmergencyContact> {
    match state
        .companion()
        .contacts()
        .add(&name, &phone, relation, priority)
    {
        Ok(contact) => CommandResult::ok(contact),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn delete_contact(state: State<AppState>, contact_id: String) -> CommandResult<()> {
    match state.companion().contacts().remove(&contact_id) {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
