//! Aegis - Tauri Application
//!
//! The desktop shell. Rust owns all state; the WebView renders it and
//! talks back through the IPC commands below.

mod commands;
mod sink;
mod state;

use std::sync::Arc;

use aegis_core::{Companion, Config, EventSink};
use sink::TauriSink;
use state::AppState;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    aegis_core::init_logging();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let sink = Arc::new(TauriSink::new(app.handle().clone()));

            let companion = Companion::new(
                Config::default(),
                Arc::clone(&sink) as Arc<dyn EventSink>,
            )?;
            companion.initialize()?;

            app.manage(AppState::new(companion, sink));

            tracing::info!("Aegis companion started");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Diagnostics
            commands::diagnostics::frontend_ready,
            commands::diagnostics::session_status,
            // SOS commands
            commands::sos::trigger_sos,
            commands::sos::cancel_sos,
            // Journey commands
            commands::journey::toggle_journey,
            commands::journey::journey_status,
            // Location-share commands
            commands::share::set_share_duration,
            commands::share::start_sharing,
            commands::share::stop_sharing,
            // Safety commands
            commands::safety::analyze_safety,
            commands::safety::find_nearby_help,
            commands::safety::plan_safe_routes,
            // Location commands
            commands::location::geolocation_options,
            commands::location::report_location,
            commands::location::location_unavailable,
            // Contact commands
            commands::contacts::get_contacts,
            commands::contacts::trusted_contacts,
            commands::contacts::add_contact,
            commands::contacts::delete_contact,
            // Activity commands
            commands::activity::get_history,
            // Realtime inbox
            commands::realtime::realtime_received,
        ])
        .run(tauri::generate_context!())
        .expect("error while running aegis companion");
}
