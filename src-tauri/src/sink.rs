//! Event forwarding to the WebView
//!
//! The core emits through the `EventSink` trait; this implementation
//! forwards everything as Tauri app events. Realtime events keep their
//! wire channel names so the frontend can relay them to the transport
//! unchanged; notices and state updates use app-internal channels.

use tauri::{AppHandle, Emitter};

use aegis_core::{EventSink, Notice, RealtimeEvent, StateUpdate};

/// Channel user-facing toasts are published on.
pub const NOTICE_CHANNEL: &str = "aegis://notice";

pub struct TauriSink {
    app: AppHandle,
}

impl TauriSink {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl EventSink for TauriSink {
    fn emit(&self, event: RealtimeEvent) {
        if let Err(error) = self.app.emit(event.channel(), &event) {
            tracing::warn!(%error, channel = event.channel(), "Failed to forward realtime event");
        }
    }

    fn notify(&self, notice: Notice) {
        if let Err(error) = self.app.emit(NOTICE_CHANNEL, &notice) {
            tracing::warn!(%error, "Failed to forward notice");
        }
    }

    fn update(&self, update: StateUpdate) {
        if let Err(error) = self.app.emit(update.channel(), &update) {
            tracing::warn!(%error, channel = update.channel(), "Failed to forward state update");
        }
    }
}
