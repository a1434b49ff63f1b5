//! Application state management

use std::sync::Arc;

use aegis_core::Companion;

use crate::sink::TauriSink;

/// State shared with every IPC command.
pub struct AppState {
    companion: Arc<Companion>,
    sink: Arc<TauriSink>,
}

impl AppState {
    pub fn new(companion: Companion, sink: Arc<TauriSink>) -> Self {
        Self {
            companion: Arc::new(companion),
            sink,
        }
    }

    pub fn companion(&self) -> &Companion {
        &self.companion
    }

    pub fn sink(&self) -> &TauriSink {
        &self.sink
    }
}
