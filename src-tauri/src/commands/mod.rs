//! Tauri IPC Commands
//!
//! These commands bridge the frontend to the Rust core. Every command
//! answers with the same `{success, data?, error?}` envelope the safety
//! backend uses, so the frontend handles both the same way.

use serde::Serialize;

pub mod activity;
pub mod contacts;
pub mod diagnostics;
pub mod journey;
pub mod location;
pub mod realtime;
pub mod safety;
pub mod share;
pub mod sos;

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}
