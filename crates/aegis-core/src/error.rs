//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Session error: {0}")]
    Session(#[from] aegis_sessions::SessionError),

    #[error("Safety error: {0}")]
    Safety(#[from] aegis_safety::SafetyError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Contact {0} cannot be empty")]
    EmptyContactField(&'static str),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),
}
