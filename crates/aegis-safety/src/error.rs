//! Safety error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SafetyError {
    #[error("Destination cannot be empty")]
    EmptyDestination,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("Server rejected the request")]
    Rejected,
}
