//! Session error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("An SOS countdown is already running")]
    CountdownActive,

    #[error("No SOS countdown is running")]
    NoCountdown,

    #[error("Please enter a destination")]
    EmptyDestination,

    #[error("No journey is active")]
    NoActiveJourney,

    #[error("Share duration must be one of 15, 30, 60 or 0 minutes, got {0}")]
    InvalidShareDuration(u32),
}
