//! Aegis Sessions
//!
//! The session lifecycles at the center of the app:
//! - the cancellable SOS countdown,
//! - the journey session with simulated telemetry,
//! - the bounded or unbounded location-share session.
//!
//! Each kind has at most one live instance, owned by the
//! [`SessionController`], and each drives a recurring tick that updates
//! derived UI state and emits an outbound notification. A tick task is
//! always aborted before a new one of the same kind is scheduled.

mod controller;
mod error;
mod events;
mod journey;
mod share;
mod sos;

pub use controller::{SessionConfig, SessionController, SessionSnapshot, ShareTick};
pub use error::SessionError;
pub use events::{
    inbound_notice, EventSink, Notice, NoticeLevel, RealtimeEvent, StateUpdate,
};
pub use journey::{Checkpoint, JourneySession, JourneyStats, CHECKPOINT_NAMES};
pub use share::{ShareSession, SHARE_DURATION_CHOICES};
pub use sos::{SosCountdown, SosTick, COUNTDOWN_START};

pub type Result<T> = std::result::Result<T, SessionError>;
