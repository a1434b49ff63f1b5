//! Aegis Core
//!
//! Central coordination layer for the Aegis safety companion. The Rust
//! side owns all state; the WebView is a stateless renderer.

mod companion;
mod config;
mod contacts;
mod error;

pub use companion::{Companion, NearbyHelp};
pub use config::Config;
pub use contacts::{sample_contacts, ContactBook, EmergencyContact, Relation};
pub use error::CoreError;

// Re-export core components
pub use aegis_activity::{ActivityEntry, ActivityKind, ActivityLog};
pub use aegis_location::{
    Coordinate, FixRequest, LocationTracker, StampedCoordinate, FALLBACK_COORDINATE,
};
pub use aegis_safety::{
    plan_routes, ColorTier, NearbyPlace, PlaceKind, RouteOption, SafetyApi, SafetyAssessment,
    SafetyError, SosAlert,
};
pub use aegis_sessions::{
    inbound_notice, Checkpoint, EventSink, JourneySession, JourneyStats, Notice, NoticeLevel,
    RealtimeEvent, SessionConfig, SessionController, SessionError, SessionSnapshot, ShareSession,
    SosTick, StateUpdate, SHARE_DURATION_CHOICES,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
