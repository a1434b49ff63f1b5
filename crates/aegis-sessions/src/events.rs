//! Outbound events, notices, and UI state updates
//!
//! Realtime events carry the wire channel names and camelCase payloads the
//! transport expects. Notices are user-facing toasts. State updates are
//! app-internal pushes that keep the WebView's derived state current.

use chrono::{DateTime, Utc};
use serde::Serialize;

use aegis_location::{Coordinate, StampedCoordinate};

use crate::journey::{Checkpoint, JourneyStats};

/// Fire-and-forget events emitted to the realtime transport.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RealtimeEvent {
    #[serde(rename_all = "camelCase")]
    SosTrigger {
        user_id: String,
        location: StampedCoordinate,
        message: String,
    },
    #[serde(rename_all = "camelCase")]
    JourneyStarted {
        user_id: String,
        destination: String,
        start_time: DateTime<Utc>,
        location: Coordinate,
    },
    #[serde(rename_all = "camelCase")]
    ShareLocation {
        user_id: String,
        location: StampedCoordinate,
        duration: u32,
    },
}

impl RealtimeEvent {
    /// Channel the event is published on.
    pub fn channel(&self) -> &'static str {
        match self {
            RealtimeEvent::SosTrigger { .. } => "sos-trigger",
            RealtimeEvent::JourneyStarted { .. } => "journey-started",
            RealtimeEvent::ShareLocation { .. } => "share-location",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
    Danger,
}

/// User-facing toast.
#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: &str, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.to_string(),
            message: message.into(),
        }
    }

    pub fn info(title: &str, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title, message)
    }

    pub fn success(title: &str, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, title, message)
    }

    pub fn error(title: &str, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title, message)
    }

    pub fn danger(title: &str, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Danger, title, message)
    }
}

/// Derived state pushed to the WebView.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum StateUpdate {
    #[serde(rename_all = "camelCase")]
    SosCountdown { remaining: u32 },
    Journey(JourneyStats),
    Checkpoint(Checkpoint),
}

impl StateUpdate {
    /// App-internal channel the update is published on.
    pub fn channel(&self) -> &'static str {
        match self {
            StateUpdate::SosCountdown { .. } => "aegis://sos-countdown",
            StateUpdate::Journey(_) => "aegis://journey-stats",
            StateUpdate::Checkpoint(_) => "aegis://checkpoint",
        }
    }
}

/// Where session events leave the core. The desktop shell forwards them
/// to the realtime transport and the WebView.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: RealtimeEvent);
    fn notify(&self, notice: Notice);
    fn update(&self, update: StateUpdate);
}

/// Map an inbound realtime channel to the toast it should raise.
/// Unknown channels are ignored.
pub fn inbound_notice(channel: &str) -> Option<Notice> {
    match channel {
        "sos-received" => Some(Notice::success(
            "SOS Sent",
            "Emergency contacts have been notified",
        )),
        "location-shared" => Some(Notice::info(
            "Location Shared",
            "Your live location is being shared",
        )),
        _ => None,
    }
}
