//! Main companion state container
//!
//! The central state container for the whole app. All state flows through
//! here, and the WebView is purely a renderer.

use chrono::{Duration, Local, Timelike, Utc};
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;
use url::Url;

use aegis_activity::{ActivityKind, ActivityLog};
use aegis_location::{Coordinate, LocationTracker};
use aegis_safety::{assess, HttpAlertTransport, NearbyPlace, PlaceKind, SafetyApi, SafetyAssessment};
use aegis_sessions::{EventSink, SessionController};

use crate::config::Config;
use crate::contacts::{sample_contacts, ContactBook};
use crate::error::CoreError;
use crate::Result;

/// Nearby emergency services around the current location.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyHelp {
    pub police: Vec<NearbyPlace>,
    pub hospitals: Vec<NearbyPlace>,
    /// True when sample data stands in for a failed lookup.
    pub degraded: bool,
}

/// Main companion instance
pub struct Companion {
    config: Config,
    location: LocationTracker,
    activity: ActivityLog,
    contacts: ContactBook,
    safety: Arc<SafetyApi>,
    sessions: Arc<SessionController>,
}

impl Companion {
    /// Wire up a new companion instance around the given event sink.
    pub fn new(config: Config, sink: Arc<dyn EventSink>) -> Result<Self> {
        let api_base = Url::parse(&config.api_base)
            .map_err(|e| CoreError::Config(format!("invalid api_base: {e}")))?;

        let safety = Arc::new(SafetyApi::new(api_base));
        let transport = Arc::new(HttpAlertTransport::new(Arc::clone(&safety)));
        let location = LocationTracker::new();
        let activity = ActivityLog::new();

        let sessions = SessionController::new(
            config.session_config(),
            sink,
            transport,
            activity.clone(),
            location.clone(),
        );

        Ok(Self {
            config,
            location,
            activity,
            contacts: ContactBook::new(),
            safety,
            sessions,
        })
    }

    /// Seed the sample contacts and history the app ships with.
    pub fn initialize(&self) -> Result<()> {
        sample_contacts(&self.contacts)?;
        self.seed_sample_history();

        tracing::info!(
            contacts = self.contacts.len(),
            history = self.activity.len(),
            "Initialized companion"
        );

        Ok(())
    }

    fn seed_sample_history(&self) {
        let now = Utc::now();
        let here = self.location.current();
        self.activity.append(
            ActivityKind::Sos,
            "Emergency alert test",
            here,
            now - Duration::days(6),
        );
        self.activity.append(
            ActivityKind::Journey,
            "Evening commute with safe route",
            here,
            now - Duration::days(2),
        );
        self.activity.append(
            ActivityKind::Journey,
            "Morning commute completed safely",
            here,
            now - Duration::days(1),
        );
        self.activity.append(
            ActivityKind::Checkin,
            "Arrived at destination safely",
            here,
            now - Duration::hours(20),
        );
    }

    /// Advisory assessment of the current surroundings. Recomputed per
    /// location fix, not on a timer.
    pub fn assess_safety(&self) -> SafetyAssessment {
        let roll = rand::thread_rng().gen::<f64>();
        assess(Local::now().hour(), roll)
    }

    /// Look up nearby police stations and hospitals with the configured
    /// radii. Never fails; a degraded lookup answers with sample data.
    pub async fn nearby_help(&self) -> NearbyHelp {
        let center = self.location.current();

        let police = self
            .safety
            .nearby(center, PlaceKind::Police, self.config.police_radius_m)
            .await;
        let hospitals = self
            .safety
            .nearby(center, PlaceKind::Hospital, self.config.hospital_radius_m)
            .await;

        NearbyHelp {
            police,
            hospitals,
            degraded: self.safety.is_degraded(),
        }
    }

    /// Record a geolocation fix reported by the frontend.
    pub fn record_location(&self, lat: f64, lng: f64) {
        self.location.record_fix(Coordinate::new(lat, lng));
    }

    /// Record that geolocation failed; the fallback coordinate takes over.
    pub fn location_unavailable(&self) -> Coordinate {
        self.location.mark_unavailable()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sessions(&self) -> &Arc<SessionController> {
        &self.sessions
    }

    pub fn location(&self) -> &LocationTracker {
        &self.location
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    pub fn contacts(&self) -> &ContactBook {
        &self.contacts
    }

    pub fn safety(&self) -> &Arc<SafetyApi> {
        &self.safety
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aegis_location::FALLBACK_COORDINATE;
    use aegis_sessions::{Notice, RealtimeEvent, StateUpdate};

    struct NullSink;

    impl EventSink for NullSink {
        fn emit(&self, _event: RealtimeEvent) {}
        fn notify(&self, _notice: Notice) {}
        fn update(&self, _update: StateUpdate) {}
    }

    fn companion() -> Companion {
        Companion::new(Config::default(), Arc::new(NullSink)).unwrap()
    }

    #[test]
    fn test_initialize_seeds_samples() {
        let companion = companion();
        companion.initialize().unwrap();

        assert_eq!(companion.contacts().len(), 3);
        assert_eq!(companion.activity().len(), 4);
        // Newest first: the check-in leads the history.
        assert_eq!(
            companion.activity().entries()[0].kind,
            ActivityKind::Checkin
        );
    }

    #[test]
    fn test_invalid_api_base_rejected() {
        let config = Config {
            api_base: "not a url".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            Companion::new(config, Arc::new(NullSink)),
            Err(CoreError::Config(_))
        ));
    }

    #[test]
    fn test_assessment_is_clamped() {
        let companion = companion();
        for _ in 0..50 {
            assert!(companion.assess_safety().score <= 100);
        }
    }

    #[test]
    fn test_location_fix_and_fallback() {
        let companion = companion();
        companion.record_location(48.85, 2.35);
        assert_eq!(companion.location().current(), Coordinate::new(48.85, 2.35));

        let fallback = companion.location_unavailable();
        assert_eq!(fallback, FALLBACK_COORDINATE);
    }
}
