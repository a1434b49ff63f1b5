//! Session controller
//!
//! Owns the three session kinds and their tick tasks. Tick bodies are
//! synchronous methods; the spawned tasks only await the interval and call
//! them, so tests can drive a lifecycle without timers. Every collaborator
//! (event sink, alert transport, activity log, location tracker) is
//! injected rather than reached through globals.

use chrono::{DateTime, Local, Timelike, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;

use aegis_activity::{ActivityKind, ActivityLog};
use aegis_location::LocationTracker;
use aegis_safety::{AlertTransport, SosAlert};

use crate::error::SessionError;
use crate::events::{EventSink, Notice, RealtimeEvent, StateUpdate};
use crate::journey::{JourneySession, JourneyStats};
use crate::share::{validate_duration, ShareSession};
use crate::sos::{SosCountdown, SosTick};
use crate::Result;

const SOS_EVENT_MESSAGE: &str = "EMERGENCY SOS activated!";
const SOS_API_MESSAGE: &str = "EMERGENCY SOS activated! I need help immediately.";

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub user_id: String,
    /// Seconds the SOS countdown starts from.
    pub countdown_start: u32,
    pub countdown_tick: Duration,
    pub journey_tick: Duration,
    pub share_tick: Duration,
    /// Share duration preselected before the user picks one.
    pub default_share_duration: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_id: "user123".to_string(),
            countdown_start: crate::sos::COUNTDOWN_START,
            countdown_tick: Duration::from_secs(1),
            journey_tick: Duration::from_secs(1),
            share_tick: Duration::from_secs(30),
            default_share_duration: 15,
        }
    }
}

/// Outcome of one share tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTick {
    /// Location was broadcast; configured duration in minutes.
    Broadcast(u32),
    /// The bounded share ran past its end time and stopped itself.
    Expired,
}

/// Point-in-time view of the three session kinds, for the UI.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub sos_remaining: Option<u32>,
    pub journey_destination: Option<String>,
    pub journey_started_at: Option<DateTime<Utc>>,
    pub sharing: bool,
    pub share_end_time: Option<DateTime<Utc>>,
    pub share_duration: u32,
}

pub struct SessionController {
    config: SessionConfig,
    /// Handle to self for the spawned tick tasks.
    weak: Weak<SessionController>,
    sos: Mutex<SosCountdown>,
    journey: Mutex<Option<JourneySession>>,
    share: Mutex<Option<ShareSession>>,
    next_share_duration: Mutex<u32>,
    rng: Mutex<StdRng>,
    sos_task: Mutex<Option<JoinHandle<()>>>,
    journey_task: Mutex<Option<JoinHandle<()>>>,
    share_task: Mutex<Option<JoinHandle<()>>>,
    sink: Arc<dyn EventSink>,
    transport: Arc<dyn AlertTransport>,
    activity: ActivityLog,
    location: LocationTracker,
}

impl SessionController {
    pub fn new(
        config: SessionConfig,
        sink: Arc<dyn EventSink>,
        transport: Arc<dyn AlertTransport>,
        activity: ActivityLog,
        location: LocationTracker,
    ) -> Arc<Self> {
        Self::with_rng(
            config,
            sink,
            transport,
            activity,
            location,
            StdRng::from_entropy(),
        )
    }

    /// Construct with an explicit random source.
    pub fn with_rng(
        config: SessionConfig,
        sink: Arc<dyn EventSink>,
        transport: Arc<dyn AlertTransport>,
        activity: ActivityLog,
        location: LocationTracker,
        rng: StdRng,
    ) -> Arc<Self> {
        Arc::new_cyclic(|weak| Self {
            weak: weak.clone(),
            sos: Mutex::new(SosCountdown::with_start(config.countdown_start)),
            journey: Mutex::new(None),
            share: Mutex::new(None),
            next_share_duration: Mutex::new(config.default_share_duration),
            rng: Mutex::new(rng),
            sos_task: Mutex::new(None),
            journey_task: Mutex::new(None),
            share_task: Mutex::new(None),
            sink,
            transport,
            activity,
            location,
            config,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    // --- SOS countdown ---

    /// Start the SOS countdown. Valid only while idle.
    pub fn trigger_sos(&self) -> Result<u32> {
        let remaining = self.sos.lock().trigger(Utc::now())?;

        tracing::info!(remaining, "SOS countdown started");
        self.sink.update(StateUpdate::SosCountdown { remaining });
        self.spawn_sos_task();

        Ok(remaining)
    }

    /// Advance the countdown by one second. Runs the confirmation actions
    /// when the counter reaches zero.
    pub fn sos_tick(&self) -> SosTick {
        let outcome = self.sos.lock().tick();

        match outcome {
            SosTick::Counting(remaining) => {
                self.sink.update(StateUpdate::SosCountdown { remaining });
            }
            SosTick::Confirmed => self.confirm_sos(),
            SosTick::Inactive => {}
        }

        outcome
    }

    /// Abort the countdown before it fires. No network call is made.
    pub fn cancel_sos(&self) -> Result<()> {
        self.sos.lock().cancel()?;
        self.abort(&self.sos_task);

        tracing::info!("SOS countdown cancelled");
        self.sink
            .notify(Notice::info("SOS Cancelled", "Emergency alert has been cancelled"));

        Ok(())
    }

    fn confirm_sos(&self) {
        let location = self.location.stamped(Utc::now());

        tracing::warn!(lat = location.lat, lng = location.lng, "SOS confirmed, dispatching alert");

        self.sink.emit(RealtimeEvent::SosTrigger {
            user_id: self.config.user_id.clone(),
            location,
            message: SOS_EVENT_MESSAGE.to_string(),
        });
        self.transport.dispatch(SosAlert {
            location,
            message: SOS_API_MESSAGE.to_string(),
        });
        self.activity.append(
            ActivityKind::Sos,
            "Emergency SOS activated",
            location.coordinate(),
            location.timestamp,
        );
        // Surfaced regardless of how the HTTP submission fares.
        self.sink
            .notify(Notice::danger("SOS Sent", "Emergency contacts have been notified"));
    }

    // --- Journey ---

    /// The single UI entry point: starts a journey when none is active,
    /// stops the active one otherwise. Returns whether a journey is now
    /// running.
    pub fn toggle_journey(&self, destination: &str) -> Result<bool> {
        let active = self.journey.lock().is_some();
        if active {
            self.stop_journey()?;
            Ok(false)
        } else {
            self.start_journey(destination)?;
            Ok(true)
        }
    }

    fn start_journey(&self, destination: &str) -> Result<()> {
        let now = Utc::now();
        let location = self.location.current();
        let session = JourneySession::start(destination, now, location)?;

        tracing::info!(destination = %session.destination, "Journey started");

        self.sink.emit(RealtimeEvent::JourneyStarted {
            user_id: self.config.user_id.clone(),
            destination: session.destination.clone(),
            start_time: now,
            location,
        });
        self.sink.notify(Notice::success(
            "Journey Started",
            format!("Heading to {}", session.destination),
        ));
        self.activity.append(
            ActivityKind::Journey,
            format!("Started journey to {}", session.destination),
            location,
            now,
        );

        *self.journey.lock() = Some(session);
        self.spawn_journey_task();

        Ok(())
    }

    /// Stop the active journey. Valid only while one is running.
    pub fn stop_journey(&self) -> Result<JourneySession> {
        let session = self
            .journey
            .lock()
            .take()
            .ok_or(SessionError::NoActiveJourney)?;
        self.abort(&self.journey_task);

        tracing::info!(destination = %session.destination, "Journey completed");

        self.sink
            .notify(Notice::success("Journey Completed", "You have arrived safely"));
        self.activity.append(
            ActivityKind::Journey,
            format!("Completed journey to {}", session.destination),
            self.location.current(),
            Utc::now(),
        );

        Ok(session)
    }

    /// Recompute the simulated journey telemetry for one tick.
    pub fn journey_tick(&self, now: DateTime<Utc>, local_hour: u32) -> Option<JourneyStats> {
        let mut guard = self.journey.lock();
        let session = guard.as_mut()?;

        let (stats, checkpoint) = {
            let mut rng = self.rng.lock();
            let jitter = rng.gen_range(-5..5);
            let stats = session.stats(now, local_hour, jitter);
            let checkpoint = session.maybe_checkpoint(now, &mut *rng).cloned();
            (stats, checkpoint)
        };
        drop(guard);

        if let Some(checkpoint) = checkpoint {
            self.sink.update(StateUpdate::Checkpoint(checkpoint));
        }
        self.sink.update(StateUpdate::Journey(stats.clone()));

        Some(stats)
    }

    pub fn journey_active(&self) -> bool {
        self.journey.lock().is_some()
    }

    pub fn active_journey(&self) -> Option<JourneySession> {
        self.journey.lock().clone()
    }

    // --- Location share ---

    /// Pick the duration the next share session will use.
    pub fn set_share_duration(&self, minutes: u32) -> Result<()> {
        *self.next_share_duration.lock() = validate_duration(minutes)?;
        Ok(())
    }

    pub fn share_duration(&self) -> u32 {
        *self.next_share_duration.lock()
    }

    /// Begin broadcasting the current location. Supersedes any active
    /// share session; its tick task is aborted before the new one starts.
    pub fn start_sharing(&self) -> ShareSession {
        let duration = *self.next_share_duration.lock();
        let now = Utc::now();
        let session = ShareSession::start(duration, now);

        *self.share.lock() = Some(session.clone());
        self.spawn_share_task();

        let window = if duration == 0 {
            "until you arrive".to_string()
        } else {
            format!("{duration} minutes")
        };
        tracing::info!(duration, "Location sharing started");
        self.sink.notify(Notice::info(
            "Location Sharing Started",
            format!("Sharing for {window}"),
        ));
        self.activity.append(
            ActivityKind::Checkin,
            "Started location sharing",
            self.location.current(),
            now,
        );

        session
    }

    /// Stop broadcasting. Idempotent; repeat calls are silent no-ops.
    pub fn stop_sharing(&self) {
        let was_active = self.share.lock().take().is_some();
        self.abort(&self.share_task);

        if was_active {
            tracing::info!("Location sharing stopped");
            self.sink.notify(Notice::success(
                "Location Sharing Stopped",
                "Your location is no longer being shared",
            ));
        }
    }

    /// One share cycle: expiry check first, then the broadcast. An
    /// expired session stops itself and emits nothing that cycle.
    pub fn share_tick(&self, now: DateTime<Utc>) -> Option<ShareTick> {
        let (expired, duration) = {
            let guard = self.share.lock();
            let session = guard.as_ref()?;
            (session.expired(now), session.duration_minutes)
        };

        if expired {
            self.stop_sharing();
            return Some(ShareTick::Expired);
        }

        self.sink.emit(RealtimeEvent::ShareLocation {
            user_id: self.config.user_id.clone(),
            location: self.location.stamped(now),
            duration,
        });

        Some(ShareTick::Broadcast(duration))
    }

    pub fn sharing(&self) -> bool {
        self.share.lock().is_some()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let journey = self.journey.lock();
        let share = self.share.lock();

        SessionSnapshot {
            sos_remaining: self.sos.lock().remaining(),
            journey_destination: journey.as_ref().map(|j| j.destination.clone()),
            journey_started_at: journey.as_ref().map(|j| j.start_time),
            sharing: share.is_some(),
            share_end_time: share.as_ref().and_then(|s| s.end_time),
            share_duration: *self.next_share_duration.lock(),
        }
    }

    // --- Tick tasks ---

    fn abort(&self, slot: &Mutex<Option<JoinHandle<()>>>) {
        if let Some(task) = slot.lock().take() {
            task.abort();
        }
    }

    /// Store a freshly spawned tick task, aborting any prior task of the
    /// same kind first.
    fn store(&self, slot: &Mutex<Option<JoinHandle<()>>>, task: JoinHandle<()>) {
        let mut slot = slot.lock();
        if let Some(prev) = slot.take() {
            prev.abort();
        }
        *slot = Some(task);
    }

    fn spawn_sos_task(&self) {
        let Some(controller) = self.weak.upgrade() else {
            return;
        };
        let period = self.config.countdown_tick;
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first interval tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                if !matches!(controller.sos_tick(), SosTick::Counting(_)) {
                    break;
                }
            }
        });
        self.store(&self.sos_task, task);
    }

    fn spawn_journey_task(&self) {
        let Some(controller) = self.weak.upgrade() else {
            return;
        };
        let period = self.config.journey_tick;
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await;
            loop {
                interval.tick().await;
                if controller
                    .journey_tick(Utc::now(), Local::now().hour())
                    .is_none()
                {
                    break;
                }
            }
        });
        self.store(&self.journey_task, task);
    }

    fn spawn_share_task(&self) {
        let Some(controller) = self.weak.upgrade() else {
            return;
        };
        let period = self.config.share_tick;
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await;
            loop {
                interval.tick().await;
                if !matches!(
                    controller.share_tick(Utc::now()),
                    Some(ShareTick::Broadcast(_))
                ) {
                    break;
                }
            }
        });
        self.store(&self.share_task, task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NoticeLevel;
    use chrono::Duration as ChronoDuration;

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<RealtimeEvent>>,
        notices: Mutex<Vec<Notice>>,
        updates: Mutex<Vec<StateUpdate>>,
    }

    impl RecordingSink {
        fn event_channels(&self) -> Vec<&'static str> {
            self.events.lock().iter().map(|e| e.channel()).collect()
        }

        fn notice_titles(&self) -> Vec<String> {
            self.notices.lock().iter().map(|n| n.title.clone()).collect()
        }
    }

    impl EventSink for RecordingSink {
        fn emit(&self, event: RealtimeEvent) {
            self.events.lock().push(event);
        }

        fn notify(&self, notice: Notice) {
            self.notices.lock().push(notice);
        }

        fn update(&self, update: StateUpdate) {
            self.updates.lock().push(update);
        }
    }

    #[derive(Default)]
    struct RecordingTransport {
        alerts: Mutex<Vec<SosAlert>>,
    }

    impl AlertTransport for RecordingTransport {
        fn dispatch(&self, alert: SosAlert) {
            self.alerts.lock().push(alert);
        }
    }

    fn controller() -> (
        Arc<SessionController>,
        Arc<RecordingSink>,
        Arc<RecordingTransport>,
        ActivityLog,
    ) {
        let sink = Arc::new(RecordingSink::default());
        let transport = Arc::new(RecordingTransport::default());
        let activity = ActivityLog::new();
        let ctrl = SessionController::with_rng(
            SessionConfig::default(),
            Arc::clone(&sink) as Arc<dyn EventSink>,
            Arc::clone(&transport) as Arc<dyn AlertTransport>,
            activity.clone(),
            LocationTracker::new(),
            StdRng::seed_from_u64(42),
        );
        (ctrl, sink, transport, activity)
    }

    #[tokio::test]
    async fn test_sos_countdown_confirms_once() {
        let (ctrl, sink, transport, activity) = controller();

        assert_eq!(ctrl.trigger_sos().unwrap(), 10);

        let mut confirmations = 0;
        for _ in 0..10 {
            if ctrl.sos_tick() == SosTick::Confirmed {
                confirmations += 1;
            }
        }
        assert_eq!(confirmations, 1);

        assert_eq!(sink.event_channels(), vec!["sos-trigger"]);
        assert_eq!(transport.alerts.lock().len(), 1);
        assert_eq!(activity.filtered(ActivityKind::Sos).len(), 1);

        let notices = sink.notices.lock();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "SOS Sent");
        assert_eq!(notices[0].level, NoticeLevel::Danger);

        // Back to idle: a new trigger is accepted.
        assert!(ctrl.trigger_sos().is_ok());
    }

    #[tokio::test]
    async fn test_sos_alert_carries_user_and_message() {
        let (ctrl, sink, transport, _) = controller();
        ctrl.trigger_sos().unwrap();
        for _ in 0..10 {
            ctrl.sos_tick();
        }

        match &sink.events.lock()[0] {
            RealtimeEvent::SosTrigger { user_id, message, .. } => {
                assert_eq!(user_id, "user123");
                assert_eq!(message, SOS_EVENT_MESSAGE);
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert_eq!(transport.alerts.lock()[0].message, SOS_API_MESSAGE);
    }

    #[tokio::test]
    async fn test_sos_cancel_suppresses_confirmation() {
        let (ctrl, sink, transport, activity) = controller();

        ctrl.trigger_sos().unwrap();
        ctrl.sos_tick();
        ctrl.sos_tick();
        ctrl.cancel_sos().unwrap();

        assert_eq!(ctrl.sos_tick(), SosTick::Inactive);
        assert!(sink.events.lock().is_empty());
        assert!(transport.alerts.lock().is_empty());
        assert!(activity.is_empty());
        assert_eq!(sink.notice_titles(), vec!["SOS Cancelled"]);
    }

    #[tokio::test]
    async fn test_sos_trigger_rejected_while_counting() {
        let (ctrl, _, _, _) = controller();
        ctrl.trigger_sos().unwrap();
        assert_eq!(ctrl.trigger_sos().unwrap_err(), SessionError::CountdownActive);
        assert_eq!(ctrl.snapshot().sos_remaining, Some(10));
    }

    #[tokio::test]
    async fn test_journey_toggle_cycle() {
        let (ctrl, sink, _, activity) = controller();

        assert!(ctrl.toggle_journey("Office").unwrap());
        assert!(ctrl.journey_active());

        // Second call stops; destination argument is ignored.
        assert!(!ctrl.toggle_journey("").unwrap());
        assert!(!ctrl.journey_active());

        // Third call starts a fresh, independent journey.
        assert!(ctrl.toggle_journey("Library").unwrap());
        assert_eq!(
            ctrl.active_journey().unwrap().destination,
            "Library"
        );

        assert_eq!(
            sink.event_channels(),
            vec!["journey-started", "journey-started"]
        );
        let journeys = activity.filtered(ActivityKind::Journey);
        assert_eq!(journeys.len(), 3);
        // Newest first: start of Library, completion of Office, start of Office.
        assert_eq!(journeys[1].description, "Completed journey to Office");
    }

    #[tokio::test]
    async fn test_empty_destination_leaves_state_unchanged() {
        let (ctrl, sink, _, activity) = controller();

        assert_eq!(
            ctrl.toggle_journey("   ").unwrap_err(),
            SessionError::EmptyDestination
        );
        assert!(!ctrl.journey_active());
        assert!(sink.events.lock().is_empty());
        assert!(activity.is_empty());
    }

    #[tokio::test]
    async fn test_journey_tick_pushes_stats() {
        let (ctrl, sink, _, _) = controller();
        ctrl.toggle_journey("Office").unwrap();

        let start = ctrl.active_journey().unwrap().start_time;
        let stats = ctrl
            .journey_tick(start + ChronoDuration::seconds(60), 12)
            .unwrap();
        assert_eq!(stats.elapsed_secs, 60);
        assert!((stats.distance_km - 0.5).abs() < 1e-9);
        assert!(stats.safety_score <= 100);

        assert!(sink
            .updates
            .lock()
            .iter()
            .any(|u| matches!(u, StateUpdate::Journey(_))));

        ctrl.stop_journey().unwrap();
        assert!(ctrl.journey_tick(Utc::now(), 12).is_none());
    }

    #[tokio::test]
    async fn test_share_expiry_stops_without_emitting() {
        let (ctrl, sink, _, _) = controller();

        for minutes in [15u32, 30, 60] {
            ctrl.set_share_duration(minutes).unwrap();
            let session = ctrl.start_sharing();
            let end = session.end_time.unwrap();
            assert_eq!(end, session.started_at + ChronoDuration::minutes(i64::from(minutes)));

            // A tick inside the window broadcasts.
            let before = sink.events.lock().len();
            assert_eq!(
                ctrl.share_tick(session.started_at),
                Some(ShareTick::Broadcast(minutes))
            );
            assert_eq!(sink.events.lock().len(), before + 1);

            // A tick after the end time stops the session, emitting nothing.
            let before = sink.events.lock().len();
            assert_eq!(
                ctrl.share_tick(end + ChronoDuration::seconds(1)),
                Some(ShareTick::Expired)
            );
            assert_eq!(sink.events.lock().len(), before);
            assert!(!ctrl.sharing());
            assert!(ctrl.share_tick(Utc::now()).is_none());
        }
    }

    #[tokio::test]
    async fn test_unbounded_share_never_expires() {
        let (ctrl, _, _, _) = controller();

        ctrl.set_share_duration(0).unwrap();
        let session = ctrl.start_sharing();
        assert_eq!(session.end_time, None);

        let far_future = session.started_at + ChronoDuration::days(365);
        assert_eq!(ctrl.share_tick(far_future), Some(ShareTick::Broadcast(0)));
        assert!(ctrl.sharing());
    }

    #[tokio::test]
    async fn test_share_duration_validation() {
        let (ctrl, _, _, _) = controller();
        assert_eq!(
            ctrl.set_share_duration(45).unwrap_err(),
            SessionError::InvalidShareDuration(45)
        );
        // The preselected default survives the rejected set.
        assert_eq!(ctrl.share_duration(), 15);
    }

    #[tokio::test]
    async fn test_stop_sharing_is_idempotent() {
        let (ctrl, sink, _, _) = controller();

        ctrl.start_sharing();
        ctrl.stop_sharing();
        ctrl.stop_sharing();

        let stopped = sink
            .notice_titles()
            .into_iter()
            .filter(|t| t == "Location Sharing Stopped")
            .count();
        assert_eq!(stopped, 1);
    }

    #[tokio::test]
    async fn test_new_share_supersedes_active_one() {
        let (ctrl, _, _, _) = controller();

        ctrl.set_share_duration(15).unwrap();
        let first = ctrl.start_sharing();
        ctrl.set_share_duration(0).unwrap();
        let second = ctrl.start_sharing();

        assert_ne!(first.id, second.id);
        let snapshot = ctrl.snapshot();
        assert!(snapshot.sharing);
        assert_eq!(snapshot.share_end_time, None);
    }
}
