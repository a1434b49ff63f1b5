//! Journey session
//!
//! A tracked trip from the current location to a named destination. The
//! telemetry is simulated: distance is a fixed nominal speed times elapsed
//! time, the safety score follows the journey band formula, and
//! checkpoints are drawn at random from a fixed set of named places.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use uuid::Uuid;

use aegis_location::Coordinate;
use aegis_safety::journey_score;

use crate::error::SessionError;
use crate::Result;

/// Simulated travel speed, km per elapsed minute.
pub const SIMULATED_SPEED_KM_PER_MIN: f64 = 0.5;

/// Per-tick probability of passing a checkpoint.
pub const CHECKPOINT_CHANCE: f64 = 0.05;

/// The fixed set of simulated waypoints.
pub const CHECKPOINT_NAMES: [&str; 4] = [
    "Main Street",
    "Central Park",
    "Shopping Mall",
    "Office District",
];

/// A simulated waypoint passed during an active journey.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkpoint {
    pub name: String,
    pub reached_at: DateTime<Utc>,
}

/// Derived per-tick journey figures.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyStats {
    pub elapsed_secs: u64,
    pub distance_km: f64,
    pub safety_score: u8,
}

#[derive(Debug, Clone)]
pub struct JourneySession {
    pub id: String,
    pub destination: String,
    pub start_time: DateTime<Utc>,
    pub start_location: Coordinate,
    pub checkpoints: Vec<Checkpoint>,
}

impl JourneySession {
    /// Open a journey to `destination`. The destination is trimmed and
    /// must be non-empty.
    pub fn start(
        destination: &str,
        now: DateTime<Utc>,
        start_location: Coordinate,
    ) -> Result<Self> {
        let destination = destination.trim();
        if destination.is_empty() {
            return Err(SessionError::EmptyDestination);
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            destination: destination.to_string(),
            start_time: now,
            start_location,
            checkpoints: Vec::new(),
        })
    }

    /// Elapsed time, clamped to zero for clocks that ran backwards.
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        (now - self.start_time).max(Duration::zero())
    }

    /// Simulated distance covered so far, a fixed nominal speed times the
    /// elapsed minutes. Not a tracked distance.
    pub fn simulated_distance_km(&self, now: DateTime<Utc>) -> f64 {
        let elapsed_minutes = self.elapsed(now).num_milliseconds() as f64 / 60_000.0;
        elapsed_minutes * SIMULATED_SPEED_KM_PER_MIN
    }

    /// Recompute the per-tick figures.
    pub fn stats(&self, now: DateTime<Utc>, local_hour: u32, jitter: i32) -> JourneyStats {
        JourneyStats {
            elapsed_secs: self.elapsed(now).num_seconds() as u64,
            distance_km: self.simulated_distance_km(now),
            safety_score: journey_score(local_hour, jitter),
        }
    }

    /// With probability [`CHECKPOINT_CHANCE`], append one simulated
    /// checkpoint drawn uniformly from [`CHECKPOINT_NAMES`].
    pub fn maybe_checkpoint(
        &mut self,
        now: DateTime<Utc>,
        rng: &mut impl Rng,
    ) -> Option<&Checkpoint> {
        if rng.gen::<f64>() >= CHECKPOINT_CHANCE {
            return None;
        }

        let name = CHECKPOINT_NAMES
            .choose(rng)
            .copied()
            .unwrap_or(CHECKPOINT_NAMES[0]);

        self.checkpoints.push(Checkpoint {
            name: name.to_string(),
            reached_at: now,
        });
        self.checkpoints.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn origin() -> Coordinate {
        Coordinate::new(40.7128, -74.0060)
    }

    #[test]
    fn test_blank_destination_rejected() {
        let now = Utc::now();
        assert_eq!(
            JourneySession::start("", now, origin()).unwrap_err(),
            SessionError::EmptyDestination
        );
        assert_eq!(
            JourneySession::start("   ", now, origin()).unwrap_err(),
            SessionError::EmptyDestination
        );
    }

    #[test]
    fn test_destination_is_trimmed() {
        let journey = JourneySession::start("  Office  ", Utc::now(), origin()).unwrap();
        assert_eq!(journey.destination, "Office");
        assert!(journey.checkpoints.is_empty());
    }

    #[test]
    fn test_elapsed_never_negative() {
        let now = Utc::now();
        let journey = JourneySession::start("Office", now, origin()).unwrap();
        let before_start = now - Duration::seconds(30);
        assert_eq!(journey.elapsed(before_start), Duration::zero());
        assert_eq!(journey.simulated_distance_km(before_start), 0.0);
    }

    #[test]
    fn test_distance_follows_nominal_speed() {
        let now = Utc::now();
        let journey = JourneySession::start("Office", now, origin()).unwrap();

        let after_ten_minutes = now + Duration::minutes(10);
        assert!((journey.simulated_distance_km(after_ten_minutes) - 5.0).abs() < 1e-9);

        // Monotonic in elapsed time.
        let after_twenty = now + Duration::minutes(20);
        assert!(
            journey.simulated_distance_km(after_twenty)
                > journey.simulated_distance_km(after_ten_minutes)
        );
    }

    #[test]
    fn test_stats_shape() {
        let now = Utc::now();
        let journey = JourneySession::start("Office", now, origin()).unwrap();
        let stats = journey.stats(now + Duration::seconds(90), 12, 0);
        assert_eq!(stats.elapsed_secs, 90);
        assert!((stats.distance_km - 0.75).abs() < 1e-9);
        assert_eq!(stats.safety_score, 100);
    }

    #[test]
    fn test_checkpoints_come_from_fixed_set() {
        let now = Utc::now();
        let mut journey = JourneySession::start("Office", now, origin()).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for i in 0..1000 {
            journey.maybe_checkpoint(now + Duration::seconds(i), &mut rng);
        }

        // Roughly 5% of 1000 ticks; a wide band keeps the seed irrelevant.
        let hits = journey.checkpoints.len();
        assert!(hits > 10 && hits < 120, "unexpected hit count {hits}");
        assert!(journey
            .checkpoints
            .iter()
            .all(|cp| CHECKPOINT_NAMES.contains(&cp.name.as_str())));
    }
}
