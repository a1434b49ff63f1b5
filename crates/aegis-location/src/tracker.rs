//! Single-fix location tracker
//!
//! Caches the most recent geolocation fix reported by the frontend.
//! Every read falls back to [`FALLBACK_COORDINATE`] when no fix exists.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::fix::{Coordinate, StampedCoordinate, FALLBACK_COORDINATE};

#[derive(Clone, Default)]
pub struct LocationTracker {
    fix: Arc<RwLock<Option<Coordinate>>>,
}

impl LocationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful fix.
    pub fn record_fix(&self, coordinate: Coordinate) {
        tracing::debug!(lat = coordinate.lat, lng = coordinate.lng, "Recorded location fix");
        *self.fix.write() = Some(coordinate);
    }

    /// Record that the geolocation source failed. The fallback coordinate
    /// becomes the current fix so downstream consumers keep working.
    pub fn mark_unavailable(&self) -> Coordinate {
        tracing::warn!("Geolocation unavailable, using fallback coordinate");
        *self.fix.write() = Some(FALLBACK_COORDINATE);
        FALLBACK_COORDINATE
    }

    pub fn has_fix(&self) -> bool {
        self.fix.read().is_some()
    }

    /// The current coordinate, or the fallback when no fix was recorded.
    pub fn current(&self) -> Coordinate {
        self.fix.read().unwrap_or(FALLBACK_COORDINATE)
    }

    /// The current coordinate stamped with the given moment.
    pub fn stamped(&self, at: DateTime<Utc>) -> StampedCoordinate {
        self.current().stamped(at)
    }
}
