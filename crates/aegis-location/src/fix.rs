//! Coordinate and fix-request types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default coordinate used when no geolocation fix is available.
pub const FALLBACK_COORDINATE: Coordinate = Coordinate {
    lat: 40.7128,
    lng: -74.0060,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Attach a timestamp, producing the wire shape of a location payload.
    pub fn stamped(self, at: DateTime<Utc>) -> StampedCoordinate {
        StampedCoordinate {
            lat: self.lat,
            lng: self.lng,
            timestamp: at,
        }
    }
}

/// A coordinate with the moment it was captured (`{lat, lng, timestamp}`
/// on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StampedCoordinate {
    pub lat: f64,
    pub lng: f64,
    pub timestamp: DateTime<Utc>,
}

impl StampedCoordinate {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// Options the frontend passes to the geolocation source for the
/// single-shot fix.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixRequest {
    pub enable_high_accuracy: bool,
    /// Milliseconds to wait for a fix before failing.
    pub timeout_ms: u64,
    /// Maximum acceptable age of a cached fix, in milliseconds.
    pub maximum_age_ms: u64,
}

impl Default for FixRequest {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout_ms: 10_000,
            maximum_age_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamped_keeps_coordinate() {
        let at = Utc::now();
        let stamped = Coordinate::new(51.5, -0.12).stamped(at);
        assert_eq!(stamped.coordinate(), Coordinate::new(51.5, -0.12));
        assert_eq!(stamped.timestamp, at);
    }

    #[test]
    fn test_fix_request_defaults() {
        let request = FixRequest::default();
        assert!(request.enable_high_accuracy);
        assert_eq!(request.timeout_ms, 10_000);
        assert_eq!(request.maximum_age_ms, 0);
    }
}
