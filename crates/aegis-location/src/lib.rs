//! Aegis Location
//!
//! Location types shared across the workspace and the single-fix tracker.
//! The geolocation fix itself is acquired by the frontend; the core only
//! caches the most recent fix and falls back to a fixed default when the
//! source is unavailable.

mod fix;
mod tracker;

pub use fix::{Coordinate, FixRequest, StampedCoordinate, FALLBACK_COORDINATE};
pub use tracker::LocationTracker;
