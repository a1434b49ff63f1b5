//! Aegis Activity Log
//!
//! Append-only record of safety events (journeys, check-ins, SOS alerts).
//! The log is advisory and kept in memory only; it is cleared when the
//! app exits.

mod log;

pub use log::{ActivityEntry, ActivityKind, ActivityLog};
