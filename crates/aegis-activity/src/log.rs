//! Activity entries and the shared log

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use aegis_location::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Journey,
    Checkin,
    Sos,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Unique identifier
    pub id: String,
    pub kind: ActivityKind,
    pub description: String,
    /// Where the activity happened
    pub location: Coordinate,
    pub timestamp: DateTime<Utc>,
}

/// Shared append-only activity log.
#[derive(Clone, Default)]
pub struct ActivityLog {
    entries: Arc<RwLock<Vec<ActivityEntry>>>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(
        &self,
        kind: ActivityKind,
        description: impl Into<String>,
        location: Coordinate,
        timestamp: DateTime<Utc>,
    ) -> ActivityEntry {
        let entry = ActivityEntry {
            id: Uuid::new_v4().to_string(),
            kind,
            description: description.into(),
            location,
            timestamp,
        };

        tracing::debug!(kind = ?entry.kind, description = %entry.description, "Logged activity");

        self.entries.write().push(entry.clone());
        entry
    }

    /// All entries, newest first.
    pub fn entries(&self) -> Vec<ActivityEntry> {
        let mut entries = self.entries.read().clone();
        entries.reverse();
        entries
    }

    /// Entries of one kind, newest first.
    pub fn filtered(&self, kind: ActivityKind) -> Vec<ActivityEntry> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.kind == kind)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord() -> Coordinate {
        Coordinate::new(40.7128, -74.0060)
    }

    #[test]
    fn test_append_and_order() {
        let log = ActivityLog::new();
        log.append(ActivityKind::Journey, "Started journey to Office", coord(), Utc::now());
        log.append(ActivityKind::Sos, "Emergency SOS activated", coord(), Utc::now());

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        // Newest first
        assert_eq!(entries[0].kind, ActivityKind::Sos);
        assert_eq!(entries[1].kind, ActivityKind::Journey);
    }

    #[test]
    fn test_filter_by_kind() {
        let log = ActivityLog::new();
        log.append(ActivityKind::Journey, "Started journey", coord(), Utc::now());
        log.append(ActivityKind::Checkin, "Started location sharing", coord(), Utc::now());
        log.append(ActivityKind::Journey, "Completed journey", coord(), Utc::now());

        let journeys = log.filtered(ActivityKind::Journey);
        assert_eq!(journeys.len(), 2);
        assert!(journeys.iter().all(|e| e.kind == ActivityKind::Journey));
        assert_eq!(log.filtered(ActivityKind::Sos).len(), 0);
    }

    #[test]
    fn test_clones_share_entries() {
        let log = ActivityLog::new();
        let view = log.clone();
        log.append(ActivityKind::Checkin, "Arrived safely", coord(), Utc::now());
        assert_eq!(view.len(), 1);
    }
}
