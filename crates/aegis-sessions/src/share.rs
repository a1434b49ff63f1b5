//! Location-share session
//!
//! A bounded or unbounded broadcast of the current location. Duration 0
//! means "until stopped": no end time, no auto-expiry.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::SessionError;
use crate::Result;

/// Durations the UI offers, in minutes. 0 is "until you arrive".
pub const SHARE_DURATION_CHOICES: [u32; 4] = [15, 30, 60, 0];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareSession {
    pub id: String,
    pub duration_minutes: u32,
    pub started_at: DateTime<Utc>,
    /// `None` for an unbounded share.
    pub end_time: Option<DateTime<Utc>>,
}

impl ShareSession {
    pub fn start(duration_minutes: u32, now: DateTime<Utc>) -> Self {
        let end_time = if duration_minutes == 0 {
            None
        } else {
            Some(now + Duration::minutes(i64::from(duration_minutes)))
        };

        Self {
            id: Uuid::new_v4().to_string(),
            duration_minutes,
            started_at: now,
            end_time,
        }
    }

    /// Whether the bounded share has run past its end time.
    pub fn expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.end_time, Some(end) if now > end)
    }
}

/// Validate a duration against the offered choices.
pub fn validate_duration(minutes: u32) -> Result<u32> {
    if SHARE_DURATION_CHOICES.contains(&minutes) {
        Ok(minutes)
    } else {
        Err(SessionError::InvalidShareDuration(minutes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_end_time() {
        let now = Utc::now();
        for minutes in [15, 30, 60] {
            let session = ShareSession::start(minutes, now);
            assert_eq!(
                session.end_time,
                Some(now + Duration::minutes(i64::from(minutes)))
            );
            assert!(!session.expired(now));
            assert!(!session.expired(now + Duration::minutes(i64::from(minutes))));
            assert!(session.expired(now + Duration::minutes(i64::from(minutes)) + Duration::seconds(1)));
        }
    }

    #[test]
    fn test_unbounded_never_expires() {
        let now = Utc::now();
        let session = ShareSession::start(0, now);
        assert_eq!(session.end_time, None);
        assert!(!session.expired(now + Duration::days(365)));
    }

    #[test]
    fn test_duration_choices() {
        for minutes in SHARE_DURATION_CHOICES {
            assert_eq!(validate_duration(minutes).unwrap(), minutes);
        }
        assert_eq!(
            validate_duration(45).unwrap_err(),
            SessionError::InvalidShareDuration(45)
        );
    }
}
