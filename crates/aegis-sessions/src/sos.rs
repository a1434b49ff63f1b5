//! SOS countdown state machine
//!
//! `Idle → Counting(10) → {Confirmed | Cancelled} → Idle`. The machine
//! yields the confirmation outcome exactly once, when the counter reaches
//! zero, then resets itself so a new trigger can begin.

use chrono::{DateTime, Utc};

use crate::error::SessionError;
use crate::Result;

/// Seconds the user has to cancel before the alert fires.
pub const COUNTDOWN_START: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Counting {
        remaining: u32,
        started_at: DateTime<Utc>,
    },
}

/// Outcome of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SosTick {
    /// Still counting; remaining seconds.
    Counting(u32),
    /// The counter reached zero. Yielded exactly once per countdown.
    Confirmed,
    /// No countdown is running.
    Inactive,
}

#[derive(Debug)]
pub struct SosCountdown {
    state: State,
    start: u32,
}

impl SosCountdown {
    pub fn new() -> Self {
        Self::with_start(COUNTDOWN_START)
    }

    pub fn with_start(start: u32) -> Self {
        Self {
            state: State::Idle,
            start,
        }
    }

    /// Begin the countdown. Valid only from idle.
    pub fn trigger(&mut self, now: DateTime<Utc>) -> Result<u32> {
        match self.state {
            State::Idle => {
                self.state = State::Counting {
                    remaining: self.start,
                    started_at: now,
                };
                Ok(self.start)
            }
            State::Counting { .. } => Err(SessionError::CountdownActive),
        }
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> SosTick {
        match self.state {
            State::Idle => SosTick::Inactive,
            State::Counting { remaining, started_at } => {
                let remaining = remaining.saturating_sub(1);
                if remaining == 0 {
                    self.state = State::Idle;
                    SosTick::Confirmed
                } else {
                    self.state = State::Counting {
                        remaining,
                        started_at,
                    };
                    SosTick::Counting(remaining)
                }
            }
        }
    }

    /// Abort the countdown. Valid only while counting.
    pub fn cancel(&mut self) -> Result<()> {
        match self.state {
            State::Counting { .. } => {
                self.state = State::Idle;
                Ok(())
            }
            State::Idle => Err(SessionError::NoCountdown),
        }
    }

    pub fn is_counting(&self) -> bool {
        matches!(self.state, State::Counting { .. })
    }

    /// Remaining seconds while counting.
    pub fn remaining(&self) -> Option<u32> {
        match self.state {
            State::Counting { remaining, .. } => Some(remaining),
            State::Idle => None,
        }
    }

    /// When the running countdown was triggered.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        match self.state {
            State::Counting { started_at, .. } => Some(started_at),
            State::Idle => None,
        }
    }
}

impl Default for SosCountdown {
    fn default() -> Self {
        Self::new()
    }
}
