//! Simulated safety scoring
//!
//! Scores are pure functions of the local hour and caller-supplied random
//! draws, so every consumer decides where its randomness comes from. Hour
//! bands are deliberate and disjoint: early morning `[0,6)` is the high-risk
//! band and is checked first, late night `[22,24)` is the caution band.

use serde::Serialize;

pub const BASE_SCORE: i32 = 100;

/// Threshold above which the low-traffic roll counts as a penalty.
pub const LOW_TRAFFIC_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTier {
    Safe,
    Caution,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorSeverity {
    Warning,
    Danger,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskFactor {
    pub severity: FactorSeverity,
    pub label: String,
}

impl RiskFactor {
    fn warning(label: &str) -> Self {
        Self {
            severity: FactorSeverity::Warning,
            label: label.to_string(),
        }
    }

    fn danger(label: &str) -> Self {
        Self {
            severity: FactorSeverity::Danger,
            label: label.to_string(),
        }
    }
}

/// Advisory dashboard assessment, recomputed once per location fix.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyAssessment {
    pub score: u8,
    pub status: String,
    pub color_tier: ColorTier,
    pub factors: Vec<RiskFactor>,
}

/// Assess the current surroundings from the local hour and a uniform
/// `[0,1)` roll standing in for local traffic conditions.
pub fn assess(local_hour: u32, low_traffic_roll: f64) -> SafetyAssessment {
    let mut score = BASE_SCORE;
    let mut factors = Vec::new();

    let (status, color_tier) = if local_hour < 6 {
        score -= 40;
        factors.push(RiskFactor::danger("Early Morning Risk"));
        ("High Risk: Early Morning", ColorTier::Danger)
    } else if local_hour >= 22 {
        score -= 30;
        factors.push(RiskFactor::warning("Late Night Travel"));
        ("Caution: Late Night", ColorTier::Caution)
    } else {
        ("Safe Zone", ColorTier::Safe)
    };

    if low_traffic_roll > LOW_TRAFFIC_THRESHOLD {
        score -= 10;
        factors.push(RiskFactor::warning("Low Traffic Area"));
    }

    SafetyAssessment {
        score: clamp_score(score),
        status: status.to_string(),
        color_tier,
        factors,
    }
}

/// Per-tick journey score: base 100, −20 in the late window
/// `[22,24) ∪ [0,5)`, plus a uniform jitter in `[-5, +4]`.
pub fn journey_score(local_hour: u32, jitter: i32) -> u8 {
    let mut score = BASE_SCORE;
    if local_hour >= 22 || local_hour < 5 {
        score -= 20;
    }
    clamp_score(score + jitter)
}

fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}
