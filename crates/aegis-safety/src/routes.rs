//! Placeholder route planning
//!
//! There is no routing engine. The planner validates the destination and
//! answers with a fixed set of simulated candidates for the UI to render.

use serde::Serialize;

use crate::Result;
use crate::SafetyError;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOption {
    pub name: String,
    pub eta_minutes: u32,
    pub distance_km: f64,
    pub safety_score: u8,
}

impl RouteOption {
    fn new(name: &str, eta_minutes: u32, distance_km: f64, safety_score: u8) -> Self {
        Self {
            name: name.to_string(),
            eta_minutes,
            distance_km,
            safety_score,
        }
    }
}

/// Simulated route candidates for a destination.
pub fn plan_routes(destination: &str) -> Result<Vec<RouteOption>> {
    if destination.trim().is_empty() {
        return Err(SafetyError::EmptyDestination);
    }

    Ok(vec![
        RouteOption::new("Safest Route", 25, 5.2, 95),
        RouteOption::new("Fastest Route", 18, 4.1, 78),
        RouteOption::new("Well-lit Route", 28, 5.8, 92),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_destination_rejected() {
        assert!(matches!(
            plan_routes("   "),
            Err(SafetyError::EmptyDestination)
        ));
    }

    #[test]
    fn test_candidates_are_fixed() {
        let routes = plan_routes("Office").unwrap();
        assert_eq!(routes.len(), 3);
        assert_eq!(routes[0].name, "Safest Route");
        assert_eq!(routes[0].safety_score, 95);
        assert_eq!(routes[1].eta_minutes, 18);
    }
}
