//! Aegis Safety
//!
//! The simulated safety layer: score estimation, nearby-help lookup with
//! sample-data fallback, fire-and-forget SOS submission, and placeholder
//! route planning. None of this performs real safety computation — the
//! estimator and planner are deliberate simulations, and the HTTP client
//! degrades to fixed sample data rather than erroring.

mod alert;
mod error;
mod nearby;
mod routes;
mod score;

pub use alert::{AlertTransport, HttpAlertTransport, SosAlert};
pub use error::SafetyError;
pub use nearby::{sample_places, NearbyPlace, PlaceKind, SafetyApi};
pub use routes::{plan_routes, RouteOption};
pub use score::{assess, journey_score, ColorTier, FactorSeverity, RiskFactor, SafetyAssessment};

pub type Result<T> = std::result::Result<T, SafetyError>;
