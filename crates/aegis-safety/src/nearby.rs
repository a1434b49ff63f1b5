//! Nearby-help lookup
//!
//! Thin client for the safety backend. Lookup failures are never surfaced
//! to the caller: the client logs, flips its degraded flag, and answers
//! with fixed sample places positioned relative to the request center.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use url::Url;

use aegis_location::Coordinate;

use crate::error::SafetyError;
use crate::Result;

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceKind {
    Police,
    Hospital,
}

impl PlaceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PlaceKind::Police => "police",
            PlaceKind::Hospital => "hospital",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyPlace {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Distance from the request center, in kilometres.
    #[serde(rename = "distance")]
    pub distance_km: f64,
}

/// `{success, data}` envelope the backend wraps every response in.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    #[serde(default)]
    data: Option<T>,
}

/// Client for the safety backend endpoints.
pub struct SafetyApi {
    base: Url,
    http: reqwest::Client,
    degraded: AtomicBool,
}

impl SafetyApi {
    pub fn new(base: Url) -> Self {
        let http = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            base,
            http,
            degraded: AtomicBool::new(false),
        }
    }

    /// Whether the most recent backend call failed and a fallback or
    /// silent drop was used instead.
    pub fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::Relaxed)
    }

    fn set_degraded(&self, degraded: bool) {
        self.degraded.store(degraded, Ordering::Relaxed);
    }

    /// Look up nearby places, falling back to sample data on any failure.
    pub async fn nearby(
        &self,
        center: Coordinate,
        kind: PlaceKind,
        radius_m: u32,
    ) -> Vec<NearbyPlace> {
        match self.fetch_nearby(center, kind, radius_m).await {
            Ok(places) => {
                self.set_degraded(false);
                places
            }
            Err(error) => {
                tracing::warn!(%error, kind = kind.as_str(), "Nearby lookup failed, using sample data");
                self.set_degraded(true);
                sample_places(center, kind)
            }
        }
    }

    async fn fetch_nearby(
        &self,
        center: Coordinate,
        kind: PlaceKind,
        radius_m: u32,
    ) -> Result<Vec<NearbyPlace>> {
        let mut url = self.base.join("api/safety/nearby")?;
        url.query_pairs_mut()
            .append_pair("lat", &center.lat.to_string())
            .append_pair("lng", &center.lng.to_string())
            .append_pair("type", kind.as_str())
            .append_pair("radius", &radius_m.to_string());

        let envelope: Envelope<Vec<NearbyPlace>> = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !envelope.success {
            return Err(SafetyError::Rejected);
        }

        Ok(envelope.data.unwrap_or_default())
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn base(&self) -> &Url {
        &self.base
    }

    pub(crate) fn mark_degraded(&self) {
        self.set_degraded(true);
    }

    pub(crate) fn clear_degraded(&self) {
        self.set_degraded(false);
    }
}

/// Fixed sample places, positioned relative to the request center.
pub fn sample_places(center: Coordinate, kind: PlaceKind) -> Vec<NearbyPlace> {
    match kind {
        PlaceKind::Police => vec![
            NearbyPlace {
                name: "Central Police Station".to_string(),
                lat: center.lat + 0.01,
                lng: center.lng + 0.01,
                address: None,
                distance_km: 1.2,
            },
            NearbyPlace {
                name: "North District Station".to_string(),
                lat: center.lat - 0.02,
                lng: center.lng + 0.015,
                address: None,
                distance_km: 2.5,
            },
        ],
        PlaceKind::Hospital => vec![NearbyPlace {
            name: "City General Hospital".to_string(),
            lat: center.lat + 0.02,
            lng: center.lng - 0.01,
            address: None,
            distance_km: 2.5,
        }],
    }
}
