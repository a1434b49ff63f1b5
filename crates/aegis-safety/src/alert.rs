//! SOS submission
//!
//! The alert POST is fire-and-forget: the session lifecycle never waits on
//! it, and failures are logged and recorded in the degraded flag rather
//! than surfaced to the user.

use serde::Serialize;
use std::sync::Arc;

use aegis_location::StampedCoordinate;

use crate::nearby::SafetyApi;
use crate::Result;
use crate::SafetyError;

/// Body of `POST /api/sos/send`.
#[derive(Debug, Clone, Serialize)]
pub struct SosAlert {
    pub location: StampedCoordinate,
    pub message: String,
}

/// Outbound channel for SOS alerts. `dispatch` must not block the caller.
pub trait AlertTransport: Send + Sync {
    fn dispatch(&self, alert: SosAlert);
}

impl SafetyApi {
    /// Submit an SOS alert and wait for the backend verdict.
    pub async fn send_sos(&self, alert: &SosAlert) -> Result<()> {
        let url = self.base().join("api/sos/send")?;

        #[derive(serde::Deserialize)]
        struct Verdict {
            success: bool,
        }

        let verdict: Verdict = self
            .http()
            .post(url)
            .json(alert)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !verdict.success {
            return Err(SafetyError::Rejected);
        }

        Ok(())
    }
}

/// [`AlertTransport`] that spawns the HTTP submission onto the runtime.
pub struct HttpAlertTransport {
    api: Arc<SafetyApi>,
}

impl HttpAlertTransport {
    pub fn new(api: Arc<SafetyApi>) -> Self {
        Self { api }
    }
}

impl AlertTransport for HttpAlertTransport {
    fn dispatch(&self, alert: SosAlert) {
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            match api.send_sos(&alert).await {
                Ok(()) => {
                    api.clear_degraded();
                    tracing::info!("SOS alert submitted");
                }
                Err(error) => {
                    // The user already saw the success notice; this only
                    // marks the client degraded.
                    api.mark_degraded();
                    tracing::error!(%error, "SOS submission failed");
                }
            }
        });
    }
}
