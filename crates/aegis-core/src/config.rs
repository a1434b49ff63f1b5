//! App configuration

use serde::{Deserialize, Serialize};

use aegis_sessions::SessionConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the safety backend
    pub api_base: String,
    /// Identifier sent with every outbound event
    pub user_id: String,
    /// Police lookup radius, metres
    pub police_radius_m: u32,
    /// Hospital lookup radius, metres
    pub hospital_radius_m: u32,
}

impl Config {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            user_id: self.user_id.clone(),
            ..SessionConfig::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "http://127.0.0.1:3000".to_string(),
            user_id: "user123".to_string(),
            police_radius_m: 5000,
            hospital_radius_m: 10_000,
        }
    }
}
