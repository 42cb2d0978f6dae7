//! User settings stored as settings.json in the app data directory

use crate::constants::*;
use crate::types::View;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // View
    pub last_view: View,

    // Endpoints
    pub countries_url: String,
    pub backend_url: Option<String>,

    // Simulated latency
    pub submit_delay_ms: u64,
    pub search_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            last_view: View::Plan,
            countries_url: COUNTRIES_URL.to_string(),
            backend_url: None,
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            search_delay_ms: DEFAULT_SEARCH_DELAY_MS,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Apply environment overrides on top of the file values.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(ENV_COUNTRIES_URL).ok(),
            std::env::var(ENV_BACKEND_URL).ok(),
        )
    }

    fn with_overrides(
        mut self,
        countries_url: Option<String>,
        backend_url: Option<String>,
    ) -> Self {
        if let Some(url) = countries_url.filter(|u| !u.trim().is_empty()) {
            info!(url = %url, "Country source overridden from environment");
            self.countries_url = url;
        }
        if let Some(url) = backend_url.filter(|u| !u.trim().is_empty()) {
            info!(url = %url, "Backend overridden from environment");
            self.backend_url = Some(url);
        }
        self
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }
}
