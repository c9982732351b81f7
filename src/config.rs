//! Panel configuration parameters
//!
//! Where the event log goes, how long the verification window lasts, and
//! which sensors are registered at startup.  Values can be loaded from a
//! JSON file and overridden from the command line.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;
use crate::sensors::Sensor;

/// Upper bound on the verification window.
pub const MAX_VERIFICATION_DELAY_MS: u64 = 60_000;

/// Core panel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Append-only event log file
    pub log_path: PathBuf,
    /// Pause between "threshold exceeded" and "alarm confirmed" (milliseconds)
    pub verification_delay_ms: u64,
    /// Sensors registered once at startup
    pub sensors: Vec<Sensor>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("panel_events.log"),
            verification_delay_ms: 700,
            sensors: default_sensors(),
        }
    }
}

impl PanelConfig {
    pub fn verification_delay(&self) -> Duration {
        Duration::from_millis(self.verification_delay_ms)
    }

    /// Range-check every field.  Duplicate sensor ids are allowed here;
    /// the registry rejects the later ones at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.verification_delay_ms > MAX_VERIFICATION_DELAY_MS {
            return Err(ConfigError::ValidationFailed(
                "verification_delay_ms must be at most 60000",
            ));
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed("log_path must not be empty"));
        }
        for sensor in &self.sensors {
            if !sensor.threshold.is_finite() {
                return Err(ConfigError::ValidationFailed(
                    "sensor threshold must be a finite number",
                ));
            }
            if sensor.kind.trim().is_empty() {
                return Err(ConfigError::ValidationFailed("sensor kind must not be empty"));
            }
        }
        Ok(())
    }
}

/// Bootstrap sensor list.
pub fn default_sensors() -> Vec<Sensor> {
    vec![
        Sensor::new(101, "Smoke", 1, 50.0),
        Sensor::new(102, "Temp", 1, 70.0),
        Sensor::new(201, "Smoke", 2, 50.0),
        Sensor::new(999, "Manual", 1, 1.0),
    ]
}
