//! Sensor catalogue types and the [`SensorRegistry`].
//!
//! A [`Sensor`] is created once at registration time and never mutated.
//! A [`SensorReading`] is built by the caller, consumed once by the
//! evaluation engine and then dropped.

pub mod registry;

use core::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub use registry::SensorRegistry;

/// Unique sensor key.  Signed because power notifications use `-1`.
pub type SensorId = i32;

/// Zone used to target strobe and siren activation.
pub type Zone = u32;

/// Id carried by synthetic notifications that do not come from a sensor.
pub const SYSTEM_SENSOR_ID: SensorId = -1;

/// Kind tag used for readings that reference an unregistered id.
pub const UNKNOWN_KIND: &str = "Unknown";

/// A registered device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub id: SensorId,
    /// Category tag, e.g. "Smoke" or "Temp".
    pub kind: String,
    pub zone: Zone,
    /// Readings at or above this value raise an alarm.
    pub threshold: f64,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Sensor {
    pub fn new(id: SensorId, kind: impl Into<String>, zone: Zone, threshold: f64) -> Self {
        Self {
            id,
            kind: kind.into(),
            zone,
            threshold,
            active: true,
        }
    }

    /// `threshold <= value < 2 * threshold`: the band in which the operator
    /// console offers a manual double-confirmation.
    pub fn is_borderline(&self, value: f64) -> bool {
        value >= self.threshold && value < 2.0 * self.threshold
    }
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sensor[ID={}, Kind={}, Zone={}, Threshold={}]",
            self.id, self.kind, self.zone, self.threshold
        )
    }
}

/// A timestamped value reported for a sensor id.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    pub sensor_id: SensorId,
    pub kind: String,
    pub value: f64,
    pub timestamp: DateTime<Local>,
}

impl SensorReading {
    /// Build a reading stamped with the current local time.
    pub fn new(sensor_id: SensorId, kind: impl Into<String>, value: f64) -> Self {
        Self {
            sensor_id,
            kind: kind.into(),
            value,
            timestamp: Local::now(),
        }
    }
}
