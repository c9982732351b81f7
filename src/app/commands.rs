//! Inbound commands to the panel, and operator input parsing.
//!
//! The console turns raw menu input into a [`MenuChoice`] and then into a
//! [`PanelCommand`] that the [`PanelController`](super::service::PanelController)
//! executes.  Malformed input is rejected here, before it reaches the core.

use core::str::FromStr;

use crate::error::{PanelError, Result};
use crate::sensors::SensorId;

/// Commands that the operator surface can send into the panel core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelCommand {
    /// Evaluate a reading for `sensor_id`.
    SubmitReading { sensor_id: SensorId, value: f64 },

    /// Simulate loss of the main supply.
    ReportPowerFailure,

    /// Simulate return of the main supply.
    RestorePower,
}

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SubmitReading,
    PowerFailure,
    RestorePower,
    ListSensors,
    Quit,
}

impl MenuChoice {
    /// `(key, label)` pairs in display order.
    pub const ENTRIES: [(&'static str, &'static str); 5] = [
        ("1", "Simulate sensor reading"),
        ("2", "Simulate main power failure"),
        ("3", "Restore main power"),
        ("4", "List sensors"),
        ("0", "Quit"),
    ];
}

impl FromStr for MenuChoice {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(Self::SubmitReading),
            "2" => Ok(Self::PowerFailure),
            "3" => Ok(Self::RestorePower),
            "4" => Ok(Self::ListSensors),
            "0" => Ok(Self::Quit),
            _ => Err(PanelError::InvalidInput("option")),
        }
    }
}

pub fn parse_sensor_id(input: &str) -> Result<SensorId> {
    input
        .trim()
        .parse()
        .map_err(|_| PanelError::InvalidInput("sensor ID"))
}

/// Parse a reading value.  NaN and infinities are rejected.
pub fn parse_reading_value(input: &str) -> Result<f64> {
    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(PanelError::InvalidInput("value")),
    }
}

/// Operator answer to the manual confirmation prompt.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    )
}
