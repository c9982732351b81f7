//! Outbound panel events.
//!
//! Every component emits these through the
//! [`EventSink`](super::ports::EventSink) port instead of writing log lines
//! itself.  Adapters on the other side decide what to do with them: append
//! to the event log file, record them in a test, forward them elsewhere.

use core::fmt;

use crate::power::PowerState;
use crate::sensors::{Sensor, SensorId, Zone};

/// Severity column of an event log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Error => "ERROR",
        }
    }
}

/// Category column of an event log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Config,
    Sensor,
    Reading,
    Alarm,
    Notification,
    Output,
    Energy,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Config => "CONFIG",
            Self::Sensor => "SENSOR",
            Self::Reading => "READING",
            Self::Alarm => "ALARM",
            Self::Notification => "NOTIF",
            Self::Output => "OUTPUT",
            Self::Energy => "ENERGY",
        }
    }
}

/// Structured events emitted by the panel core.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    /// A sensor was added to the registry.
    SensorRegistered(Sensor),

    /// Registration rejected: the id is taken.
    DuplicateSensor(SensorId),

    /// A reading arrived for evaluation.
    ReadingReceived { sensor_id: SensorId, value: f64 },

    /// The reading names an id that is not registered.
    UnknownSensor(SensorId),

    /// The reading is below the sensor's threshold.
    ReadingNormal { sensor_id: SensorId, value: f64 },

    /// The reading met the threshold; verification has started.
    ThresholdExceeded {
        sensor_id: SensorId,
        value: f64,
        threshold: f64,
    },

    /// Verification finished and the alarm stands.
    AlarmConfirmed(SensorId),

    StrobesActivated(Zone),

    SirenActivated(Zone),

    /// Status report sent to the monitoring station.
    MonitoringNotified {
        sensor_id: SensorId,
        kind: String,
        value: f64,
        power: PowerState,
    },

    /// The energy manager switched (or re-asserted) its power source.
    PowerSwitched(PowerState),
}

impl PanelEvent {
    pub fn severity(&self) -> Severity {
        match self {
            Self::DuplicateSensor(_) | Self::UnknownSensor(_) => Severity::Error,
            _ => Severity::Info,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::SensorRegistered(_) => Category::Config,
            Self::DuplicateSensor(_)
            | Self::UnknownSensor(_)
            | Self::ReadingNormal { .. }
            | Self::ThresholdExceeded { .. } => Category::Sensor,
            Self::ReadingReceived { .. } => Category::Reading,
            Self::AlarmConfirmed(_) => Category::Alarm,
            Self::StrobesActivated(_) | Self::SirenActivated(_) => Category::Output,
            Self::MonitoringNotified { .. } => Category::Notification,
            Self::PowerSwitched(_) => Category::Energy,
        }
    }

    /// True for the three outputs of a confirmed alarm.
    pub fn is_alarm_output(&self) -> bool {
        matches!(
            self,
            Self::StrobesActivated(_) | Self::SirenActivated(_) | Self::MonitoringNotified { .. }
        )
    }
}

impl fmt::Display for PanelEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SensorRegistered(s) => write!(f, "Registered {s}"),
            Self::DuplicateSensor(id) => write!(f, "Duplicate sensor ID={id}"),
            Self::ReadingReceived { sensor_id, value } => {
                write!(f, "Reading ID={sensor_id} Value={value}")
            }
            Self::UnknownSensor(id) => write!(f, "No sensor with ID={id}"),
            Self::ReadingNormal { .. } => write!(f, "Normal reading."),
            Self::ThresholdExceeded { value, threshold, .. } => {
                write!(f, "Value {value} meets threshold {threshold}. Verifying...")
            }
            Self::AlarmConfirmed(id) => write!(f, "ALARM CONFIRMED for sensor {id}"),
            Self::StrobesActivated(zone) => write!(f, "Strobes activated in zone {zone}"),
            Self::SirenActivated(zone) => write!(f, "Siren activated in zone {zone}"),
            Self::MonitoringNotified {
                sensor_id,
                kind,
                value,
                power,
            } => write!(
                f,
                "Monitoring => Sensor={sensor_id}, Kind={kind}, Value={value}, Energy={power}"
            ),
            Self::PowerSwitched(PowerState::Backup) => write!(f, "Switched to BACKUP"),
            Self::PowerSwitched(PowerState::Primary) => write!(f, "PRIMARY power restored"),
        }
    }
}
