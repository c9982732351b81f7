//! Unified error type for the alarm panel.
//!
//! Every failure the panel knows about is non-fatal.  The core absorbs
//! them and reports them as [`PanelEvent`](crate::app::events::PanelEvent)s;
//! this enum exists so registry lookups, sinks and the operator console can
//! still hand a typed reason to whoever asks.
//!
//! All variants are `Copy` so they can be passed around without allocation.

use core::fmt;
use std::io;

use crate::sensors::SensorId;

// ---------------------------------------------------------------------------
// Top-level panel error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelError {
    /// A sensor with this id is already registered.
    DuplicateSensor(SensorId),
    /// A reading referenced an id that is not in the registry.
    UnknownSensor(SensorId),
    /// The log file could not be opened or written.
    LogSinkUnavailable(io::ErrorKind),
    /// Operator input was malformed.  The tag says which field.
    InvalidInput(&'static str),
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateSensor(id) => write!(f, "duplicate sensor ID={id}"),
            Self::UnknownSensor(id) => write!(f, "no sensor with ID={id}"),
            Self::LogSinkUnavailable(kind) => write!(f, "log sink unavailable: {kind}"),
            Self::InvalidInput(what) => write!(f, "invalid {what}"),
        }
    }
}

impl std::error::Error for PanelError {}

impl From<io::Error> for PanelError {
    fn from(e: io::Error) -> Self {
        Self::LogSinkUnavailable(e.kind())
    }
}

/// Panel-wide `Result` alias.
pub type Result<T> = core::result::Result<T, PanelError>;
