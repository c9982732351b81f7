//! Port traits — the boundary between the panel core and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ PanelController (domain)
//! ```
//!
//! Driven adapters (event log, verification timer, config storage) implement
//! these traits.  The [`PanelController`](super::service::PanelController)
//! and the components it owns consume them through generics, so the core
//! never touches files, clocks or the console directly.

use crate::config::PanelConfig;
use crate::sensors::{Sensor, SensorReading};

use super::events::PanelEvent;

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The core emits structured [`PanelEvent`]s through this port.
///
/// Implementations must not fail towards the caller: a sink that cannot
/// write reports the problem on its own fallback channel and returns.
pub trait EventSink {
    fn emit(&mut self, event: &PanelEvent);
}

/// In-memory recording sink, handy for tests and for replaying a session.
impl EventSink for Vec<PanelEvent> {
    fn emit(&mut self, event: &PanelEvent) {
        self.push(event.clone());
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: &PanelEvent) {
        (**self).emit(event);
    }
}

// ───────────────────────────────────────────────────────────────
// Verification delay port (driven adapter: domain → timer)
// ───────────────────────────────────────────────────────────────

/// Confirmation window between "threshold exceeded" and "alarm confirmed".
///
/// `wait` returns when the window has elapsed.  There is no way to cancel
/// a confirmation: the engine confirms unconditionally afterwards.
pub trait VerificationDelay {
    fn wait(&mut self, sensor: &Sensor, reading: &SensorReading);
}

impl<F> VerificationDelay for F
where
    F: FnMut(&Sensor, &SensorReading),
{
    fn wait(&mut self, sensor: &Sensor, reading: &SensorReading) {
        self(sensor, reading);
    }
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: domain ↔ persistent config)
// ───────────────────────────────────────────────────────────────

/// Loads and persists panel configuration.
///
/// Implementations MUST validate before persisting and reject invalid
/// values with [`ConfigError::ValidationFailed`] rather than clamping them.
pub trait ConfigPort {
    /// Returns [`PanelConfig::default()`] if no stored config exists.
    fn load(&self) -> Result<PanelConfig, ConfigError>;

    fn save(&self, config: &PanelConfig) -> Result<(), ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.  An absent config is not an
/// error; adapters fall back to [`PanelConfig::default()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The stored document is not a readable panel config.
    Corrupted,
    /// A field is out of range, e.g. a non-finite threshold.
    ValidationFailed(&'static str),
    /// The file exists but could not be read or written.
    Io(std::io::ErrorKind),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Corrupted => write!(f, "panel config is not valid JSON"),
            Self::ValidationFailed(msg) => write!(f, "panel config rejected: {msg}"),
            Self::Io(kind) => write!(f, "panel config file: {kind}"),
        }
    }
}

impl std::error::Error for ConfigError {}
