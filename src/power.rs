//! Main / backup power state machine.
//!
//! ```text
//!                 report_failure()
//!   ┌─────────┐ ──────────────────▶ ┌────────┐
//!   │ PRIMARY │                     │ BACKUP │
//!   └─────────┘ ◀────────────────── └────────┘
//!                    restore()
//! ```
//!
//! Both transitions are idempotent and every call, including a repeat,
//! logs the switch and sends a synthetic monitoring notification
//! `(-1, "ENERGY", 0, state)`.  There is no terminal state.

use core::fmt;

use log::info;
use serde::{Deserialize, Serialize};

use crate::app::events::PanelEvent;
use crate::app::ports::EventSink;
use crate::notifier::Notifier;
use crate::sensors::SYSTEM_SENSOR_ID;

/// Kind tag used on power notifications.
pub const ENERGY_KIND: &str = "ENERGY";

/// Simulated energy source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PowerState {
    #[default]
    Primary,
    Backup,
}

impl PowerState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "PRIMARY",
            Self::Backup => "BACKUP",
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owns the process-wide [`PowerState`].
#[derive(Debug)]
pub struct EnergyManager {
    notifier: Notifier,
    state: PowerState,
    /// Switch requests served since startup, repeats included.
    transitions: u64,
}

impl EnergyManager {
    /// Start on primary power.
    pub fn new(notifier: Notifier) -> Self {
        Self {
            notifier,
            state: PowerState::Primary,
            transitions: 0,
        }
    }

    /// Main supply lost: switch to backup.
    pub fn report_failure(&mut self, sink: &mut impl EventSink) {
        self.switch_to(PowerState::Backup, sink);
    }

    /// Main supply back: switch to primary.
    pub fn restore(&mut self, sink: &mut impl EventSink) {
        self.switch_to(PowerState::Primary, sink);
    }

    pub fn current_state(&self) -> PowerState {
        self.state
    }

    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    fn switch_to(&mut self, next: PowerState, sink: &mut impl EventSink) {
        info!("energy: {} -> {}", self.state, next);
        self.state = next;
        self.transitions += 1;
        sink.emit(&PanelEvent::PowerSwitched(next));
        self.notifier
            .notify_monitoring(SYSTEM_SENSOR_ID, ENERGY_KIND, 0.0, next, sink);
    }
}
