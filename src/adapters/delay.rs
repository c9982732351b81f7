//! Verification delay adapters.
//!
//! - [`BlockingDelay`] parks the calling thread for the configured window
//!   (the panel's reference behaviour, 700 ms by default).
//! - [`NoDelay`] returns immediately; tests and scripted sessions use it.

use std::time::Duration;

use log::debug;

use crate::app::ports::VerificationDelay;
use crate::sensors::{Sensor, SensorReading};

/// Sleep-based confirmation window.
#[derive(Debug, Clone, Copy)]
pub struct BlockingDelay {
    window: Duration,
}

impl BlockingDelay {
    pub fn new(window: Duration) -> Self {
        Self { window }
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}

impl VerificationDelay for BlockingDelay {
    fn wait(&mut self, sensor: &Sensor, _reading: &SensorReading) {
        debug!("verifying sensor {} for {:?}", sensor.id, self.window);
        if !self.window.is_zero() {
            std::thread::sleep(self.window);
        }
    }
}

/// Zero-length confirmation window.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl VerificationDelay for NoDelay {
    fn wait(&mut self, _sensor: &Sensor, _reading: &SensorReading) {}
}
