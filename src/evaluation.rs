//! Reading evaluation and alarm confirmation.
//!
//! The engine runs once per reading:
//!
//! 1. Emit `ReadingReceived`.
//! 2. Look the sensor up.  Unknown id: log the lookup error, emit
//!    `UnknownSensor` and stop.
//! 3. `value >= threshold` is false (NaN included): emit `ReadingNormal`
//!    and stop.
//! 4. `value >= threshold`: emit `ThresholdExceeded`, wait on the
//!    [`VerificationDelay`], then confirm.
//! 5. Confirmation emits `AlarmConfirmed`, then strobes, siren and the
//!    monitoring notification (carrying the current power state), in
//!    that order, all targeting the registered sensor's zone.
//!
//! Nothing here returns an error.  Failures are reported as events and the
//! caller gets an [`Evaluation`] outcome.

use log::{debug, warn};

use crate::app::events::PanelEvent;
use crate::app::ports::{EventSink, VerificationDelay};
use crate::notifier::Notifier;
use crate::power::EnergyManager;
use crate::sensors::{Sensor, SensorId, SensorReading, SensorRegistry};

/// Result of evaluating a single reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// Below threshold; nothing was raised.
    Normal,
    /// Threshold met, verification elapsed, outputs fired.
    AlarmConfirmed,
    /// The reading referenced an unregistered id and was dropped.
    UnknownSensor(SensorId),
}

/// Running counters kept by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationStats {
    pub readings: u64,
    pub normal: u64,
    pub alarms_confirmed: u64,
    pub unknown_rejected: u64,
}

/// Collaborators the engine reads from or drives during one evaluation.
pub struct EvalContext<'a, D, S> {
    pub registry: &'a SensorRegistry,
    pub energy: &'a EnergyManager,
    pub notifier: &'a Notifier,
    pub delay: &'a mut D,
    pub sink: &'a mut S,
}

#[derive(Debug, Default)]
pub struct EvaluationEngine {
    stats: EvaluationStats,
}

impl EvaluationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn evaluate<D, S>(
        &mut self,
        reading: &SensorReading,
        ctx: EvalContext<'_, D, S>,
    ) -> Evaluation
    where
        D: VerificationDelay,
        S: EventSink,
    {
        self.stats.readings += 1;
        ctx.sink.emit(&PanelEvent::ReadingReceived {
            sensor_id: reading.sensor_id,
            value: reading.value,
        });

        let sensor = match ctx.registry.lookup(reading.sensor_id) {
            Ok(sensor) => sensor,
            Err(e) => {
                warn!("evaluation: {e}");
                self.stats.unknown_rejected += 1;
                ctx.sink.emit(&PanelEvent::UnknownSensor(reading.sensor_id));
                return Evaluation::UnknownSensor(reading.sensor_id);
            }
        };

        // NaN compares false and is treated as a normal reading.
        if reading.value >= sensor.threshold {
            ctx.sink.emit(&PanelEvent::ThresholdExceeded {
                sensor_id: sensor.id,
                value: reading.value,
                threshold: sensor.threshold,
            });
            debug!("evaluation: verifying sensor {}", sensor.id);
            ctx.delay.wait(sensor, reading);

            self.confirm(sensor, reading, ctx.energy, ctx.notifier, ctx.sink);
            Evaluation::AlarmConfirmed
        } else {
            self.stats.normal += 1;
            ctx.sink.emit(&PanelEvent::ReadingNormal {
                sensor_id: sensor.id,
                value: reading.value,
            });
            Evaluation::Normal
        }
    }

    pub fn stats(&self) -> EvaluationStats {
        self.stats
    }

    fn confirm(
        &mut self,
        sensor: &Sensor,
        reading: &SensorReading,
        energy: &EnergyManager,
        notifier: &Notifier,
        sink: &mut impl EventSink,
    ) {
        self.stats.alarms_confirmed += 1;
        sink.emit(&PanelEvent::AlarmConfirmed(sensor.id));
        notifier.activate_strobes(sensor.zone, sink);
        notifier.activate_siren(sensor.zone, sink);
        notifier.notify_monitoring(
            sensor.id,
            &sensor.kind,
            reading.value,
            energy.current_state(),
            sink,
        );
    }
}
