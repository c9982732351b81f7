//! Panel controller — the composition root.
//!
//! [`PanelController`] owns the notifier, the energy manager, the sensor
//! registry and the evaluation engine, plus the two injected ports.  It is
//! the only object external callers talk to.
//!
//! ```text
//!   caller ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!              │        PanelController        │
//!              │ Registry · Engine · Energy    │ ──▶ VerificationDelay
//!              └──────────────────────────────┘
//! ```

use log::{info, warn};

use crate::config::PanelConfig;
use crate::evaluation::{EvalContext, Evaluation, EvaluationEngine, EvaluationStats};
use crate::notifier::Notifier;
use crate::power::{EnergyManager, PowerState};
use crate::sensors::{Sensor, SensorId, SensorReading, SensorRegistry, UNKNOWN_KIND};

use super::commands::PanelCommand;
use super::events::PanelEvent;
use super::ports::{EventSink, VerificationDelay};

// ───────────────────────────────────────────────────────────────
// PanelController
// ───────────────────────────────────────────────────────────────

pub struct PanelController<S, D> {
    notifier: Notifier,
    energy: EnergyManager,
    registry: SensorRegistry,
    engine: EvaluationEngine,
    sink: S,
    delay: D,
}

impl<S, D> PanelController<S, D>
where
    S: EventSink,
    D: VerificationDelay,
{
    /// Empty panel on primary power.
    pub fn new(sink: S, delay: D) -> Self {
        let notifier = Notifier::new();
        Self {
            notifier,
            energy: EnergyManager::new(notifier),
            registry: SensorRegistry::new(),
            engine: EvaluationEngine::new(),
            sink,
            delay,
        }
    }

    /// Build a panel and register the configured sensors.
    pub fn from_config(config: &PanelConfig, sink: S, delay: D) -> Self {
        let mut panel = Self::new(sink, delay);
        for sensor in &config.sensors {
            panel.register_sensor(sensor.clone());
        }
        info!("panel ready with {} sensor(s)", panel.registry.len());
        panel
    }

    // ── Operations ────────────────────────────────────────────

    /// Register a sensor.  Returns `false` (and logs) on a duplicate id.
    pub fn register_sensor(&mut self, sensor: Sensor) -> bool {
        let announced = sensor.clone();
        match self.registry.register(sensor) {
            Ok(()) => {
                self.sink.emit(&PanelEvent::SensorRegistered(announced));
                true
            }
            Err(e) => {
                warn!("registration rejected: {e}");
                self.sink.emit(&PanelEvent::DuplicateSensor(announced.id));
                false
            }
        }
    }

    /// Evaluate one reading.  Blocks for the verification window when the
    /// threshold is met.
    pub fn process_event(&mut self, reading: &SensorReading) -> Evaluation {
        self.engine.evaluate(
            reading,
            EvalContext {
                registry: &self.registry,
                energy: &self.energy,
                notifier: &self.notifier,
                delay: &mut self.delay,
                sink: &mut self.sink,
            },
        )
    }

    pub fn report_power_failure(&mut self) {
        self.energy.report_failure(&mut self.sink);
    }

    pub fn restore_power(&mut self) {
        self.energy.restore(&mut self.sink);
    }

    /// Execute a parsed operator command.  Returns the evaluation outcome
    /// for readings, `None` for power commands.
    pub fn handle_command(&mut self, cmd: PanelCommand) -> Option<Evaluation> {
        match cmd {
            PanelCommand::SubmitReading { sensor_id, value } => {
                let reading = self.reading_for(sensor_id, value);
                Some(self.process_event(&reading))
            }
            PanelCommand::ReportPowerFailure => {
                self.report_power_failure();
                None
            }
            PanelCommand::RestorePower => {
                self.restore_power();
                None
            }
        }
    }

    /// Build a reading tagged with the registered kind, or
    /// [`UNKNOWN_KIND`] when the id is not registered.
    pub fn reading_for(&self, sensor_id: SensorId, value: f64) -> SensorReading {
        let kind = self
            .registry
            .get(sensor_id)
            .map_or(UNKNOWN_KIND, |s| s.kind.as_str());
        SensorReading::new(sensor_id, kind, value)
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn sensor(&self, id: SensorId) -> Option<&Sensor> {
        self.registry.get(id)
    }

    /// Registered sensors in registration order.
    pub fn sensors(&self) -> &[Sensor] {
        self.registry.list()
    }

    pub fn power_state(&self) -> PowerState {
        self.energy.current_state()
    }

    pub fn stats(&self) -> EvaluationStats {
        self.engine.stats()
    }

    pub fn power_transitions(&self) -> u64 {
        self.energy.transitions()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }
}
