//! Alarm output and monitoring notifier.
//!
//! Stateless: each operation turns into one [`PanelEvent`] on the injected
//! sink.  Sinks swallow their own write failures, so none of these calls
//! can fail towards the caller.
//!
//! On a confirmed alarm the engine calls, in this order:
//! [`activate_strobes`](Notifier::activate_strobes),
//! [`activate_siren`](Notifier::activate_siren),
//! [`notify_monitoring`](Notifier::notify_monitoring).

use log::debug;

use crate::app::events::PanelEvent;
use crate::app::ports::EventSink;
use crate::power::PowerState;
use crate::sensors::{SensorId, Zone};

#[derive(Debug, Default, Clone, Copy)]
pub struct Notifier;

impl Notifier {
    pub fn new() -> Self {
        Self
    }

    /// Send a status report to the monitoring station.
    pub fn notify_monitoring(
        &self,
        sensor_id: SensorId,
        kind: &str,
        value: f64,
        power: PowerState,
        sink: &mut impl EventSink,
    ) {
        debug!("notifier: monitoring report for sensor {sensor_id}");
        sink.emit(&PanelEvent::MonitoringNotified {
            sensor_id,
            kind: kind.to_owned(),
            value,
            power,
        });
    }

    pub fn activate_strobes(&self, zone: Zone, sink: &mut impl EventSink) {
        sink.emit(&PanelEvent::StrobesActivated(zone));
    }

    pub fn activate_siren(&self, zone: Zone, sink: &mut impl EventSink) {
        sink.emit(&PanelEvent::SirenActivated(zone));
    }
}
