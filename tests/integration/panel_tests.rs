//! Integration tests for the PanelController → engine → notifier pipeline.
//!
//! Walks the reference scenarios end to end: register, evaluate normal and
//! alarming readings, unknown ids, and power switching.

use alarm_panel::Evaluation;
use alarm_panel::app::events::PanelEvent;
use alarm_panel::power::PowerState;
use alarm_panel::sensors::{Sensor, SensorReading};

use crate::mock_ports::{bootstrap_panel, empty_panel};

fn smoke_101() -> Sensor {
    Sensor::new(101, "Smoke", 1, 50.0)
}

// ── Reference scenario: normal, alarm, unknown ────────────────

#[test]
fn normal_reading_raises_no_alarm() {
    let mut panel = empty_panel();
    assert!(panel.register_sensor(smoke_101()));
    panel.sink_mut().clear();

    let outcome = panel.process_event(&SensorReading::new(101, "Smoke", 30.0));

    assert_eq!(outcome, Evaluation::Normal);
    assert!(panel.sink().alarm_outputs().is_empty());
    assert!(panel.delay().verified.is_empty());
}

#[test]
fn alarming_reading_fires_strobe_siren_notify_in_order() {
    let mut panel = empty_panel();
    panel.register_sensor(smoke_101());
    panel.sink_mut().clear();

    let outcome = panel.process_event(&SensorReading::new(101, "Smoke", 60.0));

    assert_eq!(outcome, Evaluation::AlarmConfirmed);
    assert_eq!(panel.delay().verified, vec![(101, 60.0)]);
    assert_eq!(
        panel.sink().alarm_outputs(),
        vec![
            &PanelEvent::StrobesActivated(1),
            &PanelEvent::SirenActivated(1),
            &PanelEvent::MonitoringNotified {
                sensor_id: 101,
                kind: "Smoke".into(),
                value: 60.0,
                power: PowerState::Primary,
            },
        ]
    );
}

#[test]
fn threshold_exceeded_precedes_confirmation() {
    let mut panel = empty_panel();
    panel.register_sensor(smoke_101());
    panel.sink_mut().clear();

    panel.process_event(&SensorReading::new(101, "Smoke", 60.0));

    let rendered = panel.sink().rendered();
    let verifying = rendered
        .iter()
        .position(|l| l.ends_with("Verifying..."))
        .expect("verifying line");
    let confirmed = rendered
        .iter()
        .position(|l| l == "ALARM CONFIRMED for sensor 101")
        .expect("confirmation line");
    assert!(verifying < confirmed);
}

#[test]
fn unknown_sensor_is_rejected_without_alarm() {
    let mut panel = empty_panel();
    panel.register_sensor(smoke_101());
    panel.sink_mut().clear();

    let outcome = panel.process_event(&SensorReading::new(999, "Unknown", 10.0));

    assert_eq!(outcome, Evaluation::UnknownSensor(999));
    assert!(panel.sink().alarm_outputs().is_empty());
    assert!(panel.sink().events.contains(&PanelEvent::UnknownSensor(999)));
}

#[test]
fn nan_reading_is_treated_as_normal() {
    let mut panel = empty_panel();
    panel.register_sensor(smoke_101());
    panel.sink_mut().clear();

    let outcome = panel.process_event(&SensorReading::new(101, "Smoke", f64::NAN));

    assert_eq!(outcome, Evaluation::Normal);
    assert!(panel.sink().alarm_outputs().is_empty());
    assert!(panel.delay().verified.is_empty());
}

// ── Power state flows into notifications ──────────────────────

#[test]
fn alarm_during_power_failure_reports_backup() {
    let mut panel = empty_panel();
    panel.register_sensor(smoke_101());
    panel.report_power_failure();
    panel.sink_mut().clear();

    panel.process_event(&SensorReading::new(101, "Smoke", 60.0));

    assert!(matches!(
        panel.sink().alarm_outputs().last(),
        Some(PanelEvent::MonitoringNotified {
            power: PowerState::Backup,
            ..
        })
    ));
}

#[test]
fn restore_returns_notifications_to_primary() {
    let mut panel = bootstrap_panel();
    panel.report_power_failure();
    panel.restore_power();
    panel.sink_mut().clear();

    panel.process_event(&SensorReading::new(201, "Smoke", 55.0));

    assert_eq!(
        panel.sink().alarm_outputs(),
        vec![
            &PanelEvent::StrobesActivated(2),
            &PanelEvent::SirenActivated(2),
            &PanelEvent::MonitoringNotified {
                sensor_id: 201,
                kind: "Smoke".into(),
                value: 55.0,
                power: PowerState::Primary,
            },
        ]
    );
}

#[test]
fn power_switch_sends_synthetic_energy_notification() {
    let mut panel = empty_panel();
    panel.report_power_failure();
    assert_eq!(
        panel.sink().events,
        vec![
            PanelEvent::PowerSwitched(PowerState::Backup),
            PanelEvent::MonitoringNotified {
                sensor_id: -1,
                kind: "ENERGY".into(),
                value: 0.0,
                power: PowerState::Backup,
            },
        ]
    );
}

// ── Registry behaviour through the controller ─────────────────

#[test]
fn duplicate_registration_keeps_first_sensor() {
    let mut panel = empty_panel();
    assert!(panel.register_sensor(smoke_101()));
    assert!(!panel.register_sensor(Sensor::new(101, "Temp", 7, 1.0)));

    assert_eq!(panel.sensors().len(), 1);
    assert_eq!(panel.sensor(101), Some(&smoke_101()));
    assert_eq!(
        panel.sink().events.last(),
        Some(&PanelEvent::DuplicateSensor(101))
    );
}

#[test]
fn notification_uses_registered_kind() {
    let mut panel = bootstrap_panel();
    // The kind on the reading is caller-supplied; the registry wins.
    panel.process_event(&SensorReading::new(999, "Bogus", 1.0));
    assert_eq!(
        panel.sink().alarm_outputs()[2],
        &PanelEvent::MonitoringNotified {
            sensor_id: 999,
            kind: "Manual".into(),
            value: 1.0,
            power: PowerState::Primary,
        }
    );
}

#[test]
fn stats_track_a_mixed_session() {
    let mut panel = bootstrap_panel();
    for (id, value) in [(101, 10.0), (102, 70.0), (201, 49.99), (42, 1.0), (999, 0.5)] {
        panel.process_event(&SensorReading::new(id, "x", value));
    }
    let stats = panel.stats();
    assert_eq!(stats.readings, 5);
    assert_eq!(stats.normal, 3);
    assert_eq!(stats.alarms_confirmed, 1);
    assert_eq!(stats.unknown_rejected, 1);
}
