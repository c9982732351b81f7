//! End-to-end event log tests: real `FileLogSink` in a temp directory.

use alarm_panel::PanelController;
use alarm_panel::adapters::delay::NoDelay;
use alarm_panel::adapters::log_sink::FileLogSink;
use alarm_panel::config::PanelConfig;
use alarm_panel::sensors::SensorReading;

#[test]
fn alarm_session_is_written_to_the_event_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("panel_events.log");
    let mut panel =
        PanelController::from_config(&PanelConfig::default(), FileLogSink::new(&path), NoDelay);

    panel.process_event(&SensorReading::new(101, "Smoke", 60.0));
    panel.process_event(&SensorReading::new(555, "Unknown", 1.0));

    let text = std::fs::read_to_string(&path).unwrap();
    let columns: Vec<Vec<&str>> = text.lines().map(|l| l.split(" | ").collect()).collect();

    assert!(columns.iter().all(|c| c.len() == 4), "every line has 4 columns");
    let tail: Vec<(&str, &str, &str)> = columns
        .iter()
        .skip(4) // bootstrap registrations
        .map(|c| (c[1], c[2], c[3]))
        .collect();
    assert_eq!(
        tail,
        vec![
            ("INFO", "READING", "Reading ID=101 Value=60"),
            ("INFO", "SENSOR", "Value 60 meets threshold 50. Verifying..."),
            ("INFO", "ALARM", "ALARM CONFIRMED for sensor 101"),
            ("INFO", "OUTPUT", "Strobes activated in zone 1"),
            ("INFO", "OUTPUT", "Siren activated in zone 1"),
            (
                "INFO",
                "NOTIF",
                "Monitoring => Sensor=101, Kind=Smoke, Value=60, Energy=PRIMARY"
            ),
            ("INFO", "READING", "Reading ID=555 Value=1"),
            ("ERROR", "SENSOR", "No sensor with ID=555"),
        ]
    );
}

#[test]
fn unavailable_log_file_does_not_interrupt_evaluation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("events.log");
    let mut panel =
        PanelController::from_config(&PanelConfig::default(), FileLogSink::new(&path), NoDelay);

    let outcome = panel.process_event(&SensorReading::new(101, "Smoke", 60.0));

    assert_eq!(outcome, alarm_panel::Evaluation::AlarmConfirmed);
    assert!(panel.sink().write_failures() > 0);
    assert!(!path.exists());
}
