//! Scripted operator sessions against the console.
//!
//! The console reads from a byte slice and writes into a buffer, so a
//! whole menu session runs without a terminal.

use alarm_panel::app::events::PanelEvent;
use alarm_panel::console::Console;
use alarm_panel::power::PowerState;

use crate::mock_ports::{MockPanel, bootstrap_panel};

fn session(script: &str) -> (MockPanel, String) {
    let mut panel = bootstrap_panel();
    let mut out = Vec::new();
    Console::new(script.as_bytes(), &mut out)
        .run(&mut panel)
        .expect("in-memory console I/O");
    (panel, String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn full_session_walkthrough() {
    // normal reading, power failure, alarm on backup, restore, list, quit
    let (panel, out) = session("1\n101\n30\n2\n1\n201\n150\n3\n4\n0\n");

    assert_eq!(panel.stats().normal, 1);
    assert_eq!(panel.stats().alarms_confirmed, 1);
    assert_eq!(panel.power_state(), PowerState::Primary);
    assert!(panel.sink().events.contains(&PanelEvent::MonitoringNotified {
        sensor_id: 201,
        kind: "Smoke".into(),
        value: 150.0,
        power: PowerState::Backup,
    }));
    assert!(out.contains("Registered sensors:"));
    assert!(out.contains("Sensor[ID=201, Kind=Smoke, Zone=2, Threshold=50]"));
}

#[test]
fn manual_confirmation_resubmits_doubled_value() {
    let (panel, out) = session("1\n102\n70\nyes\n0\n");

    assert!(out.contains("Confirm alarm manually? (y/n)"));
    assert_eq!(panel.delay().verified, vec![(102, 70.0), (102, 140.0)]);
}

#[test]
fn manual_confirmation_declined() {
    let (panel, out) = session("1\n102\n139.9\nno\n0\n");

    assert!(out.contains("Alarm not confirmed by operator."));
    assert_eq!(panel.delay().verified, vec![(102, 139.9)]);
}

#[test]
fn input_ending_mid_prompt_closes_cleanly() {
    let (panel, out) = session("1\n101\n");

    assert!(out.ends_with("Simulator finished.\n"));
    assert_eq!(panel.stats().readings, 0);
}

#[test]
fn malformed_input_never_reaches_the_core() {
    let (panel, _) = session("x\n1\n1.5\n1\n101\nfifty\n0\n");

    assert_eq!(panel.stats().readings, 0);
    assert!(panel.sink().events.is_empty());
}
