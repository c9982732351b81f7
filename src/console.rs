//! Interactive operator console.
//!
//! Reads menu choices from any [`BufRead`] and writes prompts to any
//! [`Write`], so a whole session can be scripted in a test.  Input is
//! parsed at this boundary; malformed entries print a message and leave
//! the panel untouched.
//!
//! The console also owns the manual double-confirmation step: after a
//! reading in the borderline band `threshold <= value < 2 * threshold`,
//! the operator may confirm, which resubmits the reading with its value
//! doubled.  The panel core knows nothing about this.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::app::commands::{
    MenuChoice, PanelCommand, is_affirmative, parse_reading_value, parse_sensor_id,
};
use crate::app::ports::{EventSink, VerificationDelay};
use crate::app::service::PanelController;
use crate::error::PanelError;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run menu rounds until the operator quits or input ends.
    pub fn run<S, D>(&mut self, panel: &mut PanelController<S, D>) -> io::Result<()>
    where
        S: EventSink,
        D: VerificationDelay,
    {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                break;
            };
            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(e) => {
                    self.report(e)?;
                    continue;
                }
            };
            debug!("console: {choice:?}");
            match choice {
                MenuChoice::SubmitReading => {
                    if !self.submit_reading(panel)? {
                        break;
                    }
                }
                MenuChoice::PowerFailure => {
                    panel.handle_command(PanelCommand::ReportPowerFailure);
                }
                MenuChoice::RestorePower => {
                    panel.handle_command(PanelCommand::RestorePower);
                }
                MenuChoice::ListSensors => self.list_sensors(panel)?,
                MenuChoice::Quit => break,
            }
        }
        writeln!(self.output, "Simulator finished.")?;
        self.output.flush()
    }

    /// One "submit reading" round.  Returns `false` when input ran out.
    fn submit_reading<S, D>(&mut self, panel: &mut PanelController<S, D>) -> io::Result<bool>
    where
        S: EventSink,
        D: VerificationDelay,
    {
        let Some(raw_id) = self.prompt("Sensor ID: ")? else {
            return Ok(false);
        };
        let sensor_id = match parse_sensor_id(&raw_id) {
            Ok(id) => id,
            Err(e) => {
                self.report(e)?;
                return Ok(true);
            }
        };
        let Some(raw_value) = self.prompt("Value (numeric): ")? else {
            return Ok(false);
        };
        let value = match parse_reading_value(&raw_value) {
            Ok(v) => v,
            Err(e) => {
                self.report(e)?;
                return Ok(true);
            }
        };

        panel.handle_command(PanelCommand::SubmitReading { sensor_id, value });

        let borderline = panel
            .sensor(sensor_id)
            .is_some_and(|sensor| sensor.is_borderline(value));
        if !borderline {
            return Ok(true);
        }

        let Some(answer) = self.prompt("Confirm alarm manually? (y/n): ")? else {
            return Ok(false);
        };
        if is_affirmative(&answer) {
            panel.handle_command(PanelCommand::SubmitReading {
                sensor_id,
                value: value * 2.0,
            });
        } else {
            writeln!(self.output, "Alarm not confirmed by operator.")?;
        }
        Ok(true)
    }

    fn list_sensors<S, D>(&mut self, panel: &PanelController<S, D>) -> io::Result<()>
    where
        S: EventSink,
        D: VerificationDelay,
    {
        writeln!(self.output, "Registered sensors:")?;
        for sensor in panel.sensors() {
            writeln!(self.output, "{sensor}")?;
        }
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nActions:")?;
        for (key, label) in MenuChoice::ENTRIES {
            writeln!(self.output, "{key} - {label}")?;
        }
        Ok(())
    }

    fn report(&mut self, err: PanelError) -> io::Result<()> {
        writeln!(self.output, "{}.", capitalize(&err.to_string()))
    }

    /// Print `text` and read one line.  `None` on end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
