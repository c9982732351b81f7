//! File-backed event sink adapter.
//!
//! Implements [`EventSink`] by appending one line per [`PanelEvent`] to the
//! event log file and mirroring it on the `log` facade (console via
//! `env_logger` in the binary).  Line format:
//!
//! ```text
//! 2026-10-19 14:03:27 | INFO | ALARM | ALARM CONFIRMED for sensor 101
//! ```
//!
//! A failed append is reported with `warn!` and counted; the caller never
//! sees it.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::{error, info, warn};

use crate::app::events::{PanelEvent, Severity};
use crate::app::ports::EventSink;
use crate::error::Result;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render an event as a single log line (no trailing newline).
pub fn format_line(at: &DateTime<Local>, event: &PanelEvent) -> String {
    format!(
        "{} | {} | {} | {}",
        at.format(TIMESTAMP_FORMAT),
        event.severity().as_str(),
        event.category().as_str(),
        event
    )
}

/// Adapter that appends every [`PanelEvent`] to a text file.
pub struct FileLogSink {
    path: PathBuf,
    write_failures: u64,
}

impl FileLogSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_failures: 0,
        }
    }

    /// Check that the log file can be opened for appending.
    pub fn probe(&self) -> Result<()> {
        self.open()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends that failed since startup.
    pub fn write_failures(&self) -> u64 {
        self.write_failures
    }

    fn open(&self) -> std::io::Result<std::fs::File> {
        OpenOptions::new().create(true).append(true).open(&self.path)
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        let mut file = self.open()?;
        writeln!(file, "{line}")
    }
}

impl EventSink for FileLogSink {
    fn emit(&mut self, event: &PanelEvent) {
        let line = format_line(&Local::now(), event);
        match event.severity() {
            Severity::Info => info!("{line}"),
            Severity::Error => error!("{line}"),
        }
        if let Err(e) = self.append(&line) {
            self.write_failures += 1;
            warn!("could not write to event log {}: {}", self.path.display(), e);
        }
    }
}
