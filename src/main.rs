//! Alarm panel simulator — console entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  FileLogSink      BlockingDelay        JsonConfigFile    │
//! │  (EventSink)      (VerificationDelay)  (ConfigPort)      │
//! │                                                          │
//! │  ────────────── Port Trait Boundary ──────────────       │
//! │                                                          │
//! │  ┌──────────────────────────────────────────────────┐    │
//! │  │           PanelController (pure logic)           │    │
//! │  │  Registry · Evaluation · Energy · Notifier       │    │
//! │  └──────────────────────────────────────────────────┘    │
//! │                                                          │
//! │  Console (stdin / stdout operator menu)                  │
//! └──────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use alarm_panel::PanelController;
use alarm_panel::adapters::config_file::JsonConfigFile;
use alarm_panel::adapters::delay::BlockingDelay;
use alarm_panel::adapters::log_sink::FileLogSink;
use alarm_panel::app::ports::ConfigPort;
use alarm_panel::config::PanelConfig;
use alarm_panel::console::Console;

/// Building security panel simulator
#[derive(Parser, Debug)]
#[command(name = "alarm-panel", version, long_about = None)]
struct Args {
    /// JSON configuration file (defaults are used when it does not exist)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Event log file (overrides the config file)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Verification window in milliseconds (overrides the config file)
    #[arg(long)]
    verify_delay_ms: Option<u64>,

    /// Write the effective configuration to --config and exit
    #[arg(long, default_value_t = false, requires = "config")]
    write_default_config: bool,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    // ── 1. Configuration ──────────────────────────────────────
    let mut config = match &args.config {
        Some(path) => {
            let store = JsonConfigFile::new(path);
            store
                .load()
                .with_context(|| format!("loading config from {}", store.path().display()))?
        }
        None => PanelConfig::default(),
    };
    if let Some(path) = args.log_file {
        config.log_path = path;
    }
    if let Some(ms) = args.verify_delay_ms {
        config.verification_delay_ms = ms;
    }
    config.validate().context("invalid configuration")?;

    if args.write_default_config {
        if let Some(path) = &args.config {
            let store = JsonConfigFile::new(path);
            store
                .save(&config)
                .with_context(|| format!("writing config to {}", store.path().display()))?;
            info!("configuration written to {}", store.path().display());
        }
        return Ok(());
    }

    // ── 2. Adapters ───────────────────────────────────────────
    let sink = FileLogSink::new(&config.log_path);
    if let Err(e) = sink.probe() {
        warn!(
            "event log {} unavailable ({}), continuing with console output only",
            sink.path().display(),
            e
        );
    }
    let delay = BlockingDelay::new(config.verification_delay());
    info!(
        "event log: {}, verification window: {:?}",
        sink.path().display(),
        delay.window()
    );

    // ── 3. Panel + operator loop ──────────────────────────────
    println!("Starting alarm panel simulator v{}...", env!("CARGO_PKG_VERSION"));
    let mut panel = PanelController::from_config(&config, sink, delay);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    console.run(&mut panel).context("operator console I/O")?;

    let stats = panel.stats();
    info!(
        "session ended: {} reading(s), {} alarm(s), {} unknown, {} log write failure(s)",
        stats.readings,
        stats.alarms_confirmed,
        stats.unknown_rejected,
        panel.sink().write_failures()
    );
    Ok(())
}
