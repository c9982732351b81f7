//! Alarm panel simulator library.
//!
//! Registers sensors, evaluates simulated readings against their
//! thresholds, confirms alarms (strobes, siren, monitoring notification)
//! and tracks main / backup power.  Every side effect goes through the
//! port traits in [`app::ports`], so the whole core runs in tests without
//! touching files or sleeping.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod console;
pub mod error;
pub mod evaluation;
pub mod notifier;
pub mod power;
pub mod sensors;

pub use app::service::PanelController;
pub use error::PanelError;
pub use evaluation::Evaluation;
