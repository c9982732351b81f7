//! Application core — pure domain logic, zero I/O.
//!
//! This module holds the panel's entry point and the port traits it talks
//! through.  Files, clocks and the console live behind the traits in
//! [`ports`], keeping this layer fully testable without side effects.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
