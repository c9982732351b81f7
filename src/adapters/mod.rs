//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter       | Implements        | Connects to                 |
//! |---------------|-------------------|-----------------------------|
//! | `log_sink`    | EventSink         | Append-only event log file  |
//! | `delay`       | VerificationDelay | Thread sleep / no-op        |
//! | `config_file` | ConfigPort        | JSON config file            |

pub mod config_file;
pub mod delay;
pub mod log_sink;
