//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific part of the
//! panel against mock adapters.  Nothing here sleeps or writes outside a
//! temporary directory.

mod console_session_tests;
mod log_file_tests;
mod panel_tests;
