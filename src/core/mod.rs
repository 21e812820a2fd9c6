//! Crate-wide infrastructure
//!
//! Holds the logging macros shared by every driver.

pub mod logging;
