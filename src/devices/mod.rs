//! Device drivers
//!
//! Sensor drivers written against the platform traits, so the same code runs
//! on hardware and against the mocks.
//!
//! ## Modules
//!
//! - `accelerometer`: analog triple-axis accelerometer over an ADC
//! - `gyroscope`: ITG-3200 gyroscope over I2C
//! - `calibration`: at-rest zero capture
//! - `report`: tab-separated reading output
//! - `traits`: `Sensor` trait and error types

pub mod accelerometer;
pub mod calibration;
pub mod gyroscope;
pub mod report;
pub mod traits;
