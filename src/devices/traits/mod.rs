//! Device traits
//!
//! This module contains hardware-independent trait definitions for sensor drivers.
//! These traits enable:
//! - Unit testing with mock collaborators
//! - Uniform printing and calibration across sensor types
//! - New sensor types without changes to the smoothing core

pub mod sensor;

pub use sensor::{ConfigError, Sensor, SensorError};
