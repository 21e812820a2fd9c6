#![cfg_attr(not(test), no_std)]

//! motion_sense - Smoothed accelerometer and gyroscope readings
//!
//! Drivers for an analog triple-axis accelerometer and an ITG-3200 I2C
//! gyroscope. Raw samples pass through an eight-sample moving average
//! (`motion_sense_core`) before conversion to g and °/s.

#[cfg(any(test, feature = "mock"))]
extern crate alloc;

// Platform abstraction layer (ADC / I2C collaborators)
pub mod platform;

// Sensor drivers built on the platform traits
pub mod devices;

// Logging macros
pub mod core;

pub use motion_sense_core::{AxisTriple, SmoothingBuffer, WINDOW};
