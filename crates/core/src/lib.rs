//! motion_sense_core - Pure no_std signal processing for motion sensors
//!
//! This crate contains the hardware-independent part of the sensor stack:
//! smoothing, calibration baselines and unit conversion. It is tested on the
//! host without any feature flags.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies, no allocation
//! - **Drivers live elsewhere**: Bus and ADC access is the caller's concern
//!
//! # Modules
//!
//! - [`smoothing`]: Fixed-window moving average ring
//! - [`axis`]: Three-axis smoothing with zero baseline and output
//! - [`conversion`]: Count to g / °/s formulas and byte assembly

#![no_std]

pub mod axis;
pub mod conversion;
pub mod smoothing;

pub use axis::AxisTriple;
pub use smoothing::{SmoothingBuffer, WINDOW};
