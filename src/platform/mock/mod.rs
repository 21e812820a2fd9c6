//! Mock collaborator implementations for testing
//!
//! This module provides recording implementations of the platform traits
//! that can be used for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use motion_sense::platform::mock::MockI2c;
//! use motion_sense::platform::traits::I2cInterface;
//!
//! let mut i2c = MockI2c::new(0x69);
//! i2c.set_register(0x1D, 0x01);
//! assert_eq!(i2c.read_register(0x69, 0x1D)?, 0x01);
//! ```

#![cfg(any(test, feature = "mock"))]

mod adc;
mod i2c;

pub use adc::{AdcRead, MOCK_ADC_CHANNELS, MockAdc};
pub use i2c::{I2cTransaction, MockI2c};
