//! Platform abstraction traits
//!
//! This module defines the collaborator traits that sensor drivers consume.

pub mod adc;
pub mod i2c;

// Re-export trait interfaces
pub use adc::AdcInterface;
pub use i2c::I2cInterface;
