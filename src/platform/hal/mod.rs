//! embedded-hal collaborator adapters
//!
//! Bridges HAL peripherals to the platform traits. Only I2C has a blocking
//! embedded-hal 1.0 trait; ADC access is board-specific and implements
//! [`AdcInterface`](crate::platform::traits::AdcInterface) directly.

pub mod i2c;

pub use i2c::HalI2c;
