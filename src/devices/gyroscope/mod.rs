//! ITG-3200 Gyroscope Driver
//!
//! I2C driver for the InvenSense ITG-3200 triple-axis gyroscope.
//!
//! ## Features
//!
//! - ±2000 °/s full scale, 14.375 LSB per °/s
//! - Configurable DLPF bandwidth and sample rate (100 Hz default)
//! - Zero-rate baseline captured at rest
//!
//! ## Usage
//!
//! ```ignore
//! use motion_sense::devices::gyroscope::{Gyroscope, GyroscopeConfig};
//! use motion_sense::devices::traits::Sensor;
//!
//! let mut gyro = Gyroscope::new(i2c, GyroscopeConfig::default())?;
//! gyro.configure();
//! gyro.calculate();
//! let dps = gyro.calculated();
//! ```

mod config;
mod driver;
pub mod registers;

pub use config::{DEFAULT_SAMPLE_RATE_DIV, DEFAULT_SCALE_FACTOR, DlpfBandwidth, GyroscopeConfig};
pub use driver::{Gyroscope, LABEL, NAME};
