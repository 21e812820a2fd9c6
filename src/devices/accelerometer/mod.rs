//! Analog Accelerometer Driver
//!
//! Triple-axis ratiometric accelerometer (ADXL335 class) read through three
//! ADC channels.
//!
//! ## Conversion
//!
//! ```text
//! g = (average * reference_voltage / adc_full_scale - zero_g_voltage) / sensitivity
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use motion_sense::devices::accelerometer::{Accelerometer, AccelerometerConfig};
//! use motion_sense::devices::traits::Sensor;
//!
//! let mut acc = Accelerometer::new(adc, AccelerometerConfig::default())?;
//! acc.calculate();
//! let g = acc.calculated();
//! ```

mod config;
mod driver;

pub use config::{AccelerometerConfig, DEFAULT_NAME};
pub use driver::Accelerometer;
