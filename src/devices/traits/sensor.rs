//! Sensor Trait and Error Types
//!
//! Device-independent interface shared by every smoothed three-axis sensor.
//!
//! ## Usage
//!
//! ```ignore
//! use motion_sense::devices::traits::Sensor;
//!
//! fn poll<S: Sensor>(sensor: &mut S) {
//!     sensor.calculate();
//!     let out = sensor.calculated();
//!     // out.x, out.y, out.z in the sensor's physical unit
//! }
//! ```

use core::fmt;

use motion_sense_core::AxisTriple;
use nalgebra::Vector3;

use crate::platform::PlatformError;

/// Configuration rejected at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Reference voltage is zero, negative or not finite
    ReferenceVoltage,
    /// ADC full-scale count is zero, negative or not finite
    AdcFullScale,
    /// Zero-g voltage is not finite
    ZeroGVoltage,
    /// Accelerometer sensitivity is zero or not finite
    Sensitivity,
    /// Gyroscope scale factor is zero or not finite
    ScaleFactor,
    /// Bus address does not fit in 7 bits
    BusAddress,
}

/// Sensor error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Collaborator (ADC / I2C) reported a failure
    Bus(PlatformError),

    /// Driver configuration is unusable
    InvalidConfig(ConfigError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ReferenceVoltage => write!(f, "reference voltage must be positive"),
            ConfigError::AdcFullScale => write!(f, "ADC full scale must be positive"),
            ConfigError::ZeroGVoltage => write!(f, "zero-g voltage must be finite"),
            ConfigError::Sensitivity => write!(f, "sensitivity must be non-zero"),
            ConfigError::ScaleFactor => write!(f, "scale factor must be non-zero"),
            ConfigError::BusAddress => write!(f, "bus address must be 7-bit"),
        }
    }
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::Bus(e) => write!(f, "{}", e),
            SensorError::InvalidConfig(e) => write!(f, "invalid configuration: {}", e),
        }
    }
}

impl From<PlatformError> for SensorError {
    fn from(e: PlatformError) -> Self {
        SensorError::Bus(e)
    }
}

impl From<ConfigError> for SensorError {
    fn from(e: ConfigError) -> Self {
        SensorError::InvalidConfig(e)
    }
}

/// Smoothed three-axis sensor
///
/// Implementors own an [`AxisTriple`] and supply the two hardware-specific
/// steps: pulling raw samples ([`read_pins`](Sensor::read_pins)) and turning
/// the smoothed averages into physical units ([`calculate`](Sensor::calculate)).
/// Everything else is provided on top of the axis state.
pub trait Sensor {
    /// Human-readable sensor name
    fn name(&self) -> &str;

    /// Prefix used when printing readings
    fn label(&self) -> &str {
        self.name()
    }

    /// Smoothing state
    fn axes(&self) -> &AxisTriple;

    /// Mutable smoothing state
    fn axes_mut(&mut self) -> &mut AxisTriple;

    /// Pull one raw sample per axis from hardware and smooth it
    fn read_pins(&mut self);

    /// Read, then convert the averages into physical units
    ///
    /// Every call triggers a fresh hardware read.
    fn calculate(&mut self);

    /// Capture the current averages as the zero baseline
    fn set_zero(&mut self) {
        let zero = self.axes_mut().set_zero();
        crate::log_info!(
            "{} zero set: [{}, {}, {}]",
            self.name(),
            zero.x,
            zero.y,
            zero.z
        );
    }

    /// Smoothed raw averages
    fn averages(&self) -> Vector3<f64> {
        self.axes().averages()
    }

    /// Zero baseline
    fn zero(&self) -> Vector3<f64> {
        self.axes().zero()
    }

    /// Last physical-unit output
    fn calculated(&self) -> Vector3<f64> {
        self.axes().calculated()
    }
}

impl<S: Sensor + ?Sized> Sensor for &mut S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn label(&self) -> &str {
        (**self).label()
    }

    fn axes(&self) -> &AxisTriple {
        (**self).axes()
    }

    fn axes_mut(&mut self) -> &mut AxisTriple {
        (**self).axes_mut()
    }

    fn read_pins(&mut self) {
        (**self).read_pins()
    }

    fn calculate(&mut self) {
        (**self).calculate()
    }

    fn set_zero(&mut self) {
        (**self).set_zero()
    }
}
