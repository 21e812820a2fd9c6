//! Analog Accelerometer Configuration
//!
//! Wiring and conversion constants for a ratiometric triple-axis
//! accelerometer read through an ADC.

use motion_sense_core::conversion::adc_full_scale_for_bits;

use crate::devices::traits::ConfigError;

/// Default sensor name, also used as print label
pub const DEFAULT_NAME: &str = "ACC";

/// Accelerometer configuration
///
/// Values come from the sensor datasheet and the board's ADC. They are
/// checked once by [`validate`](Self::validate) when the driver is built and
/// never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccelerometerConfig {
    /// Sensor name shown in printed output
    pub name: &'static str,

    /// ADC channel wired to the X output
    pub x_channel: u8,

    /// ADC channel wired to the Y output
    pub y_channel: u8,

    /// ADC channel wired to the Z output
    pub z_channel: u8,

    /// ADC reference voltage (V), normally 3.30 or 5.00
    pub reference_voltage: f64,

    /// Highest ADC count (1023.0 for a 10-bit converter)
    pub adc_full_scale: f64,

    /// Sensor output at 0 g (V)
    pub zero_g_voltage: f64,

    /// Sensor sensitivity (V/g), e.g. 0.330 for 330 mV/g
    pub sensitivity: f64,
}

impl Default for AccelerometerConfig {
    /// ADXL335 on a 10-bit, 3.3 V converter, channels 0/1/2
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME,
            x_channel: 0,
            y_channel: 1,
            z_channel: 2,
            reference_voltage: 3.30,
            adc_full_scale: 1023.0,
            zero_g_voltage: 1.65,
            sensitivity: 0.330,
        }
    }
}

impl AccelerometerConfig {
    /// Set the ADC full scale from its resolution in bits
    pub fn with_adc_bits(mut self, bits: u8) -> Self {
        self.adc_full_scale = adc_full_scale_for_bits(bits);
        self
    }

    /// Set the three channel numbers (X, Y, Z)
    pub fn with_channels(mut self, x: u8, y: u8, z: u8) -> Self {
        self.x_channel = x;
        self.y_channel = y;
        self.z_channel = z;
        self
    }

    /// Channels in X, Y, Z order
    pub fn channels(&self) -> [u8; 3] {
        [self.x_channel, self.y_channel, self.z_channel]
    }

    /// Reject constants that would make the conversion meaningless
    ///
    /// Ranges are not checked beyond sign and finiteness; matching the
    /// numbers to the actual part is the caller's job.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.reference_voltage.is_finite() && self.reference_voltage > 0.0) {
            return Err(ConfigError::ReferenceVoltage);
        }
        if !(self.adc_full_scale.is_finite() && self.adc_full_scale > 0.0) {
            return Err(ConfigError::AdcFullScale);
        }
        if !self.zero_g_voltage.is_finite() {
            return Err(ConfigError::ZeroGVoltage);
        }
        if !self.sensitivity.is_finite() || self.sensitivity == 0.0 {
            return Err(ConfigError::Sensitivity);
        }
        Ok(())
    }
}
